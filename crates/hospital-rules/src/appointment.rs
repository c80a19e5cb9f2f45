//! Appointment lifecycle rules.
//!
//! ```text
//! PENDING ──► CONFIRMED ──► COMPLETED
//!    │            │
//!    └────────────┴──────► CANCELLED
//! ```

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RuleViolation;
use crate::roles::{Operation, Role};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "PENDING",
            AppointmentStatus::Confirmed => "CONFIRMED",
            AppointmentStatus::Completed => "COMPLETED",
            AppointmentStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, AppointmentStatus::Completed | AppointmentStatus::Cancelled)
    }

    /// Still occupies the doctor's slot
    pub fn holds_slot(&self) -> bool {
        matches!(self, AppointmentStatus::Pending | AppointmentStatus::Confirmed)
    }

    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        use AppointmentStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Completed) | (Confirmed, Cancelled)
        )
    }

    /// Gate operation guarding a move into `self`
    pub fn required_operation(&self) -> Result<Operation, RuleViolation> {
        match self {
            AppointmentStatus::Confirmed => Ok(Operation::ConfirmAppointment),
            AppointmentStatus::Completed => Ok(Operation::CompleteAppointment),
            AppointmentStatus::Cancelled => Ok(Operation::CancelAppointment),
            AppointmentStatus::Pending => Err(RuleViolation::invalid(
                "Appointments cannot be moved back to PENDING",
            )),
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// How the acting agent relates to the appointment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppointmentActor {
    pub role: Role,
    pub is_patient: bool,
    pub is_doctor: bool,
}

impl AppointmentActor {
    pub fn is_party(&self) -> bool {
        self.is_patient || self.is_doctor
    }
}

/// Check a status change requested by `actor`.
///
/// Staff and administrators may act on any appointment, doctors only on
/// their own, and patients may only cancel their own.
pub fn check_status_change(
    actor: AppointmentActor,
    from: AppointmentStatus,
    to: AppointmentStatus,
) -> Result<(), RuleViolation> {
    if !from.can_transition_to(to) {
        return Err(RuleViolation::InvalidTransition { from, to });
    }

    match actor.role {
        Role::Admin | Role::Staff => Ok(()),
        Role::Doctor if actor.is_doctor => Ok(()),
        Role::Doctor => Err(RuleViolation::Forbidden(
            "Doctors may only update their own appointments".to_string(),
        )),
        Role::Patient if actor.is_patient && to == AppointmentStatus::Cancelled => Ok(()),
        Role::Patient if actor.is_patient => Err(RuleViolation::Forbidden(
            "Patients may only cancel their appointments".to_string(),
        )),
        Role::Patient => Err(RuleViolation::Forbidden(
            "Patients may only act on their own appointments".to_string(),
        )),
    }
}

/// Whether the actor may see an appointment at all
pub fn can_view(actor: AppointmentActor) -> bool {
    matches!(actor.role, Role::Admin | Role::Staff) || actor.is_party()
}

/// A booked slot as seen when checking for double bookings
#[derive(Clone, Copy, Debug)]
pub struct BookedSlot<'a> {
    pub date: &'a str,
    pub time: &'a str,
    pub status: AppointmentStatus,
}

/// Fails when an active appointment already occupies `date`/`time`.
pub fn ensure_slot_free<'a, I>(booked: I, date: &str, time: &str) -> Result<(), RuleViolation>
where
    I: IntoIterator<Item = BookedSlot<'a>>,
{
    let taken = booked
        .into_iter()
        .any(|slot| slot.status.holds_slot() && slot.date == date && slot.time == time);
    if taken {
        return Err(RuleViolation::Conflict(format!(
            "Doctor already has an appointment on {} at {}",
            date, time
        )));
    }
    Ok(())
}

/// Opening hours are half-open: `from <= time < to`.
pub fn ensure_within_hours(time: NaiveTime, from: NaiveTime, to: NaiveTime) -> Result<(), RuleViolation> {
    if time < from || time >= to {
        return Err(RuleViolation::invalid(format!(
            "Doctor is available between {} and {}",
            from.format("%H:%M"),
            to.format("%H:%M")
        )));
    }
    Ok(())
}

/// Whether a doctor can take a booking at `time`.
///
/// Availability always applies. `hours` is `None` when consulting hours are
/// not enforced or the doctor has not published them.
pub fn ensure_bookable(
    time: NaiveTime,
    is_available: bool,
    hours: Option<(NaiveTime, NaiveTime)>,
) -> Result<(), RuleViolation> {
    if !is_available {
        return Err(RuleViolation::invalid("Doctor is not accepting appointments"));
    }
    match hours {
        Some((from, to)) => ensure_within_hours(time, from, to),
        None => Ok(()),
    }
}
