//! Appointment Ledger Tests
//!
//! Tests for booking and the appointment lifecycle:
//! - Past dates, unknown doctors and doctor hours
//! - Double booking of a doctor's slot
//! - PENDING -> CONFIRMED -> COMPLETED, with CANCELLED from either open state
//! - Who may move an appointment, and who gets told

#[cfg(test)]
mod unit_tests {
    use crate::ward::{Ward, WardError};
    use hospital_rules::{AccessDenied, AppointmentStatus, NotificationType, Role, RuleViolation};

    struct Clinic {
        ward: Ward,
        doctor: u32,
        other_doctor: u32,
        staff: u32,
        patient: u32,
        other_patient: u32,
    }

    fn clinic() -> Clinic {
        let mut ward = Ward::new("2026-11-02");
        let doctor = ward.register("Dr. Okafor", Role::Doctor);
        let other_doctor = ward.register("Dr. Lindqvist", Role::Doctor);
        let staff = ward.register("Sam Staff", Role::Staff);
        let patient = ward.register("Pat Patient", Role::Patient);
        let other_patient = ward.register("Quinn Patient", Role::Patient);
        ward.set_hours(doctor, "09:00", "17:00", true);
        Clinic {
            ward,
            doctor,
            other_doctor,
            staff,
            patient,
            other_patient,
        }
    }

    #[test]
    fn test_booking_starts_pending_and_notifies_doctor() {
        let mut c = clinic();
        let id = c.ward.book(c.patient, c.doctor, "2026-11-03", "10:30").unwrap();

        assert_eq!(c.ward.bookings[id].status, AppointmentStatus::Pending);
        let feed = c.ward.feed(c.doctor);
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].kind, NotificationType::Appointment);
    }

    #[test]
    fn test_booking_today_is_allowed_yesterday_is_not() {
        let mut c = clinic();
        assert!(c.ward.book(c.patient, c.doctor, "2026-11-02", "09:00").is_ok());
        assert!(matches!(
            c.ward.book(c.patient, c.doctor, "2026-11-01", "09:00"),
            Err(WardError::Rule(RuleViolation::Invalid(_)))
        ));
    }

    #[test]
    fn test_malformed_date_or_time_rejected() {
        let mut c = clinic();
        assert!(c.ward.book(c.patient, c.doctor, "03/11/2026", "10:00").is_err());
        assert!(c.ward.book(c.patient, c.doctor, "2026-11-03", "25:00").is_err());
        assert!(c.ward.bookings.is_empty());
    }

    #[test]
    fn test_only_patients_book() {
        let mut c = clinic();
        assert!(matches!(
            c.ward.book(c.staff, c.doctor, "2026-11-03", "10:00"),
            Err(WardError::Denied(AccessDenied::RoleNotPermitted { .. }))
        ));
    }

    #[test]
    fn test_booking_with_non_doctor_rejected() {
        let mut c = clinic();
        assert!(c.ward.book(c.patient, c.staff, "2026-11-03", "10:00").is_err());
        assert!(c.ward.book(c.patient, 404, "2026-11-03", "10:00").is_err());
    }

    #[test]
    fn test_booking_with_deactivated_doctor_rejected() {
        let mut c = clinic();
        let admin = c.ward.register("Ada Admin", Role::Admin);
        c.ward.set_active(admin, c.doctor, false).unwrap();
        assert!(c.ward.book(c.patient, c.doctor, "2026-11-03", "10:00").is_err());
    }

    #[test]
    fn test_doctor_hours_are_half_open() {
        let mut c = clinic();
        assert!(c.ward.book(c.patient, c.doctor, "2026-11-03", "09:00").is_ok());
        assert!(c.ward.book(c.patient, c.doctor, "2026-11-03", "16:59").is_ok());
        assert!(c.ward.book(c.patient, c.doctor, "2026-11-03", "17:00").is_err());
        assert!(c.ward.book(c.patient, c.doctor, "2026-11-03", "08:30").is_err());
    }

    #[test]
    fn test_hours_not_enforced_when_disabled() {
        let mut c = clinic();
        c.ward.enforce_doctor_hours = false;
        assert!(c.ward.book(c.patient, c.doctor, "2026-11-03", "20:00").is_ok());
    }

    #[test]
    fn test_unavailable_doctor_refuses_bookings() {
        let mut c = clinic();
        c.ward.set_hours(c.doctor, "09:00", "17:00", false);
        assert!(c.ward.book(c.patient, c.doctor, "2026-11-03", "10:00").is_err());
    }

    #[test]
    fn test_unavailable_doctor_refused_even_without_hour_checks() {
        let mut c = clinic();
        c.ward.enforce_doctor_hours = false;
        c.ward.set_hours(c.doctor, "09:00", "17:00", false);
        assert_eq!(
            c.ward.book(c.patient, c.doctor, "2026-11-03", "10:00"),
            Err(WardError::Rule(RuleViolation::invalid("Doctor is not accepting appointments")))
        );

        c.ward.set_hours(c.doctor, "09:00", "17:00", true);
        assert!(c.ward.book(c.patient, c.doctor, "2026-11-03", "20:00").is_ok());
    }

    #[test]
    fn test_double_booking_conflicts_until_slot_released() {
        let mut c = clinic();
        let first = c.ward.book(c.patient, c.doctor, "2026-11-03", "10:00").unwrap();

        assert!(matches!(
            c.ward.book(c.other_patient, c.doctor, "2026-11-03", "10:00"),
            Err(WardError::Rule(RuleViolation::Conflict(_)))
        ));
        // Same slot with another doctor is fine
        assert!(c.ward.book(c.other_patient, c.other_doctor, "2026-11-03", "10:00").is_ok());

        c.ward.set_status(c.patient, first, AppointmentStatus::Cancelled).unwrap();
        assert!(c.ward.book(c.other_patient, c.doctor, "2026-11-03", "10:00").is_ok());
    }

    #[test]
    fn test_full_lifecycle_by_owning_doctor() {
        let mut c = clinic();
        let id = c.ward.book(c.patient, c.doctor, "2026-11-03", "11:00").unwrap();

        c.ward.set_status(c.doctor, id, AppointmentStatus::Confirmed).unwrap();
        c.ward.set_status(c.doctor, id, AppointmentStatus::Completed).unwrap();
        assert_eq!(c.ward.bookings[id].status, AppointmentStatus::Completed);

        // Terminal
        assert!(matches!(
            c.ward.set_status(c.doctor, id, AppointmentStatus::Cancelled),
            Err(WardError::Rule(RuleViolation::InvalidTransition { .. }))
        ));
    }

    #[test]
    fn test_pending_cannot_jump_to_completed() {
        let mut c = clinic();
        let id = c.ward.book(c.patient, c.doctor, "2026-11-03", "11:00").unwrap();
        assert!(matches!(
            c.ward.set_status(c.staff, id, AppointmentStatus::Completed),
            Err(WardError::Rule(RuleViolation::InvalidTransition {
                from: AppointmentStatus::Pending,
                to: AppointmentStatus::Completed,
            }))
        ));
    }

    #[test]
    fn test_other_doctor_cannot_confirm() {
        let mut c = clinic();
        let id = c.ward.book(c.patient, c.doctor, "2026-11-03", "11:00").unwrap();
        assert!(matches!(
            c.ward.set_status(c.other_doctor, id, AppointmentStatus::Confirmed),
            Err(WardError::Rule(RuleViolation::Forbidden(_)))
        ));
        assert_eq!(c.ward.bookings[id].status, AppointmentStatus::Pending);
    }

    #[test]
    fn test_patient_may_only_cancel_own() {
        let mut c = clinic();
        let id = c.ward.book(c.patient, c.doctor, "2026-11-03", "11:00").unwrap();

        assert!(matches!(
            c.ward.set_status(c.patient, id, AppointmentStatus::Confirmed),
            Err(WardError::Denied(AccessDenied::RoleNotPermitted { .. }))
        ));
        assert!(matches!(
            c.ward.set_status(c.other_patient, id, AppointmentStatus::Cancelled),
            Err(WardError::Rule(RuleViolation::Forbidden(_)))
        ));
        assert!(c.ward.set_status(c.patient, id, AppointmentStatus::Cancelled).is_ok());
    }

    #[test]
    fn test_nothing_moves_back_to_pending() {
        let mut c = clinic();
        let id = c.ward.book(c.patient, c.doctor, "2026-11-03", "11:00").unwrap();
        c.ward.set_status(c.staff, id, AppointmentStatus::Confirmed).unwrap();
        assert!(c.ward.set_status(c.staff, id, AppointmentStatus::Pending).is_err());
    }

    #[test]
    fn test_status_change_notifies_other_parties() {
        let mut c = clinic();
        let id = c.ward.book(c.patient, c.doctor, "2026-11-03", "11:00").unwrap();
        let doctor_before = c.ward.feed(c.doctor).len();

        c.ward.set_status(c.staff, id, AppointmentStatus::Confirmed).unwrap();
        assert_eq!(c.ward.feed(c.patient).len(), 1);
        assert_eq!(c.ward.feed(c.doctor).len(), doctor_before + 1);
        assert!(c.ward.feed(c.staff).is_empty());

        // The acting party is not told about their own change
        c.ward.set_status(c.doctor, id, AppointmentStatus::Completed).unwrap();
        assert_eq!(c.ward.feed(c.patient).len(), 2);
        assert_eq!(c.ward.feed(c.doctor).len(), doctor_before + 1);
    }

    #[test]
    fn test_listing_is_scoped_by_role_and_sorted() {
        let mut c = clinic();
        c.ward.book(c.patient, c.doctor, "2026-11-04", "09:00").unwrap();
        c.ward.book(c.patient, c.doctor, "2026-11-03", "15:00").unwrap();
        c.ward.book(c.other_patient, c.other_doctor, "2026-11-03", "10:00").unwrap();

        let mine = c.ward.visible_bookings(c.patient).unwrap();
        assert_eq!(mine.len(), 2);
        assert_eq!(mine[0].date, "2026-11-03");

        assert_eq!(c.ward.visible_bookings(c.doctor).unwrap().len(), 2);
        assert_eq!(c.ward.visible_bookings(c.other_doctor).unwrap().len(), 1);

        let all = c.ward.visible_bookings(c.staff).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!((all[0].date.as_str(), all[0].time.as_str()), ("2026-11-03", "10:00"));
        assert_eq!(all[2].date, "2026-11-04");
    }
}
