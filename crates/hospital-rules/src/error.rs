use thiserror::Error;

use crate::appointment::AppointmentStatus;

/// A domain rule was broken by the requested change.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("Validation failed: {0}")]
    Invalid(String),

    #[error("Appointment cannot move from {from} to {to}")]
    InvalidTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Conflict(String),
}

impl RuleViolation {
    pub fn invalid(message: impl Into<String>) -> Self {
        RuleViolation::Invalid(message.into())
    }
}
