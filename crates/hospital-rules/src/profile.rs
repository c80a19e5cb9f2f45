//! Enumerations and checks for the per-role profiles.

use serde::{Deserialize, Serialize};

use crate::validation::{parse_time, ValidationErrorCode, ValidationResult};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BloodGroup {
    APositive,
    ANegative,
    BPositive,
    BNegative,
    ABPositive,
    ABNegative,
    OPositive,
    ONegative,
}

impl BloodGroup {
    pub fn label(&self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::ABPositive => "AB+",
            BloodGroup::ABNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }
}

pub const DEFAULT_AVAILABLE_FROM: &str = "09:00";
pub const DEFAULT_AVAILABLE_TO: &str = "17:00";

/// Consulting hours must be valid `HH:MM` times with `from` before `to`.
pub fn validate_consulting_hours(from: &str, to: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    match (parse_time(from), parse_time(to)) {
        (Ok(from), Ok(to)) if from < to => {}
        (Ok(_), Ok(_)) => result.add_error(
            "available_to",
            "Consulting hours must end after they start",
            ValidationErrorCode::OutOfRange,
        ),
        _ => result.add_error(
            "available_from",
            "Consulting hours must be HH:MM times",
            ValidationErrorCode::InvalidFormat,
        ),
    }
    result
}
