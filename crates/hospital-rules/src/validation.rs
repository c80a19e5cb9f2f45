//! Field validators for profiles, appointments and clinical records.
//!
//! Validators accumulate every problem into a [`ValidationResult`] so the UI
//! can show all of them at once instead of one per round trip.

use chrono::{DateTime, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RuleViolation;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Validation error with detailed context
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub code: ValidationErrorCode,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValidationErrorCode {
    Required,
    InvalidFormat,
    OutOfRange,
    TooLong,
    TooShort,
    InvalidCharacters,
    DuplicateValue,
    InvalidReference,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({:?})", self.field, self.message, self.code)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add_error(&mut self, field: &str, message: &str, code: ValidationErrorCode) {
        self.errors.push(ValidationError {
            field: field.to_string(),
            message: message.to_string(),
            code,
        });
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    pub fn has_code(&self, code: ValidationErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Joined message, `None` when valid
    pub fn message(&self) -> Option<String> {
        if self.is_valid() {
            return None;
        }
        let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        Some(messages.join("; "))
    }

    pub fn into_result(self) -> Result<(), RuleViolation> {
        match self.message() {
            None => Ok(()),
            Some(message) => Err(RuleViolation::Invalid(message)),
        }
    }
}

pub fn validate_required(value: &str, field: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    if value.trim().is_empty() {
        result.add_error(field, &format!("{} is required", field), ValidationErrorCode::Required);
    }
    result
}

pub fn validate_max_len(value: &str, max: usize, field: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    if value.chars().count() > max {
        result.add_error(
            field,
            &format!("{} must be at most {} characters", field, max),
            ValidationErrorCode::TooLong,
        );
    }
    result
}

/// Required and bounded, the common case for free-text fields
pub fn validate_text(value: &str, max: usize, field: &str) -> ValidationResult {
    let mut result = validate_required(value, field);
    result.merge(validate_max_len(value, max, field));
    result
}

/// Username: 3-150 characters of letters, digits and `@.+-_`
pub fn validate_username(username: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    if username.is_empty() {
        result.add_error("username", "Username is required", ValidationErrorCode::Required);
        return result;
    }
    if username.len() < 3 {
        result.add_error("username", "Username must be at least 3 characters", ValidationErrorCode::TooShort);
    }
    if username.len() > 150 {
        result.add_error("username", "Username must be at most 150 characters", ValidationErrorCode::TooLong);
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
    {
        result.add_error(
            "username",
            "Username may only contain letters, digits and @/./+/-/_",
            ValidationErrorCode::InvalidCharacters,
        );
    }

    result
}

pub fn validate_email(email: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    if email.is_empty() {
        result.add_error("email", "Email is required", ValidationErrorCode::Required);
        return result;
    }
    if email.len() > 254 {
        result.add_error("email", "Email is too long", ValidationErrorCode::TooLong);
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    let domain_ok = !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.');
    if local.is_empty() || !domain_ok || email.chars().any(char::is_whitespace) {
        result.add_error("email", "Enter a valid email address", ValidationErrorCode::InvalidFormat);
    }

    result
}

/// Optional phone number, at most 15 characters of digits, `+`, `-` and spaces
pub fn validate_phone(phone: &str, field: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    if phone.is_empty() {
        return result;
    }
    if phone.len() > 15 {
        result.add_error(field, "Phone number must be at most 15 characters", ValidationErrorCode::TooLong);
    }
    if !phone.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ')) {
        result.add_error(field, "Phone number contains invalid characters", ValidationErrorCode::InvalidCharacters);
    }
    if !phone.chars().any(|c| c.is_ascii_digit()) {
        result.add_error(field, "Phone number must contain digits", ValidationErrorCode::InvalidFormat);
    }
    result
}

pub fn parse_date(value: &str) -> Result<NaiveDate, RuleViolation> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| RuleViolation::invalid(format!("'{}' is not a YYYY-MM-DD date", value)))
}

/// Accepts `HH:MM` and `HH:MM:SS`
pub fn parse_time(value: &str) -> Result<NaiveTime, RuleViolation> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| RuleViolation::invalid(format!("'{}' is not an HH:MM time", value)))
}

/// Canonical `HH:MM` form of a time string
pub fn normalize_time(value: &str) -> Result<String, RuleViolation> {
    Ok(parse_time(value)?.format(TIME_FORMAT).to_string())
}

pub fn validate_date(value: &str, field: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    // Strict length check: chrono accepts single-digit months otherwise
    if value.len() != 10 || parse_date(value).is_err() {
        result.add_error(field, "Date must be in YYYY-MM-DD format", ValidationErrorCode::InvalidFormat);
    }
    result
}

pub fn validate_time(value: &str, field: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    if value.len() != 5 || parse_time(value).is_err() {
        result.add_error(field, "Time must be in HH:MM format", ValidationErrorCode::InvalidFormat);
    }
    result
}

/// UTC calendar day of a microsecond timestamp
pub fn utc_date_from_micros(micros: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_micros(micros).map(|dt| dt.date_naive())
}

/// "Appointment date cannot be in the past."
pub fn ensure_not_in_past(date: NaiveDate, today: NaiveDate) -> Result<(), RuleViolation> {
    if date < today {
        return Err(RuleViolation::invalid("Appointment date cannot be in the past."));
    }
    Ok(())
}

pub fn validate_age(age: u8) -> ValidationResult {
    let mut result = ValidationResult::new();
    if age > 120 {
        result.add_error("age", "Age must be between 0 and 120", ValidationErrorCode::OutOfRange);
    }
    result
}
