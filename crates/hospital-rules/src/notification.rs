use serde::{Deserialize, Serialize};

use crate::roles::Operation;
use crate::validation::{validate_max_len, validate_required, ValidationResult};

pub const MAX_TITLE_LEN: usize = 200;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NotificationType {
    Appointment,
    Prescription,
    TestResult,
    FollowUp,
    #[default]
    General,
}

impl NotificationType {
    pub fn code(&self) -> &'static str {
        match self {
            NotificationType::Appointment => "APPOINTMENT",
            NotificationType::Prescription => "PRESCRIPTION",
            NotificationType::TestResult => "TEST_RESULT",
            NotificationType::FollowUp => "FOLLOW_UP",
            NotificationType::General => "GENERAL",
        }
    }

    /// Gate operation for creating a notification of this kind
    pub fn required_operation(&self) -> Operation {
        match self {
            NotificationType::Appointment => Operation::NotifyAppointmentParty,
            NotificationType::Prescription
            | NotificationType::TestResult
            | NotificationType::FollowUp => Operation::NotifyClinicalResult,
            NotificationType::General => Operation::IssueGeneralNotification,
        }
    }
}

pub fn validate_notification_text(title: &str, message: &str) -> ValidationResult {
    let mut result = validate_required(title, "title");
    result.merge(validate_max_len(title, MAX_TITLE_LEN, "title"));
    result.merge(validate_required(message, "message"));
    result
}

/// Notices raised for the patient when a medical history entry is recorded.
///
/// GENERAL always, then PRESCRIPTION, TEST_RESULT and FOLLOW_UP when the
/// entry carries prescriptions, lab results or a follow-up date.
pub fn record_notices(
    prescription_count: usize,
    lab_results: &str,
    follow_up_date: Option<&str>,
) -> Vec<NotificationType> {
    let mut notices = vec![NotificationType::General];
    if prescription_count > 0 {
        notices.push(NotificationType::Prescription);
    }
    if !lab_results.trim().is_empty() {
        notices.push(NotificationType::TestResult);
    }
    if follow_up_date.is_some_and(|d| !d.trim().is_empty()) {
        notices.push(NotificationType::FollowUp);
    }
    notices
}
