//! Role-based access policy.
//!
//! Every callable operation is listed in [`Operation`] together with the set
//! of roles allowed to perform it. Coordinator zomes never hard-code role
//! lists; they name the operation and let [`authorize`] decide.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The four portals of the hospital. Every user holds exactly one.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Admin,
    Doctor,
    Staff,
    Patient,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Doctor, Role::Staff, Role::Patient];

    /// Upper-case code used in anchors and on the wire to the UI
    pub fn code(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Doctor => "DOCTOR",
            Role::Staff => "STAFF",
            Role::Patient => "PATIENT",
        }
    }

    /// Human-readable portal name
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Doctor => "Doctor",
            Role::Staff => "Staff",
            Role::Patient => "Patient",
        }
    }

    /// Name of the dashboard a freshly signed-in user lands on
    pub fn dashboard(&self) -> &'static str {
        match self {
            Role::Admin => "admin_dashboard",
            Role::Doctor => "doctor_dashboard",
            Role::Staff => "staff_dashboard",
            Role::Patient => "patient_dashboard",
        }
    }

    /// Parse a role code, ignoring case
    pub fn from_code(code: &str) -> Option<Role> {
        Role::ALL
            .into_iter()
            .find(|role| role.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

const ADMIN_ONLY: &[Role] = &[Role::Admin];
const DOCTOR_ONLY: &[Role] = &[Role::Doctor];
const STAFF_ONLY: &[Role] = &[Role::Staff];
const PATIENT_ONLY: &[Role] = &[Role::Patient];
const CLINICAL_TEAM: &[Role] = &[Role::Admin, Role::Doctor, Role::Staff];
const ANY_ROLE: &[Role] = &Role::ALL;

/// Every operation that sits behind the role gate
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Operation {
    // Administration
    ViewAdminDashboard,
    ListDoctors,
    DeleteDoctor,
    ManageUserStatus,
    CreateDepartment,
    ViewUserCounts,
    ListUsersByRole,

    // Doctor portal
    ViewDoctorDashboard,
    AddMedicalRecord,
    AddPrescription,
    ManageDoctorProfile,

    // Staff portal
    ViewStaffDashboard,
    SubmitTriage,
    ManageStaffProfile,

    // Patient portal
    ViewPatientDashboard,
    BookAppointment,
    ManagePatientProfile,

    // Clinical team
    ListPatients,
    ViewPatientDetail,
    ViewTriageQueue,
    ProcessTriage,
    ViewPatientTriageHistory,
    ConfirmAppointment,
    CompleteAppointment,
    IssueGeneralNotification,
    NotifyClinicalResult,

    // Any signed-in user
    CancelAppointment,
    ListAppointments,
    ViewAppointment,
    ViewNotifications,
    NotifyAppointmentParty,
    ViewMedicalHistory,
    WhoAmI,
    UpdateOwnProfile,
    ListDepartments,
    ListActiveDoctors,
}

impl Operation {
    pub fn allowed_roles(&self) -> &'static [Role] {
        use Operation::*;
        match self {
            ViewAdminDashboard | ListDoctors | DeleteDoctor | ManageUserStatus
            | CreateDepartment | ViewUserCounts | ListUsersByRole => ADMIN_ONLY,

            ViewDoctorDashboard | AddMedicalRecord | AddPrescription | ManageDoctorProfile
            | NotifyClinicalResult => DOCTOR_ONLY,

            ViewStaffDashboard | SubmitTriage | ManageStaffProfile => STAFF_ONLY,

            ViewPatientDashboard | BookAppointment | ManagePatientProfile => PATIENT_ONLY,

            ListPatients | ViewPatientDetail | ViewTriageQueue | ProcessTriage
            | ConfirmAppointment | CompleteAppointment | IssueGeneralNotification => CLINICAL_TEAM,

            ViewPatientTriageHistory | CancelAppointment | ListAppointments | ViewAppointment
            | ViewNotifications | NotifyAppointmentParty | ViewMedicalHistory | WhoAmI | UpdateOwnProfile
            | ListDepartments | ListActiveDoctors => ANY_ROLE,
        }
    }

    pub fn permits(&self, role: Role) -> bool {
        self.allowed_roles().contains(&role)
    }

    /// Short verb phrase used in denial messages
    pub fn describe(&self) -> &'static str {
        use Operation::*;
        match self {
            ViewAdminDashboard => "view the admin dashboard",
            ListDoctors => "list doctors",
            DeleteDoctor => "delete a doctor",
            ManageUserStatus => "change account status",
            CreateDepartment => "create a department",
            ViewUserCounts => "view user statistics",
            ListUsersByRole => "list users by role",
            ViewDoctorDashboard => "view the doctor dashboard",
            AddMedicalRecord => "add a medical record",
            AddPrescription => "add a prescription",
            ManageDoctorProfile => "manage a doctor profile",
            ViewStaffDashboard => "view the staff dashboard",
            SubmitTriage => "submit triage intake",
            ManageStaffProfile => "manage a staff profile",
            ViewPatientDashboard => "view the patient dashboard",
            BookAppointment => "book an appointment",
            ManagePatientProfile => "manage a patient profile",
            ListPatients => "list patients",
            ViewPatientDetail => "view patient details",
            ViewTriageQueue => "view the triage queue",
            ProcessTriage => "process triage entries",
            ViewPatientTriageHistory => "view triage history",
            ConfirmAppointment => "confirm appointments",
            CompleteAppointment => "complete appointments",
            IssueGeneralNotification => "issue notifications",
            NotifyClinicalResult => "send clinical notifications",
            NotifyAppointmentParty => "send appointment notifications",
            CancelAppointment => "cancel appointments",
            ListAppointments => "list appointments",
            ViewAppointment => "view appointments",
            ViewNotifications => "view notifications",
            ViewMedicalHistory => "view medical history",
            WhoAmI => "view their profile",
            UpdateOwnProfile => "update their profile",
            ListDepartments => "list departments",
            ListActiveDoctors => "list available doctors",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// What the gate knows about the caller
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Principal {
    pub role: Role,
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AccessDenied {
    #[error("No registered profile for the calling agent")]
    NotRegistered,

    #[error("Account has been deactivated")]
    Deactivated,

    #[error("{role} role is not permitted to {operation}")]
    RoleNotPermitted { role: Role, operation: Operation },
}

/// Decide whether `principal` may perform `operation`.
///
/// Returns the caller's role on success so handlers can branch on it.
pub fn authorize(principal: Option<&Principal>, operation: Operation) -> Result<Role, AccessDenied> {
    let principal = principal.ok_or(AccessDenied::NotRegistered)?;
    if !principal.is_active {
        return Err(AccessDenied::Deactivated);
    }
    if !operation.permits(principal.role) {
        return Err(AccessDenied::RoleNotPermitted {
            role: principal.role,
            operation,
        });
    }
    Ok(principal.role)
}

/// Role-specific sign-in: the account must exist, be active and hold `requested`.
pub fn check_sign_in(principal: Option<&Principal>, requested: Role) -> Result<Role, String> {
    match principal {
        Some(p) if p.is_active && p.role == requested => Ok(requested),
        Some(p) if p.is_active => Err(format!(
            "Invalid credentials for {} role",
            requested.display_name()
        )),
        _ => Err("Invalid username or password".to_string()),
    }
}
