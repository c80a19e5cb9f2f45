//! Hospital Rules
//!
//! Domain rules shared by every hospital zome, kept free of any Holochain
//! dependency so they can be tested natively:
//! - Role policy table and the authorization decision
//! - Appointment lifecycle (status transitions, slot conflicts, opening hours)
//! - Triage priorities, vitals ranges and queue ordering
//! - Notification kinds
//! - Field validators for profiles and clinical records
//! - DNA property handling

pub mod appointment;
pub mod config;
pub mod error;
pub mod ids;
pub mod notification;
pub mod profile;
pub mod roles;
pub mod triage;
pub mod validation;

pub use appointment::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use notification::*;
pub use profile::*;
pub use roles::*;
pub use triage::*;
pub use validation::*;

// Date/time types appear in the public API of the validators
pub use chrono::{NaiveDate, NaiveTime};
