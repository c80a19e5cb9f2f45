//! Triage intake: priorities, vital sign ranges and queue ordering.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::validation::{ValidationErrorCode, ValidationResult};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TriagePriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TriagePriority {
    pub fn code(&self) -> &'static str {
        match self {
            TriagePriority::Low => "LOW",
            TriagePriority::Medium => "MEDIUM",
            TriagePriority::High => "HIGH",
            TriagePriority::Urgent => "URGENT",
        }
    }

    /// Higher is seen first
    pub fn rank(&self) -> u8 {
        match self {
            TriagePriority::Low => 0,
            TriagePriority::Medium => 1,
            TriagePriority::High => 2,
            TriagePriority::Urgent => 3,
        }
    }
}

impl Ord for TriagePriority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for TriagePriority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TriagePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Vital signs captured at intake. Every reading is optional.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Vitals {
    /// `SYS/DIA` in mmHg, e.g. `120/80`
    pub blood_pressure: Option<String>,
    pub temperature_f: Option<f64>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    /// Beats per minute
    pub pulse_rate: Option<u32>,
}

pub const TEMPERATURE_F_RANGE: (f64, f64) = (80.0, 115.0);
pub const WEIGHT_KG_MAX: f64 = 500.0;
pub const HEIGHT_CM_MAX: f64 = 300.0;
pub const PULSE_RANGE: (u32, u32) = (20, 250);

impl Vitals {
    pub fn is_empty(&self) -> bool {
        self.blood_pressure.is_none()
            && self.temperature_f.is_none()
            && self.weight_kg.is_none()
            && self.height_cm.is_none()
            && self.pulse_rate.is_none()
    }

    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some(bp) = &self.blood_pressure {
            if parse_blood_pressure(bp).is_none() {
                result.add_error(
                    "blood_pressure",
                    "Blood pressure must look like 120/80 with systolic above diastolic",
                    ValidationErrorCode::InvalidFormat,
                );
            }
        }

        if let Some(t) = self.temperature_f {
            if !t.is_finite() || t < TEMPERATURE_F_RANGE.0 || t > TEMPERATURE_F_RANGE.1 {
                result.add_error("temperature_f", "Temperature must be between 80 and 115 °F", ValidationErrorCode::OutOfRange);
            }
        }

        if let Some(w) = self.weight_kg {
            if !w.is_finite() || w <= 0.0 || w > WEIGHT_KG_MAX {
                result.add_error("weight_kg", "Weight must be between 0 and 500 kg", ValidationErrorCode::OutOfRange);
            }
        }

        if let Some(h) = self.height_cm {
            if !h.is_finite() || h <= 0.0 || h > HEIGHT_CM_MAX {
                result.add_error("height_cm", "Height must be between 0 and 300 cm", ValidationErrorCode::OutOfRange);
            }
        }

        if let Some(p) = self.pulse_rate {
            if p < PULSE_RANGE.0 || p > PULSE_RANGE.1 {
                result.add_error("pulse_rate", "Pulse rate must be between 20 and 250 bpm", ValidationErrorCode::OutOfRange);
            }
        }

        result
    }
}

/// Parse `SYS/DIA`. Systolic must exceed diastolic.
pub fn parse_blood_pressure(value: &str) -> Option<(u32, u32)> {
    let (sys, dia) = value.trim().split_once('/')?;
    let sys: u32 = sys.trim().parse().ok()?;
    let dia: u32 = dia.trim().parse().ok()?;
    let plausible = (50..=300).contains(&sys) && (20..=200).contains(&dia) && sys > dia;
    plausible.then_some((sys, dia))
}

/// Queue order: higher priority first, then earlier check-in first.
pub fn queue_order(a: (TriagePriority, i64), b: (TriagePriority, i64)) -> Ordering {
    b.0.cmp(&a.0).then(a.1.cmp(&b.1))
}

/// Sort intake entries into the order a clinician should see them.
pub fn sort_queue<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> (TriagePriority, i64),
{
    items.sort_by(|a, b| queue_order(key(a), key(b)));
}
