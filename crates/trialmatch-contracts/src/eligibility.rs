//! Age windows and per-pair eligibility verdicts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An inclusive `[min_age, max_age]` window.
///
/// Bounds are taken as parsed. A window whose `min_age` exceeds its
/// `max_age` is legal and admits no age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgeRange {
    pub min_age: u32,
    pub max_age: u32,
}

impl AgeRange {
    /// The window applied when criteria text names no age restriction.
    pub const UNBOUNDED: AgeRange = AgeRange {
        min_age: 0,
        max_age: 120,
    };

    pub const fn new(min_age: u32, max_age: u32) -> Self {
        Self { min_age, max_age }
    }

    /// True if `age` lies inside the window, both ends included.
    pub fn contains(&self, age: u32) -> bool {
        self.min_age <= age && age <= self.max_age
    }
}

impl Default for AgeRange {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min_age, self.max_age)
    }
}

/// Why a patient failed a trial's criteria.
///
/// Only the first failing check is reported. The reason never affects the
/// binary verdict; it exists for logs and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Ineligibility {
    /// The patient's age lies outside the trial's window.
    AgeOutOfRange { age: u32, range: AgeRange },
    /// None of the patient's conditions appears in the inclusion text.
    NoInclusionMatch,
    /// One of the patient's conditions appears in the exclusion text.
    ExcludedCondition { condition: String },
    /// One of the patient's medications appears in the exclusion text.
    ExcludedMedication { medication: String },
}

impl fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AgeOutOfRange { age, range } => {
                write!(f, "age {age} outside eligible range {range}")
            }
            Self::NoInclusionMatch => write!(f, "no condition named in inclusion criteria"),
            Self::ExcludedCondition { condition } => {
                write!(f, "condition '{condition}' named in exclusion criteria")
            }
            Self::ExcludedMedication { medication } => {
                write!(f, "medication '{medication}' named in exclusion criteria")
            }
        }
    }
}

/// The verdict for one (patient, trial) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EligibilityResult {
    /// Every check passed.
    Eligible {
        /// Fixed descriptive label copied into the match report.
        label: String,
    },
    /// At least one check failed.
    Ineligible { reason: Ineligibility },
}

impl EligibilityResult {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible { .. })
    }

    /// The match label, present only for eligible pairs.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Eligible { label } => Some(label),
            Self::Ineligible { .. } => None,
        }
    }
}
