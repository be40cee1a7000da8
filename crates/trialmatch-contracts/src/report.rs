//! Match reports and run metadata.
//!
//! `MatchReport` is the output contract handed to report sinks. Its JSON
//! shape is fixed:
//!
//! ```json
//! { "patientId": "...", "eligibleTrials": [
//!     { "trialId": "...", "trialName": "...", "eligibilityCriteriaMet": "..." } ] }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One trial a patient qualified for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialMatch {
    pub trial_id: String,
    pub trial_name: String,
    /// The evaluator's match label.
    pub eligibility_criteria_met: String,
}

/// Every trial one patient qualified for, in trial input order.
///
/// A patient with no matches still gets a report with an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub patient_id: String,
    pub eligible_trials: Vec<TrialMatch>,
}

impl MatchReport {
    pub fn new(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            eligible_trials: Vec::new(),
        }
    }

    /// Trial identifiers in report order.
    pub fn trial_ids(&self) -> impl Iterator<Item = &str> {
        self.eligible_trials.iter().map(|m| m.trial_id.as_str())
    }
}

/// Bookkeeping for one provider-to-sink run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Unique per run. `Matcher::run` records it on the `match_run` span
    /// that encloses the run's log lines.
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub patients: usize,
    pub trials: usize,
    /// Always `patients * trials`.
    pub pairs_evaluated: usize,
    /// Total `TrialMatch` entries across all reports.
    pub matches: usize,
}
