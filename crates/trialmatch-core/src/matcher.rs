//! The matcher: runs the evaluator over every patient x trial pair.
//!
//! Output order is fixed by input order: one report per patient in patient
//! order, and inside each report the eligible trials in trial order. Nothing
//! is ranked or deduplicated.

use chrono::Utc;
use tracing::{debug, info, info_span};
use uuid::Uuid;

use trialmatch_contracts::{MatchReport, MatchResult, Patient, RunSummary, Trial, TrialMatch};

use crate::traits::{DataProvider, EligibilityEvaluator, ReportSink};

/// Drives an `EligibilityEvaluator` across a full data set.
pub struct Matcher {
    evaluator: Box<dyn EligibilityEvaluator>,
}

impl Matcher {
    pub fn new(evaluator: Box<dyn EligibilityEvaluator>) -> Self {
        Self { evaluator }
    }

    /// Evaluate every pair and collect one report per patient.
    ///
    /// Pure: the same inputs always yield the same reports.
    pub fn match_patients(&self, patients: &[Patient], trials: &[Trial]) -> Vec<MatchReport> {
        patients
            .iter()
            .map(|patient| self.match_patient(patient, trials))
            .collect()
    }

    /// Evaluate one patient against every trial.
    pub fn match_patient(&self, patient: &Patient, trials: &[Trial]) -> MatchReport {
        let mut report = MatchReport::new(patient.id.clone());

        for trial in trials {
            let result = self.evaluator.evaluate(patient, trial);

            match result.label() {
                Some(label) => {
                    debug!(patient_id = %patient.id, trial_id = %trial.id, "patient eligible");
                    report.eligible_trials.push(TrialMatch {
                        trial_id: trial.id.clone(),
                        trial_name: trial.title.clone(),
                        eligibility_criteria_met: label.to_string(),
                    });
                }
                None => {
                    debug!(
                        patient_id = %patient.id,
                        trial_id = %trial.id,
                        verdict = ?result,
                        "patient not eligible"
                    );
                }
            }
        }

        report
    }

    /// Load from `provider`, match, and deliver the reports to `sink`.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if records cannot be loaded, and the
    /// sink's error if the reports cannot be delivered. Evaluation itself
    /// never fails.
    pub fn run(
        &self,
        provider: &dyn DataProvider,
        sink: &dyn ReportSink,
    ) -> MatchResult<(Vec<MatchReport>, RunSummary)> {
        let run_id = Uuid::new_v4();
        let _span = info_span!("match_run", %run_id).entered();
        let started_at = Utc::now();

        let patients = provider.patients()?;
        let trials = provider.trials()?;

        debug!(
            patients = patients.len(),
            trials = trials.len(),
            "match run starting"
        );

        let reports = self.match_patients(&patients, &trials);
        sink.accept(&reports)?;

        let summary = RunSummary {
            run_id,
            started_at,
            finished_at: Utc::now(),
            patients: patients.len(),
            trials: trials.len(),
            pairs_evaluated: patients.len() * trials.len(),
            matches: reports.iter().map(|r| r.eligible_trials.len()).sum(),
        };

        info!(
            patients = summary.patients,
            trials = summary.trials,
            matches = summary.matches,
            "match run complete"
        );

        Ok((reports, summary))
    }
}
