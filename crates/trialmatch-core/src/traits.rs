//! Trait seams of the matching pipeline.
//!
//! - `ConditionMatcher`     — decides whether a term occurs in criteria text
//! - `EligibilityEvaluator` — produces the verdict for one (patient, trial) pair
//! - `DataProvider`         — supplies patients and trials
//! - `ReportSink`           — receives the finished match reports
//!
//! The `Matcher` wires an evaluator to a provider and a sink. Nothing in
//! this crate knows how criteria text is parsed or where records live.

use trialmatch_contracts::{EligibilityResult, MatchReport, MatchResult, Patient, Trial};

/// A strategy for finding a condition or medication name in criteria text.
///
/// Both arguments arrive already case-folded; implementations compare them
/// as given.
pub trait ConditionMatcher: Send + Sync {
    /// Return true if `term` occurs in `text`.
    fn matches(&self, term: &str, text: &str) -> bool;
}

/// Decides whether one patient qualifies for one trial.
///
/// Evaluation is infallible and side-effect free. A trial whose criteria
/// cannot be fully interpreted must still produce a verdict, degraded for
/// that pair only.
pub trait EligibilityEvaluator: Send + Sync {
    fn evaluate(&self, patient: &Patient, trial: &Trial) -> EligibilityResult;
}

/// The source of patient and trial records.
///
/// Records are returned in the order the matcher must preserve.
pub trait DataProvider: Send + Sync {
    fn patients(&self) -> MatchResult<Vec<Patient>>;

    fn trials(&self) -> MatchResult<Vec<Trial>>;
}

/// The destination for finished match reports.
///
/// A failed `accept` is fatal for the run and surfaces as
/// `MatchError::ReportSink`.
pub trait ReportSink: Send + Sync {
    /// Persist or present one complete batch of reports.
    fn accept(&self, reports: &[MatchReport]) -> MatchResult<()>;
}
