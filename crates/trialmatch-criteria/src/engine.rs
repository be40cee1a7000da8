//! Free-text eligibility evaluation.
//!
//! `CriteriaEvaluator` implements `EligibilityEvaluator` from trialmatch-core.
//!
//! Evaluation algorithm, over case-folded text:
//!
//! 1. Parse the age window from the inclusion text; the patient's age must
//!    lie inside it. An unparseable phrase means no age restriction.
//! 2. At least one patient condition must match the inclusion text.
//! 3. No patient condition may match the exclusion text.
//! 4. No patient medication may match the exclusion text.
//!
//! The first failing check decides the verdict. Blank condition or
//! medication names are ignored.

use tracing::warn_span;

use trialmatch_contracts::{AgeRange, EligibilityResult, Ineligibility, Patient, Trial};
use trialmatch_core::traits::{ConditionMatcher, EligibilityEvaluator};

use crate::{
    age::parse_age_range_within,
    config::{CriteriaConfig, DEFAULT_MATCH_LABEL},
    matching::SubstringMatcher,
};

/// An `EligibilityEvaluator` that reads trial criteria as plain text.
///
/// ```rust,ignore
/// use trialmatch_criteria::CriteriaEvaluator;
///
/// let evaluator = CriteriaEvaluator::from_config(&CriteriaConfig::from_file(path)?);
/// ```
pub struct CriteriaEvaluator {
    matcher: Box<dyn ConditionMatcher>,
    label: String,
    unbounded: AgeRange,
}

impl CriteriaEvaluator {
    /// Substring matching, the default label, and the `(0, 120)` window.
    pub fn new() -> Self {
        Self {
            matcher: Box::new(SubstringMatcher),
            label: DEFAULT_MATCH_LABEL.to_string(),
            unbounded: AgeRange::UNBOUNDED,
        }
    }

    pub fn from_config(config: &CriteriaConfig) -> Self {
        Self {
            matcher: config.strategy.build(),
            label: config.match_label.clone(),
            unbounded: config.age.unbounded(),
        }
    }

    /// Replace the term matching strategy.
    pub fn with_matcher(mut self, matcher: Box<dyn ConditionMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    /// The age window `trial` imposes.
    pub fn age_range(&self, trial: &Trial) -> AgeRange {
        let _span = warn_span!("trial", trial_id = %trial.id).entered();
        parse_age_range_within(&trial.inclusion_criteria, self.unbounded)
    }

    fn first_match<'t>(&self, terms: &'t [String], text: &str) -> Option<&'t String> {
        terms.iter().find(|term| self.matcher.matches(term, text))
    }
}

impl Default for CriteriaEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl EligibilityEvaluator for CriteriaEvaluator {
    fn evaluate(&self, patient: &Patient, trial: &Trial) -> EligibilityResult {
        let range = self.age_range(trial);
        if !range.contains(patient.age) {
            return EligibilityResult::Ineligible {
                reason: Ineligibility::AgeOutOfRange {
                    age: patient.age,
                    range,
                },
            };
        }

        let inclusion = trial.inclusion_criteria.to_lowercase();
        let exclusion = trial.exclusion_criteria.to_lowercase();
        let conditions = fold_terms(&patient.conditions);
        let medications = fold_terms(&patient.medications);

        if self.first_match(&conditions, &inclusion).is_none() {
            return EligibilityResult::Ineligible {
                reason: Ineligibility::NoInclusionMatch,
            };
        }

        if let Some(condition) = self.first_match(&conditions, &exclusion) {
            return EligibilityResult::Ineligible {
                reason: Ineligibility::ExcludedCondition {
                    condition: condition.clone(),
                },
            };
        }

        if let Some(medication) = self.first_match(&medications, &exclusion) {
            return EligibilityResult::Ineligible {
                reason: Ineligibility::ExcludedMedication {
                    medication: medication.clone(),
                },
            };
        }

        EligibilityResult::Eligible {
            label: self.label.clone(),
        }
    }
}

/// Lowercase every non-blank term.
fn fold_terms(terms: &[String]) -> Vec<String> {
    terms
        .iter()
        .filter(|t| !t.trim().is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}
