//! # trialmatch-criteria
//!
//! Free-text eligibility evaluation for trialmatch.
//!
//! ## Overview
//!
//! This crate provides [`CriteriaEvaluator`], which implements the
//! [`EligibilityEvaluator`](trialmatch_core::traits::EligibilityEvaluator)
//! trait. It reads an age window out of a trial's inclusion text and checks
//! the patient's conditions and medications against the inclusion and
//! exclusion text with a pluggable [`ConditionMatcher`](trialmatch_core::traits::ConditionMatcher).
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use trialmatch_criteria::{CriteriaConfig, CriteriaEvaluator};
//!
//! let config = CriteriaConfig::from_file(Path::new("trialmatch.toml"))?;
//! let evaluator = CriteriaEvaluator::from_config(&config);
//! // Pass `evaluator` to `trialmatch_core::Matcher::new(...)`.
//! ```

pub mod age;
pub mod config;
pub mod engine;
pub mod matching;

pub use age::{parse_age_clause, parse_age_range, AgeClause, AgePattern};
pub use config::{CriteriaConfig, DEFAULT_MATCH_LABEL};
pub use engine::CriteriaEvaluator;
pub use matching::{MatchStrategy, SubstringMatcher, WholeWordMatcher};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use trialmatch_contracts::{AgeRange, EligibilityResult, Ineligibility, MatchError, Patient, Trial};
    use trialmatch_core::traits::{ConditionMatcher, EligibilityEvaluator};

    use crate::{
        age::parse_age_range_within, CriteriaConfig, CriteriaEvaluator, MatchStrategy,
        DEFAULT_MATCH_LABEL,
    };

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn nct001() -> Trial {
        Trial::new(
            "NCT001",
            "Trial for Diabetes and Hypertension",
            "Inclusion: Patients with both diabetes and hypertension. Age between 40 and 60 years.",
            "Exclusion: Patients with a history of cardiovascular disease or on insulin therapy.",
        )
    }

    fn nct002() -> Trial {
        Trial::new(
            "NCT002",
            "Diabetes Treatment Study for Elderly Patients",
            "Inclusion: Patients diagnosed with diabetes. Age 65 and above.",
            "Exclusion: Patients with uncontrolled hypertension or severe kidney disease.",
        )
    }

    fn nct003() -> Trial {
        Trial::new(
            "NCT003",
            "Heart Disease Study for Middle-Aged Patients",
            "Inclusion: Patients with a confirmed diagnosis of heart disease. Age between 45 and 55 years.",
            "Exclusion: Patients on blood thinners, or with diabetes.",
        )
    }

    fn patient(age: u32, conditions: &[&str]) -> Patient {
        Patient::new("patient", age).with_conditions(conditions.iter().copied())
    }

    fn reason(result: EligibilityResult) -> Ineligibility {
        match result {
            EligibilityResult::Ineligible { reason } => reason,
            other => panic!("expected Ineligible, got {:?}", other),
        }
    }

    // ── 1. reference scenarios ────────────────────────────────────────────────

    #[test]
    fn diabetic_hypertensive_forty_five_matches_nct001() {
        let evaluator = CriteriaEvaluator::new();
        let p = patient(45, &["diabetes", "hypertension"]).with_medications(["Metformin"]);

        let result = evaluator.evaluate(&p, &nct001());
        assert_eq!(
            result,
            EligibilityResult::Eligible {
                label: DEFAULT_MATCH_LABEL.to_string()
            }
        );
    }

    #[test]
    fn diabetic_is_not_eligible_for_nct003() {
        let evaluator = CriteriaEvaluator::new();
        let p = patient(45, &["diabetes", "hypertension"]);

        // No condition names heart disease, so inclusion fails first.
        assert!(!evaluator.evaluate(&p, &nct003()).is_eligible());
        assert_eq!(
            reason(evaluator.evaluate(&p, &nct003())),
            Ineligibility::NoInclusionMatch
        );

        // With heart disease present, the diabetes exclusion decides.
        let p = patient(50, &["heart disease", "diabetes"]);
        assert_eq!(
            reason(evaluator.evaluate(&p, &nct003())),
            Ineligibility::ExcludedCondition {
                condition: "diabetes".to_string()
            }
        );
    }

    #[test]
    fn elderly_diabetic_matches_nct002_without_age_phrase() {
        let evaluator = CriteriaEvaluator::new();
        assert!(evaluator.evaluate(&patient(70, &["diabetes"]), &nct002()).is_eligible());
    }

    // ── 2. age window ─────────────────────────────────────────────────────────

    #[test]
    fn age_bounds_are_inclusive() {
        let evaluator = CriteriaEvaluator::new();
        let trial = Trial::new("T", "Age window", "diabetes. Age between 40 and 60 years", "");

        for age in [40, 50, 60] {
            assert!(evaluator.evaluate(&patient(age, &["diabetes"]), &trial).is_eligible(), "age {age}");
        }
        for age in [39, 61] {
            assert_eq!(
                reason(evaluator.evaluate(&patient(age, &["diabetes"]), &trial)),
                Ineligibility::AgeOutOfRange {
                    age,
                    range: AgeRange::new(40, 60)
                }
            );
        }
    }

    #[test]
    fn no_age_phrase_means_no_age_restriction() {
        let evaluator = CriteriaEvaluator::new();
        let trial = Trial::new("T", "Open", "asthma", "");

        assert!(evaluator.evaluate(&patient(0, &["asthma"]), &trial).is_eligible());
        assert!(evaluator.evaluate(&patient(120, &["asthma"]), &trial).is_eligible());
        assert!(!evaluator.evaluate(&patient(121, &["asthma"]), &trial).is_eligible());
    }

    #[test]
    fn malformed_age_phrase_degrades_to_unrestricted() {
        let evaluator = CriteriaEvaluator::new();
        let trial = Trial::new("T", "Bad age", "asthma. Age between forty and sixty years", "");

        assert_eq!(evaluator.age_range(&trial), AgeRange::UNBOUNDED);
        assert!(evaluator.evaluate(&patient(8, &["asthma"]), &trial).is_eligible());
    }

    #[test]
    fn malformed_age_phrase_falls_back_to_configured_window() {
        let config = CriteriaConfig::from_toml_str("[age]\ndefault_min = 18\ndefault_max = 99").unwrap();
        let evaluator = CriteriaEvaluator::from_config(&config);
        let trial = Trial::new("T", "Bad age", "asthma. Age above eighteen years", "");

        let window = AgeRange::new(18, 99);
        assert_eq!(evaluator.age_range(&trial), window);
        assert_eq!(
            evaluator.age_range(&trial),
            parse_age_range_within(&trial.inclusion_criteria, window)
        );
        assert!(!evaluator.evaluate(&patient(10, &["asthma"]), &trial).is_eligible());
    }

    #[test]
    fn patient_without_recorded_age_is_treated_as_zero() {
        // A missing age deserializes as 0: it passes "below" windows and
        // fails "above" and "between" windows.
        let evaluator = CriteriaEvaluator::new();
        let p = patient(0, &["asthma"]);

        let pediatric = Trial::new("T1", "Pediatric", "asthma. Age below 12 years", "");
        let adult = Trial::new("T2", "Adult", "asthma. Age above 18 years", "");
        assert!(evaluator.evaluate(&p, &pediatric).is_eligible());
        assert_eq!(
            reason(evaluator.evaluate(&p, &adult)),
            Ineligibility::AgeOutOfRange {
                age: 0,
                range: AgeRange::new(18, 120)
            }
        );
    }

    // ── 3. condition and medication matching ──────────────────────────────────

    #[test]
    fn exclusion_overrides_inclusion() {
        let evaluator = CriteriaEvaluator::new();
        let trial = Trial::new("T", "Both", "Patients with asthma", "Patients with asthma and COPD");

        assert_eq!(
            reason(evaluator.evaluate(&patient(30, &["asthma"]), &trial)),
            Ineligibility::ExcludedCondition {
                condition: "asthma".to_string()
            }
        );
    }

    #[test]
    fn any_single_condition_satisfies_inclusion() {
        let evaluator = CriteriaEvaluator::new();
        let trial = Trial::new("T", "One of", "Patients with heart disease", "");
        assert!(evaluator
            .evaluate(&patient(50, &["gout", "heart disease"]), &trial)
            .is_eligible());
    }

    #[test]
    fn excluded_medication_disqualifies() {
        let evaluator = CriteriaEvaluator::new();
        let trial = Trial::new(
            "NCT005",
            "Osteoporosis Study for Post-Menopausal Women",
            "Inclusion: Post-menopausal women diagnosed with osteoporosis. Age 50 and above.",
            "Exclusion: Patients on hormone replacement therapy or with a history of breast cancer.",
        );
        let p = patient(55, &["osteoporosis"]).with_medications(["Hormone Replacement Therapy"]);

        assert_eq!(
            reason(evaluator.evaluate(&p, &trial)),
            Ineligibility::ExcludedMedication {
                medication: "hormone replacement therapy".to_string()
            }
        );
    }

    #[test]
    fn matching_ignores_case() {
        let evaluator = CriteriaEvaluator::new();
        let trial = Trial::new("T", "Case", "PATIENTS WITH COVID-19", "");
        assert!(evaluator.evaluate(&patient(40, &["Covid-19"]), &trial).is_eligible());
    }

    #[test]
    fn no_conditions_never_match() {
        let evaluator = CriteriaEvaluator::new();
        let trial = Trial::new("T", "Any", "anything at all", "");
        assert_eq!(
            reason(evaluator.evaluate(&patient(40, &[]), &trial)),
            Ineligibility::NoInclusionMatch
        );
    }

    #[test]
    fn blank_terms_are_ignored() {
        let evaluator = CriteriaEvaluator::new();
        let trial = Trial::new("T", "Blank", "asthma", "respiratory conditions");
        let p = patient(10, &["", "asthma", "  "]).with_medications([""]);
        assert!(evaluator.evaluate(&p, &trial).is_eligible());
    }

    #[test]
    fn empty_criteria_text_admits_no_one() {
        let evaluator = CriteriaEvaluator::new();
        let trial = Trial::default();
        assert!(!evaluator.evaluate(&patient(40, &["asthma"]), &trial).is_eligible());
    }

    // ── 4. pluggable matcher ──────────────────────────────────────────────────

    /// Matches nothing, to show the evaluator defers every term lookup.
    struct NeverMatcher;

    impl ConditionMatcher for NeverMatcher {
        fn matches(&self, _term: &str, _text: &str) -> bool {
            false
        }
    }

    #[test]
    fn custom_matcher_replaces_substring_search() {
        let evaluator = CriteriaEvaluator::new().with_matcher(Box::new(NeverMatcher));
        let p = patient(45, &["diabetes", "hypertension"]);
        assert_eq!(
            reason(evaluator.evaluate(&p, &nct001())),
            Ineligibility::NoInclusionMatch
        );
    }

    #[test]
    fn whole_word_strategy_rejects_embedded_terms() {
        let trial = Trial::new("T", "Pre", "Patients with prediabetes", "");
        let p = patient(50, &["diabetes"]);

        let substring = CriteriaEvaluator::new();
        assert!(substring.evaluate(&p, &trial).is_eligible());

        let config = CriteriaConfig {
            strategy: MatchStrategy::WholeWord,
            ..CriteriaConfig::default()
        };
        let whole_word = CriteriaEvaluator::from_config(&config);
        assert!(!whole_word.evaluate(&p, &trial).is_eligible());
    }

    // ── 5. configuration ──────────────────────────────────────────────────────

    #[test]
    fn empty_config_uses_defaults() {
        let config = CriteriaConfig::from_toml_str("").unwrap();
        assert_eq!(config, CriteriaConfig::default());
        assert_eq!(config.match_label, DEFAULT_MATCH_LABEL);
        assert_eq!(config.age.unbounded(), AgeRange::UNBOUNDED);
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let config =
            CriteriaConfig::from_toml_str(include_str!("../../../config/trialmatch.toml")).unwrap();
        assert_eq!(config, CriteriaConfig::default());
    }

    #[test]
    fn config_overrides_label_strategy_and_age_window() {
        let toml = r#"
            match_label = "Screened in"
            strategy = "whole-word"

            [age]
            default_min = 18
            default_max = 99
        "#;

        let config = CriteriaConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.strategy, MatchStrategy::WholeWord);

        let evaluator = CriteriaEvaluator::from_config(&config);
        let trial = Trial::new("T", "Adults", "asthma. Age above 65 years", "");
        assert_eq!(evaluator.age_range(&trial), AgeRange::new(65, 99));

        let result = evaluator.evaluate(&patient(70, &["asthma"]), &trial);
        assert_eq!(result.label(), Some("Screened in"));

        let open = Trial::new("T2", "Open", "asthma", "");
        assert!(!evaluator.evaluate(&patient(10, &["asthma"]), &open).is_eligible());
    }

    #[test]
    fn unknown_strategy_is_config_error() {
        match CriteriaConfig::from_toml_str(r#"strategy = "fuzzy""#) {
            Err(MatchError::ConfigError { reason }) => {
                assert!(reason.contains("failed to parse criteria TOML"), "got: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn unknown_field_is_config_error() {
        assert!(matches!(
            CriteriaConfig::from_toml_str("match_lable = \"typo\""),
            Err(MatchError::ConfigError { .. })
        ));
    }

    #[test]
    fn inverted_default_window_is_config_error() {
        let toml = r#"
            [age]
            default_min = 90
            default_max = 10
        "#;
        match CriteriaConfig::from_toml_str(toml) {
            Err(MatchError::ConfigError { reason }) => assert!(reason.contains("default_min")),
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn missing_config_file_is_config_error() {
        let result = CriteriaConfig::from_file(std::path::Path::new("/nonexistent/trialmatch.toml"));
        assert!(matches!(result, Err(MatchError::ConfigError { .. })));
    }
}
