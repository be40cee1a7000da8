//! Evaluator configuration schema.
//!
//! Every field is optional; an empty document yields the defaults.
//!
//! ```toml
//! match_label = "Matched inclusion and exclusion criteria"
//! strategy = "substring"
//!
//! [age]
//! default_min = 0
//! default_max = 120
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use trialmatch_contracts::{AgeRange, MatchError, MatchResult};

use crate::matching::MatchStrategy;

/// The label attached to every match unless configured otherwise.
pub const DEFAULT_MATCH_LABEL: &str = "Matched inclusion and exclusion criteria";

/// Settings for `CriteriaEvaluator`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CriteriaConfig {
    /// Copied into `TrialMatch::eligibility_criteria_met`.
    pub match_label: String,
    pub strategy: MatchStrategy,
    pub age: AgeConfig,
}

/// The window applied when inclusion text states no age restriction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgeConfig {
    pub default_min: u32,
    pub default_max: u32,
}

impl Default for CriteriaConfig {
    fn default() -> Self {
        Self {
            match_label: DEFAULT_MATCH_LABEL.to_string(),
            strategy: MatchStrategy::default(),
            age: AgeConfig::default(),
        }
    }
}

impl Default for AgeConfig {
    fn default() -> Self {
        Self {
            default_min: AgeRange::UNBOUNDED.min_age,
            default_max: AgeRange::UNBOUNDED.max_age,
        }
    }
}

impl AgeConfig {
    pub fn unbounded(&self) -> AgeRange {
        AgeRange::new(self.default_min, self.default_max)
    }
}

impl CriteriaConfig {
    /// Parse `s` as TOML.
    ///
    /// Returns `MatchError::ConfigError` if the TOML is malformed, names an
    /// unknown field or strategy, or sets `default_min` above `default_max`.
    pub fn from_toml_str(s: &str) -> MatchResult<Self> {
        let config: CriteriaConfig = toml::from_str(s).map_err(|e| MatchError::ConfigError {
            reason: format!("failed to parse criteria TOML: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read the file at `path` and parse it as TOML.
    pub fn from_file(path: &Path) -> MatchResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| MatchError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    fn validate(&self) -> MatchResult<()> {
        if self.age.default_min > self.age.default_max {
            return Err(MatchError::ConfigError {
                reason: format!(
                    "age.default_min ({}) exceeds age.default_max ({})",
                    self.age.default_min, self.age.default_max
                ),
            });
        }
        if self.match_label.trim().is_empty() {
            return Err(MatchError::ConfigError {
                reason: "match_label must not be blank".to_string(),
            });
        }
        Ok(())
    }
}
