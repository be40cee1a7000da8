//! Term matching strategies.
//!
//! `SubstringMatcher` is the default and matches the historical behavior:
//! "diabetes" is found in "diabetes mellitus" and also in "prediabetes".
//! `WholeWordMatcher` additionally requires the term to sit between
//! non-alphanumeric characters.

use serde::{Deserialize, Serialize};

use trialmatch_core::traits::ConditionMatcher;

/// Plain substring containment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl ConditionMatcher for SubstringMatcher {
    fn matches(&self, term: &str, text: &str) -> bool {
        text.contains(term)
    }
}

/// Substring containment restricted to word boundaries.
///
/// An empty term never matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeWordMatcher;

impl ConditionMatcher for WholeWordMatcher {
    fn matches(&self, term: &str, text: &str) -> bool {
        if term.is_empty() {
            return false;
        }

        text.match_indices(term).any(|(start, found)| {
            let before = text[..start].chars().next_back();
            let after = text[start + found.len()..].chars().next();
            !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
        })
    }
}

/// Selects a `ConditionMatcher` by name in configuration.
///
/// ```toml
/// strategy = "substring"
/// strategy = "whole-word"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    #[default]
    Substring,
    WholeWord,
}

impl MatchStrategy {
    pub fn build(self) -> Box<dyn ConditionMatcher> {
        match self {
            MatchStrategy::Substring => Box::new(SubstringMatcher),
            MatchStrategy::WholeWord => Box::new(WholeWordMatcher),
        }
    }
}
