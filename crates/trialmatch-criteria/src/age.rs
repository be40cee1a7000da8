//! Age-window extraction from inclusion criteria text.
//!
//! The parser recognizes a small, fixed set of phrases. Each pattern is a
//! marker phrase followed by numbers and terminated by the word "years":
//!
//! | pattern  | example                        | window        |
//! |----------|--------------------------------|---------------|
//! | between  | `Age between 40 and 60 years`  | `(40, 60)`    |
//! | above    | `Age above 18 years`           | `(18, 120)`   |
//! | below    | `Age below 12 years`           | `(0, 12)`     |
//!
//! Patterns are tried in that order against the whole text and the first
//! marker found wins; later patterns are never consulted, even when the
//! winning phrase turns out to be malformed. Text with no marker imposes no
//! age restriction. Phrasings outside this table ("Age 65 and above",
//! "aged 18 and above") are not recognized and therefore unrestricted.

use tracing::warn;

use trialmatch_contracts::{AgeRange, MatchError, MatchResult};

/// The word that closes every recognized age phrase.
const UNIT_MARKER: &str = "years";

/// A recognized age phrase, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgePattern {
    Between,
    Above,
    Below,
}

impl AgePattern {
    /// Every pattern, highest priority first.
    pub const ALL: [AgePattern; 3] = [AgePattern::Between, AgePattern::Above, AgePattern::Below];

    /// The lowercase phrase that introduces this pattern.
    pub fn marker(self) -> &'static str {
        match self {
            AgePattern::Between => "age between",
            AgePattern::Above => "age above",
            AgePattern::Below => "age below",
        }
    }
}

/// The age restriction a criteria text states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeClause {
    Between { min: u32, max: u32 },
    Above(u32),
    Below(u32),
    /// No recognized phrase.
    Unrestricted,
}

impl AgeClause {
    /// The pattern this clause was parsed from, if any.
    pub fn pattern(&self) -> Option<AgePattern> {
        match self {
            AgeClause::Between { .. } => Some(AgePattern::Between),
            AgeClause::Above(_) => Some(AgePattern::Above),
            AgeClause::Below(_) => Some(AgePattern::Below),
            AgeClause::Unrestricted => None,
        }
    }

    /// Resolve to a concrete window. Open ends take their bound from
    /// `unbounded`.
    pub fn to_range(self, unbounded: AgeRange) -> AgeRange {
        match self {
            AgeClause::Between { min, max } => AgeRange::new(min, max),
            AgeClause::Above(min) => AgeRange::new(min, unbounded.max_age),
            AgeClause::Below(max) => AgeRange::new(unbounded.min_age, max),
            AgeClause::Unrestricted => unbounded,
        }
    }
}

/// Parse the age clause out of `text`, case-insensitively.
///
/// # Errors
///
/// Returns `MatchError::MalformedAgePhrase` when a marker phrase is present
/// but what follows it is not `<number> years` (or `<number> and <number>
/// years` for the between pattern).
pub fn parse_age_clause(text: &str) -> MatchResult<AgeClause> {
    let lower = text.to_lowercase();

    for pattern in AgePattern::ALL {
        let marker = pattern.marker();
        let Some(start) = lower.find(marker) else {
            continue;
        };

        let rest = &lower[start + marker.len()..];
        let body = match rest.find(UNIT_MARKER) {
            Some(end) => &rest[..end],
            None => {
                return Err(malformed(
                    pattern,
                    format!("no '{UNIT_MARKER}' follows the phrase"),
                ))
            }
        };

        return match pattern {
            AgePattern::Between => {
                let bounds: Vec<&str> = body.split("and").collect();
                match bounds.as_slice() {
                    [min, max] => Ok(AgeClause::Between {
                        min: parse_years(pattern, min)?,
                        max: parse_years(pattern, max)?,
                    }),
                    _ => Err(malformed(
                        pattern,
                        format!("expected '<min> and <max>', found '{}'", body.trim()),
                    )),
                }
            }
            AgePattern::Above => Ok(AgeClause::Above(parse_years(pattern, body)?)),
            AgePattern::Below => Ok(AgeClause::Below(parse_years(pattern, body)?)),
        };
    }

    Ok(AgeClause::Unrestricted)
}

/// Parse the age window out of `text`, never failing.
///
/// A malformed phrase is logged and treated as no restriction.
pub fn parse_age_range(text: &str) -> AgeRange {
    parse_age_range_within(text, AgeRange::UNBOUNDED)
}

/// Like [`parse_age_range`], with a caller-chosen unrestricted window.
pub fn parse_age_range_within(text: &str, unbounded: AgeRange) -> AgeRange {
    match parse_age_clause(text) {
        Ok(clause) => clause.to_range(unbounded),
        Err(e) => {
            warn!(error = %e, "unparseable age phrase; applying unrestricted range");
            unbounded
        }
    }
}

fn parse_years(pattern: AgePattern, token: &str) -> MatchResult<u32> {
    let token = token.trim();
    token
        .parse::<u32>()
        .map_err(|_| malformed(pattern, format!("'{token}' is not a whole number of years")))
}

fn malformed(pattern: AgePattern, reason: String) -> MatchError {
    MatchError::MalformedAgePhrase {
        phrase: pattern.marker().to_string(),
        reason,
    }
}
