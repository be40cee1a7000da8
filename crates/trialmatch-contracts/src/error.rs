//! Error types for the trialmatch pipeline.
//!
//! Evaluating a single (patient, trial) pair never fails: malformed criteria
//! degrade that record's result instead. `MatchError` covers the edges of the
//! pipeline (loading data, writing reports, reading configuration) plus the
//! strict age parser, whose errors the forgiving parser turns into a fallback.

use thiserror::Error;

/// The unified error type for trialmatch.
#[derive(Debug, Error)]
pub enum MatchError {
    /// A recognized age phrase was followed by text that could not be parsed.
    #[error("malformed age phrase '{phrase}': {reason}")]
    MalformedAgePhrase { phrase: String, reason: String },

    /// The data provider could not read or decode its input.
    #[error("data source error: {reason}")]
    DataSource { reason: String },

    /// A report sink could not persist or present the reports.
    ///
    /// Fatal for the run: the reports were computed but not delivered.
    #[error("report sink error: {reason}")]
    ReportSink { reason: String },

    /// A configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the trialmatch crates.
pub type MatchResult<T> = Result<T, MatchError>;
