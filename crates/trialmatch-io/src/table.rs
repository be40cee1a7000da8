//! Tabular export: one row per (patient, trial) match.
//!
//! This is the shape a spreadsheet receives. Patients without matches
//! contribute no rows.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use trialmatch_contracts::{MatchError, MatchReport, MatchResult};
use trialmatch_core::traits::ReportSink;

/// Column headers, in column order.
pub const HEADER: [&str; 4] = ["Patient ID", "Trial ID", "Trial Name", "Eligibility Criteria Met"];

/// One flattened match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub patient_id: String,
    pub trial_id: String,
    pub trial_name: String,
    pub eligibility_criteria_met: String,
}

impl TableRow {
    /// Cell values in `HEADER` order.
    pub fn cells(&self) -> [&str; 4] {
        [
            self.patient_id.as_str(),
            self.trial_id.as_str(),
            self.trial_name.as_str(),
            self.eligibility_criteria_met.as_str(),
        ]
    }
}

/// Flatten reports into rows, keeping patient order then trial order.
pub fn flatten_rows(reports: &[MatchReport]) -> Vec<TableRow> {
    reports
        .iter()
        .flat_map(|report| {
            report.eligible_trials.iter().map(move |m| TableRow {
                patient_id: report.patient_id.clone(),
                trial_id: m.trial_id.clone(),
                trial_name: m.trial_name.clone(),
                eligibility_criteria_met: m.eligibility_criteria_met.clone(),
            })
        })
        .collect()
}

/// Field separator for delimited output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Delimiter {
    /// RFC 4180 CSV: fields holding a comma, quote or line break are quoted.
    #[default]
    Comma,
    /// TSV: tabs and line breaks inside fields become spaces.
    Tab,
}

impl Delimiter {
    fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
        }
    }

    fn escape(self, field: &str) -> String {
        match self {
            Delimiter::Comma => {
                if field.contains([',', '"', '\n', '\r']) {
                    format!("\"{}\"", field.replace('"', "\"\""))
                } else {
                    field.to_string()
                }
            }
            Delimiter::Tab => field.replace(['\t', '\n', '\r'], " "),
        }
    }
}

/// Render a header line plus one line per row.
pub fn render_delimited(rows: &[TableRow], delimiter: Delimiter) -> String {
    let sep = delimiter.as_char().to_string();
    let mut out = String::new();

    let header: Vec<String> = HEADER.iter().map(|h| delimiter.escape(h)).collect();
    out.push_str(&header.join(&sep));
    out.push('\n');

    for row in rows {
        let cells: Vec<String> = row.cells().iter().map(|c| delimiter.escape(c)).collect();
        out.push_str(&cells.join(&sep));
        out.push('\n');
    }

    out
}

/// A `ReportSink` that writes the flattened table to a CSV or TSV file.
#[derive(Debug, Clone)]
pub struct DelimitedFileSink {
    path: PathBuf,
    delimiter: Delimiter,
}

impl DelimitedFileSink {
    pub fn new(path: impl Into<PathBuf>, delimiter: Delimiter) -> Self {
        Self {
            path: path.into(),
            delimiter,
        }
    }

    pub fn csv(path: impl Into<PathBuf>) -> Self {
        Self::new(path, Delimiter::Comma)
    }

    pub fn tsv(path: impl Into<PathBuf>) -> Self {
        Self::new(path, Delimiter::Tab)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for DelimitedFileSink {
    fn accept(&self, reports: &[MatchReport]) -> MatchResult<()> {
        let rows = flatten_rows(reports);
        let table = render_delimited(&rows, self.delimiter);
        std::fs::write(&self.path, table).map_err(|e| MatchError::ReportSink {
            reason: format!("failed to write '{}': {}", self.path.display(), e),
        })?;
        info!(path = %self.path.display(), rows = rows.len(), "wrote match table");
        Ok(())
    }
}
