//! JSON input and output.
//!
//! Input documents hold both record lists:
//!
//! ```json
//! { "trials": [ { "nctId": "NCT001", ... } ], "patients": [ { "id": "patient1", ... } ] }
//! ```
//!
//! Output is the bare report array, indented with four spaces.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use trialmatch_contracts::{MatchError, MatchReport, MatchResult, Patient, Trial};
use trialmatch_core::traits::{DataProvider, ReportSink};

/// The file name reports are written to when none is given.
pub const DEFAULT_REPORT_FILE: &str = "eligible_patients.json";

/// A fully materialized set of input records.
///
/// Either list may be omitted from the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSet {
    #[serde(default)]
    pub trials: Vec<Trial>,
    #[serde(default)]
    pub patients: Vec<Patient>,
}

impl DataSet {
    pub fn from_json_str(s: &str) -> MatchResult<Self> {
        serde_json::from_str(s).map_err(|e| MatchError::DataSource {
            reason: format!("failed to parse data set JSON: {}", e),
        })
    }

    pub fn from_file(path: &Path) -> MatchResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| MatchError::DataSource {
            reason: format!("failed to read data file '{}': {}", path.display(), e),
        })?;
        let data = Self::from_json_str(&contents)?;
        debug!(
            path = %path.display(),
            trials = data.trials.len(),
            patients = data.patients.len(),
            "loaded data set"
        );
        Ok(data)
    }
}

impl DataProvider for DataSet {
    fn patients(&self) -> MatchResult<Vec<Patient>> {
        Ok(self.patients.clone())
    }

    fn trials(&self) -> MatchResult<Vec<Trial>> {
        Ok(self.trials.clone())
    }
}

/// A `DataProvider` backed by a JSON data set file.
///
/// The file is read once, in `open`; every later request serves that same
/// snapshot, so patients and trials always come from one version of the file.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
    data: DataSet,
}

impl JsonFileProvider {
    /// Read and parse the data set at `path`.
    ///
    /// Returns `MatchError::DataSource` if the file cannot be read or is not
    /// a valid data set document.
    pub fn open(path: impl Into<PathBuf>) -> MatchResult<Self> {
        let path = path.into();
        let data = DataSet::from_file(&path)?;
        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> &DataSet {
        &self.data
    }
}

impl DataProvider for JsonFileProvider {
    fn patients(&self) -> MatchResult<Vec<Patient>> {
        self.data.patients()
    }

    fn trials(&self) -> MatchResult<Vec<Trial>> {
        self.data.trials()
    }
}

/// Serialize `reports` as a JSON array indented with four spaces.
pub fn reports_to_json(reports: &[MatchReport]) -> MatchResult<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    reports
        .serialize(&mut serializer)
        .map_err(|e| MatchError::ReportSink {
            reason: format!("failed to serialize reports: {}", e),
        })?;
    String::from_utf8(buf).map_err(|e| MatchError::ReportSink {
        reason: format!("serialized reports are not UTF-8: {}", e),
    })
}

/// A `ReportSink` that writes the report array to a JSON file.
///
/// Each batch replaces the file's previous contents.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileSink {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_FILE)
    }
}

impl ReportSink for JsonFileSink {
    fn accept(&self, reports: &[MatchReport]) -> MatchResult<()> {
        let json = reports_to_json(reports)?;
        std::fs::write(&self.path, json).map_err(|e| MatchError::ReportSink {
            reason: format!("failed to write '{}': {}", self.path.display(), e),
        })?;
        info!(path = %self.path.display(), reports = reports.len(), "wrote JSON report");
        Ok(())
    }
}
