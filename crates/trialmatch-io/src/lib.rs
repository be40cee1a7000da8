//! # trialmatch-io
//!
//! Data providers and report sinks for trialmatch.
//!
//! Providers:
//! - [`FixtureProvider`] — the embedded sample data (8 trials, 10 patients)
//! - [`JsonFileProvider`] — a `{ "trials": [...], "patients": [...] }` document
//! - [`DataSet`] — records already in memory
//!
//! Sinks:
//! - [`JsonFileSink`] — the report array as indented JSON
//! - [`DelimitedFileSink`] — one CSV/TSV row per match, spreadsheet-ready
//! - [`MemorySink`] and [`FanOutSink`] — in-process collection and fan-out
//!
//! All sample data is fictional.

pub mod fixtures;
pub mod json;
pub mod memory;
pub mod table;

pub use fixtures::{sample_dataset, sample_patients, sample_trials, FixtureProvider};
pub use json::{reports_to_json, DataSet, JsonFileProvider, JsonFileSink, DEFAULT_REPORT_FILE};
pub use memory::{FanOutSink, MemorySink};
pub use table::{flatten_rows, render_delimited, DelimitedFileSink, Delimiter, TableRow, HEADER};

// ── Tests ─────────────────────────────────────────────────────────────────────
