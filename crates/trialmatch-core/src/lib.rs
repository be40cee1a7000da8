//! # trialmatch-core
//!
//! The matching pipeline for trialmatch.
//!
//! This crate provides:
//! - The four collaborator traits (`ConditionMatcher`, `EligibilityEvaluator`,
//!   `DataProvider`, `ReportSink`)
//! - The `Matcher` that runs an evaluator over every patient x trial pair
//!
//! ## Usage
//!
//! ```rust,ignore
//! use trialmatch_core::{Matcher, traits::{DataProvider, ReportSink}};
//!
//! let matcher = Matcher::new(Box::new(evaluator));
//! let (reports, summary) = matcher.run(&provider, &sink)?;
//! ```

pub mod matcher;
pub mod traits;

pub use matcher::Matcher;
