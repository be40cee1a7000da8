//! # trialmatch-contracts
//!
//! Shared record types, report shapes, and errors for trialmatch.
//!
//! All crates in the workspace import from here. No matching logic lives in
//! this crate — only data definitions and error types.

pub mod eligibility;
pub mod error;
pub mod record;
pub mod report;

pub use eligibility::{AgeRange, EligibilityResult, Ineligibility};
pub use error::{MatchError, MatchResult};
pub use record::{Patient, Trial};
pub use report::{MatchReport, RunSummary, TrialMatch};
