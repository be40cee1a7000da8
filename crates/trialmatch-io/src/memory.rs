//! In-process sinks.
//!
//! `MemorySink` keeps every accepted batch behind a `Mutex` so a caller can
//! hold an `Arc` to it while a `Matcher` writes through a shared reference.
//! `FanOutSink` delivers one batch to several sinks.

use std::sync::{Mutex, PoisonError};

use tracing::debug;

use trialmatch_contracts::{MatchError, MatchReport, MatchResult};
use trialmatch_core::traits::ReportSink;

/// A `ReportSink` that retains batches in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    batches: Mutex<Vec<Vec<MatchReport>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every batch accepted so far.
    pub fn batches(&self) -> Vec<Vec<MatchReport>> {
        self.batches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent batch, if any.
    pub fn latest(&self) -> Option<Vec<MatchReport>> {
        self.batches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl ReportSink for MemorySink {
    fn accept(&self, reports: &[MatchReport]) -> MatchResult<()> {
        let mut batches = self.batches.lock().map_err(|e| MatchError::ReportSink {
            reason: format!("memory sink lock poisoned: {}", e),
        })?;
        batches.push(reports.to_vec());
        Ok(())
    }
}

/// A `ReportSink` that forwards each batch to every inner sink in order.
///
/// Delivery stops at the first failing sink; sinks after it never see the
/// batch.
#[derive(Default)]
pub struct FanOutSink {
    sinks: Vec<Box<dyn ReportSink>>,
}

impl FanOutSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: Box<dyn ReportSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn push(&mut self, sink: Box<dyn ReportSink>) {
        self.sinks.push(sink);
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl ReportSink for FanOutSink {
    fn accept(&self, reports: &[MatchReport]) -> MatchResult<()> {
        for (idx, sink) in self.sinks.iter().enumerate() {
            debug!(sink = idx, reports = reports.len(), "forwarding reports");
            sink.accept(reports)?;
        }
        Ok(())
    }
}
