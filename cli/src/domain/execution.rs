//! Execution mode and per-target results.

use crate::domain::error::RemoteError;

/// How targets are dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// One concurrent task per target.
    #[default]
    Parallel,
    /// Strictly one target at a time, in list order.
    Sequential,
}

/// Captured outcome of running the command on one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub target: String,
    /// Combined stdout/stderr bytes exactly as captured.
    pub output: Vec<u8>,
    pub error: Option<RemoteError>,
}

impl ExecutionResult {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Tally of a completed run. Informational only: it never changes the exit code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, result: &ExecutionResult) {
        if result.succeeded() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}
