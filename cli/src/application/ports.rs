//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::cli`, or `crate::output`.

use std::future::Future;
use std::process::ExitStatus;

use anyhow::Result;

use crate::domain::GroupSet;

// ── Group Source Port ─────────────────────────────────────────────────────────

/// Supplies the groups defined for this run.
pub trait GroupSource {
    /// Load every group, in definition order.
    ///
    /// # Errors
    ///
    /// Implementations return `SaError::ConfigLoad` when the definitions
    /// cannot be read or parsed.
    fn load(&self) -> Result<GroupSet>;
}

// ── Confirmation Port ─────────────────────────────────────────────────────────

/// Source of the operator's answer at the confirmation gate.
pub trait ConfirmationInput {
    /// Show `prompt` and block for exactly one line of input.
    ///
    /// End of input is returned as an empty string.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input cannot be read.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

// ── Remote Shell Port ─────────────────────────────────────────────────────────

/// What came back from one remote invocation.
#[derive(Debug, Clone)]
pub struct RemoteCapture {
    /// Exit status of the transport process.
    pub status: ExitStatus,
    /// Standard output and standard error as one interleaved stream.
    pub combined: Vec<u8>,
}

/// Runs a command on one remote destination through an opaque transport.
///
/// The returned future is `Send` so the engine can spawn one task per target.
pub trait RemoteShell {
    /// Run `command` on `destination` (`user@host`) and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error only when the transport itself cannot be started or
    /// waited on. A command that runs and exits non-zero is `Ok`.
    fn invoke(
        &self,
        destination: &str,
        command: &str,
    ) -> impl Future<Output = Result<RemoteCapture>> + Send;
}

// ── Output Port ───────────────────────────────────────────────────────────────

/// Destination for rendered per-target output.
pub trait OutputSink {
    /// Write one target's rendered block in a single operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying stream rejects the write.
    fn write_block(&self, block: &[u8]) -> Result<()>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Operator-facing messages outside the per-target output blocks.
/// Sync trait: no async needed.
pub trait ProgressReporter {
    /// Emit an informational line (the plan summary).
    fn info(&self, message: &str);
    /// Emit a warning.
    fn warn(&self, message: &str);
}
