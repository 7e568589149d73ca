//! Typed domain error enums.
//!
//! `SaError` covers every condition that ends a run before or instead of
//! contacting hosts. `RemoteError` describes a single host's failure and is
//! carried as data in `ExecutionResult`; it never aborts a run.

use thiserror::Error;

// ── Run errors ────────────────────────────────────────────────────────────────

/// Fatal errors surfaced by the top-level dispatcher as `[error] ...`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SaError {
    #[error("you need to specify command/username/hosts!")]
    MissingArguments,

    #[error("no hosts specified")]
    NoIdentifiers,

    #[error("Could not load {path}: {reason}")]
    ConfigLoad { path: String, reason: String },

    #[error("\"{0}\" is both group and host, exiting")]
    AmbiguousIdentifier(String),

    #[error("could not resolve \"{0}\"")]
    UnknownIdentifier(String),

    #[error("Cancelled.. exiting")]
    Aborted,
}

impl SaError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Whether this is the operator declining at the confirmation gate.
    #[must_use]
    pub fn is_abort(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

// ── Remote errors ─────────────────────────────────────────────────────────────

/// Failure of the remote invocation for one target.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    #[error("exit status {}", exit_code_label(.code))]
    NonZeroExit { code: Option<i32> },

    #[error("transport failed: {0}")]
    Transport(String),
}

#[allow(clippy::ref_option)]
fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(c) => c.to_string(),
        None => "unknown (terminated by signal)".to_string(),
    }
}
