//! `TerminalReporter`: Presentation-layer implementation of `ProgressReporter`.
//!
//! Wraps `&OutputContext` and implements the `application::ports::ProgressReporter`
//! trait so application services can emit messages without depending on
//! any presentation type directly.

use crate::application::ports::ProgressReporter;
use crate::output::OutputContext;

/// Terminal reporter that wraps an `OutputContext`.
///
/// - `info()` prints the message as-is on stdout
/// - `warn()` prints `"[warn] {message}"` on stderr
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn info(&self, message: &str) {
        self.ctx.info(message);
    }

    fn warn(&self, message: &str) {
        self.ctx.warn(message);
    }
}
