//! Confirmation gate: show the plan and ask before contacting any host.

use anyhow::Result;

use crate::application::ports::{ConfirmationInput, ProgressReporter};
use crate::domain::{CONTINUE_PROMPT, describe_plan, is_affirmative};

/// Outcome of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Abort,
}

/// Present the plan and read the operator's decision.
///
/// The plan is always shown. With `assume_yes` no input is read.
///
/// # Errors
///
/// Returns an error if the input port fails.
pub fn confirm_plan(
    input: &mut impl ConfirmationInput,
    reporter: &impl ProgressReporter,
    command: &str,
    targets: &[String],
    assume_yes: bool,
) -> Result<Decision> {
    reporter.info(&describe_plan(command, targets));
    if assume_yes {
        return Ok(Decision::Proceed);
    }

    let answer = input.read_line(CONTINUE_PROMPT)?;
    if is_affirmative(&answer) {
        Ok(Decision::Proceed)
    } else {
        tracing::debug!(answer = answer.trim_end(), "operator declined");
        Ok(Decision::Abort)
    }
}
