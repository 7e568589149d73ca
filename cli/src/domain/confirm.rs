//! Confirmation decision rule and plan summary.

/// Prompt shown after the plan summary.
pub const CONTINUE_PROMPT: &str = "Continue? [yes/no] ";

/// `true` iff the answer line starts with `y` or `Y`.
///
/// Anything else, including an empty line or end of input, declines.
#[must_use]
pub fn is_affirmative(line: &str) -> bool {
    matches!(line.chars().next(), Some('y' | 'Y'))
}

/// One-line summary of what is about to run.
#[must_use]
pub fn describe_plan(command: &str, targets: &[String]) -> String {
    format!(
        "Running command \"{command}\" on {} hosts: [{}]",
        targets.len(),
        targets.join(" ")
    )
}
