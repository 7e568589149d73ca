//! Application service: the full run use-case.
//!
//! Load groups, resolve identifiers, pass the confirmation gate, then hand
//! the targets to the execution engine. Every failure before execution is a
//! typed `SaError`; nothing is contacted unless all of those steps succeed.

use std::num::NonZeroUsize;
use std::sync::Arc;

use anyhow::Result;

use crate::application::ports::{
    ConfirmationInput, GroupSource, OutputSink, ProgressReporter, RemoteShell,
};
use crate::application::services::collect::OutputCollector;
use crate::application::services::confirm::{Decision, confirm_plan};
use crate::application::services::engine::{DispatchOptions, execute};
use crate::domain::{ExecutionMode, RunSummary, SaError, resolve_targets};

pub struct RunOptions<'a, R: ProgressReporter> {
    pub reporter: &'a R,
    pub command: &'a str,
    pub username: &'a str,
    pub identifiers: &'a [String],
    pub mode: ExecutionMode,
    pub prefix: bool,
    pub assume_yes: bool,
    pub max_parallel: Option<NonZeroUsize>,
}

/// Run the command against everything the identifiers resolve to.
///
/// # Errors
///
/// Returns `SaError::ConfigLoad`, `SaError::AmbiguousIdentifier`,
/// `SaError::UnknownIdentifier` or `SaError::Aborted` (wrapped in
/// `anyhow::Error`) before any host is contacted, or an output error while
/// rendering. Per-host failures are reported in the returned summary.
pub async fn run_command<Sh>(
    groups: &impl GroupSource,
    input: &mut impl ConfirmationInput,
    shell: &Arc<Sh>,
    sink: &impl OutputSink,
    opts: RunOptions<'_, impl ProgressReporter>,
) -> Result<RunSummary>
where
    Sh: RemoteShell + Send + Sync + 'static,
{
    let RunOptions {
        reporter,
        command,
        username,
        identifiers,
        mode,
        prefix,
        assume_yes,
        max_parallel,
    } = opts;
    tracing::debug!(?identifiers, "remaining args");

    let groups = groups.load()?;
    tracing::debug!(groups = groups.len(), "groups loaded");

    let resolution = resolve_targets(&groups, identifiers)?;
    for (identifier, class) in &resolution.classified {
        tracing::debug!(%identifier, %class, "resolved");
    }
    let targets = resolution.targets;

    if confirm_plan(input, reporter, command, &targets, assume_yes)? == Decision::Abort {
        return Err(SaError::Aborted.into());
    }

    if mode == ExecutionMode::Sequential && max_parallel.is_some() {
        reporter.warn("concurrency limit has no effect in sequential mode");
    }

    let collector = OutputCollector::new(sink, prefix);
    let dispatch = DispatchOptions {
        command,
        username,
        mode,
        max_parallel,
    };
    let summary = execute(shell, &collector, &targets, &dispatch).await?;
    tracing::info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "run complete"
    );
    Ok(summary)
}
