//! Execution engine: dispatches the command to every target.
//!
//! Sequential mode awaits each target in list order. Parallel mode spawns one
//! task per target on a `JoinSet`, optionally throttled by a semaphore, and
//! renders each result as its task finishes. Either way every target runs to
//! completion: a failing host is recorded and the run carries on.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::application::ports::{OutputSink, RemoteShell};
use crate::application::services::collect::OutputCollector;
use crate::domain::{ExecutionMode, ExecutionResult, RemoteError, RunSummary};

/// What to run and how.
#[derive(Debug, Clone, Copy)]
pub struct DispatchOptions<'a> {
    pub command: &'a str,
    pub username: &'a str,
    pub mode: ExecutionMode,
    /// Upper bound on in-flight targets in parallel mode. `None` = one task
    /// per target with no ceiling.
    pub max_parallel: Option<NonZeroUsize>,
}

/// Run the command on every target and render results through `collector`.
///
/// Returns once every target has finished.
///
/// # Errors
///
/// Returns the first output sink error, after all targets have completed.
/// Remote failures are never returned as errors.
pub async fn execute<R, S>(
    shell: &Arc<R>,
    collector: &OutputCollector<'_, S>,
    targets: &[String],
    opts: &DispatchOptions<'_>,
) -> Result<RunSummary>
where
    R: RemoteShell + Send + Sync + 'static,
    S: OutputSink,
{
    match opts.mode {
        ExecutionMode::Sequential => run_sequential(&**shell, collector, targets, opts).await,
        ExecutionMode::Parallel => run_parallel(shell, collector, targets, opts).await,
    }
}

async fn run_sequential<R, S>(
    shell: &R,
    collector: &OutputCollector<'_, S>,
    targets: &[String],
    opts: &DispatchOptions<'_>,
) -> Result<RunSummary>
where
    R: RemoteShell + Sync,
    S: OutputSink,
{
    let mut summary = RunSummary::default();
    let mut sink_error = None;
    for target in targets {
        let result = run_target(shell, opts.username, target, opts.command).await;
        summary.record(&result);
        if sink_error.is_none() {
            if let Err(err) = collector.collect(&result) {
                sink_error = Some(err);
            }
        }
    }

    match sink_error {
        Some(err) => Err(err),
        None => Ok(summary),
    }
}

async fn run_parallel<R, S>(
    shell: &Arc<R>,
    collector: &OutputCollector<'_, S>,
    targets: &[String],
    opts: &DispatchOptions<'_>,
) -> Result<RunSummary>
where
    R: RemoteShell + Send + Sync + 'static,
    S: OutputSink,
{
    let limiter = opts.max_parallel.map(|n| Arc::new(Semaphore::new(n.get())));
    let mut tasks = JoinSet::new();
    let mut in_flight = HashMap::with_capacity(targets.len());

    for target in targets {
        let shell = Arc::clone(shell);
        let limiter = limiter.clone();
        let username = opts.username.to_owned();
        let command = opts.command.to_owned();
        let host = target.clone();

        let handle = tasks.spawn(async move {
            let _permit = match limiter {
                Some(sem) => sem.acquire_owned().await.ok(),
                None => None,
            };
            run_target(&*shell, &username, &host, &command).await
        });
        in_flight.insert(handle.id(), target.clone());
    }
    tracing::debug!(tasks = in_flight.len(), "parallel dispatch started");

    let mut summary = RunSummary::default();
    let mut sink_error = None;
    while let Some(joined) = tasks.join_next_with_id().await {
        let result = match joined {
            Ok((id, result)) => {
                in_flight.remove(&id);
                result
            }
            Err(err) => {
                let target = in_flight.remove(&err.id()).unwrap_or_default();
                tracing::debug!(host = %target, error = %err, "task did not complete");
                ExecutionResult {
                    target,
                    output: Vec::new(),
                    error: Some(RemoteError::Transport(format!("task failed: {err}"))),
                }
            }
        };
        summary.record(&result);
        if sink_error.is_none() {
            if let Err(err) = collector.collect(&result) {
                sink_error = Some(err);
            }
        }
    }

    match sink_error {
        Some(err) => Err(err),
        None => Ok(summary),
    }
}

/// Invoke the transport for one target and classify the outcome.
async fn run_target<R>(shell: &R, username: &str, target: &str, command: &str) -> ExecutionResult
where
    R: RemoteShell + ?Sized,
{
    let destination = format!("{username}@{target}");
    tracing::debug!(%destination, "dispatching");

    let (output, error) = match shell.invoke(&destination, command).await {
        Ok(capture) if capture.status.success() => (capture.combined, None),
        Ok(capture) => (
            capture.combined,
            Some(RemoteError::NonZeroExit {
                code: capture.status.code(),
            }),
        ),
        Err(err) => (Vec::new(), Some(RemoteError::Transport(format!("{err:#}")))),
    };

    match &error {
        Some(err) => tracing::warn!(host = target, error = %err, "target failed"),
        None => tracing::debug!(host = target, bytes = output.len(), "target finished"),
    }

    ExecutionResult {
        target: target.to_owned(),
        output,
        error,
    }
}
