//! Unit tests for the execution engine and output collector.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::num::NonZeroUsize;
use std::sync::Arc;

use sa_cli::application::ports::OutputSink;
use sa_cli::application::services::collect::OutputCollector;
use sa_cli::application::services::engine::{DispatchOptions, execute};
use sa_cli::domain::ExecutionMode::{self, Parallel, Sequential};
use sa_cli::domain::RunSummary;

use crate::mocks::{BrokenSink, CapturingSink, Event, Reply, ScriptedShell};

fn hosts(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

fn opts(mode: ExecutionMode) -> DispatchOptions<'static> {
    DispatchOptions {
        command: "uptime",
        username: "ops",
        mode,
        max_parallel: None,
    }
}

async fn dispatch<S: OutputSink>(
    shell: &Arc<ScriptedShell>,
    collector: &OutputCollector<'_, S>,
    targets: &[&str],
    mode: ExecutionMode,
) -> anyhow::Result<RunSummary> {
    execute(shell, collector, &hosts(targets), &opts(mode)).await
}

// ── Sequential ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn sequential_runs_each_target_to_completion_in_order() {
    let shell = Arc::new(ScriptedShell::new().delay("h1", 30));
    let sink = CapturingSink::default();
    let collector = OutputCollector::new(&sink, false);

    let summary = dispatch(&shell, &collector, &["h1", "h2", "h3"], Sequential)
        .await
        .expect("execute");

    assert_eq!((summary.succeeded, summary.failed), (3, 0));
    assert_eq!(
        shell.events(),
        [
            Event::Start("h1".into()),
            Event::Finish("h1".into()),
            Event::Start("h2".into()),
            Event::Finish("h2".into()),
            Event::Start("h3".into()),
            Event::Finish("h3".into()),
        ]
    );
    assert_eq!(
        sink.blocks(),
        ["ops@h1: uptime\n", "ops@h2: uptime\n", "ops@h3: uptime\n"]
    );
}

#[tokio::test]
async fn sequential_failure_does_not_stop_later_targets() {
    let shell = ScriptedShell::new()
        .reply("h2", Reply::fail(255, "Connection refused\n"))
        .into_shared();
    let sink = CapturingSink::default();
    let collector = OutputCollector::new(&sink, false);

    let summary = dispatch(&shell, &collector, &["h1", "h2", "h3"], Sequential)
        .await
        .expect("execute");

    assert_eq!((summary.succeeded, summary.failed), (2, 1));
    assert_eq!(shell.destinations(), ["ops@h1", "ops@h2", "ops@h3"]);
    assert_eq!(
        sink.blocks()[1],
        "[warn] h2: exit status 255\nConnection refused\n"
    );
}

#[tokio::test]
async fn sequential_sink_error_surfaces_after_all_targets_ran() {
    let shell = Arc::new(ScriptedShell::new());
    let collector = OutputCollector::new(&BrokenSink, false);

    let err = dispatch(&shell, &collector, &["h1", "h2", "h3"], Sequential)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("broken pipe"));
    assert_eq!(shell.destinations(), ["ops@h1", "ops@h2", "ops@h3"]);
}

// ── Parallel ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn parallel_starts_every_target_before_any_finishes() {
    let shell = ScriptedShell::new()
        .delay("h1", 50)
        .delay("h2", 50)
        .delay("h3", 50)
        .into_shared();
    let sink = CapturingSink::default();
    let collector = OutputCollector::new(&sink, false);

    let summary = dispatch(&shell, &collector, &["h1", "h2", "h3"], Parallel)
        .await
        .expect("execute");

    assert_eq!(summary.total(), 3);
    assert_eq!(shell.peak(), 3);
    let events = shell.events();
    let first_finish = events
        .iter()
        .position(|e| matches!(e, Event::Finish(_)))
        .unwrap();
    assert_eq!(first_finish, 3, "starts precede finishes: {events:?}");
}

#[tokio::test]
async fn parallel_emits_each_target_as_one_block_in_completion_order() {
    let shell = ScriptedShell::new()
        .delay("slow", 80)
        .reply("slow", Reply::ok("s1\ns2\n"))
        .reply("fast", Reply::ok("f1\nf2"))
        .into_shared();
    let sink = CapturingSink::default();
    let collector = OutputCollector::new(&sink, true);

    dispatch(&shell, &collector, &["slow", "fast"], Parallel)
        .await
        .expect("execute");

    assert_eq!(
        sink.blocks(),
        ["[fast] f1\n[fast] f2\n", "[slow] s1\n[slow] s2\n"]
    );
}

#[tokio::test]
async fn parallel_failure_does_not_prevent_siblings() {
    let shell = ScriptedShell::new()
        .reply("h1", Reply::Unreachable)
        .reply("h2", Reply::fail(1, "nope\n"))
        .delay("h3", 20)
        .into_shared();
    let sink = CapturingSink::default();
    let collector = OutputCollector::new(&sink, false);

    let summary = dispatch(&shell, &collector, &["h1", "h2", "h3"], Parallel)
        .await
        .expect("remote failures are not errors");

    assert_eq!((summary.succeeded, summary.failed), (1, 2));
    let text = sink.text();
    assert!(
        text.contains("[warn] h1: transport failed: failed to spawn ssh\n"),
        "got: {text}"
    );
    assert!(
        text.contains("[warn] h2: exit status 1\nnope\n"),
        "got: {text}"
    );
    assert!(text.contains("ops@h3: uptime\n"), "got: {text}");
}

#[tokio::test]
async fn parallel_panicking_task_is_reported_for_its_target() {
    let shell = Arc::new(ScriptedShell::new().reply("h2", Reply::Panic));
    let sink = CapturingSink::default();
    let collector = OutputCollector::new(&sink, false);

    let summary = dispatch(&shell, &collector, &["h1", "h2"], Parallel)
        .await
        .expect("execute");

    assert_eq!((summary.succeeded, summary.failed), (1, 1));
    let text = sink.text();
    assert!(
        text.contains("[warn] h2: transport failed: task failed"),
        "got: {text}"
    );
}

#[tokio::test]
async fn parallel_respects_concurrency_ceiling() {
    let shell = ScriptedShell::new()
        .delay("a", 20)
        .delay("b", 20)
        .delay("c", 20)
        .delay("d", 20)
        .into_shared();
    let sink = CapturingSink::default();
    let collector = OutputCollector::new(&sink, false);
    let limited = DispatchOptions {
        max_parallel: NonZeroUsize::new(2),
        ..opts(Parallel)
    };

    let summary = execute(&shell, &collector, &hosts(&["a", "b", "c", "d"]), &limited)
        .await
        .expect("execute");

    assert_eq!(summary.succeeded, 4);
    assert_eq!(shell.peak(), 2);
}

#[tokio::test]
async fn parallel_with_no_targets_returns_empty_summary() {
    let shell = Arc::new(ScriptedShell::new());
    let sink = CapturingSink::default();
    let collector = OutputCollector::new(&sink, false);

    let summary = dispatch(&shell, &collector, &[], Parallel)
        .await
        .expect("execute");

    assert_eq!(summary, RunSummary::default());
    assert!(sink.blocks().is_empty());
}

#[tokio::test]
async fn parallel_sink_error_surfaces_after_all_targets_ran() {
    let shell = Arc::new(ScriptedShell::new().delay("h2", 20));
    let collector = OutputCollector::new(&BrokenSink, false);

    let err = dispatch(&shell, &collector, &["h1", "h2"], Parallel)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("broken pipe"));
    assert_eq!(shell.destinations().len(), 2);
    assert_eq!(shell.events().len(), 4);
}

// ── Collector ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn raw_output_is_passed_through_verbatim() {
    let shell = Arc::new(ScriptedShell::new().reply("h1", Reply::ok("a\nb")));
    let sink = CapturingSink::default();
    let collector = OutputCollector::new(&sink, false);

    dispatch(&shell, &collector, &["h1"], Sequential)
        .await
        .expect("execute");

    assert_eq!(sink.text(), "a\nb");
}

#[tokio::test]
async fn prefixed_output_tags_every_line() {
    let shell = Arc::new(ScriptedShell::new().reply("h1", Reply::ok("a\nb")));
    let sink = CapturingSink::default();
    let collector = OutputCollector::new(&sink, true);

    dispatch(&shell, &collector, &["h1"], Sequential)
        .await
        .expect("execute");

    assert_eq!(sink.text(), "[h1] a\n[h1] b\n");
}

#[tokio::test]
async fn silent_successful_target_writes_nothing() {
    let shell = Arc::new(ScriptedShell::new().reply("h1", Reply::ok("")));
    let sink = CapturingSink::default();
    let collector = OutputCollector::new(&sink, true);

    dispatch(&shell, &collector, &["h1"], Parallel)
        .await
        .expect("execute");

    assert!(sink.blocks().is_empty());
}
