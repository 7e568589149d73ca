//! Unit tests for the confirmation gate.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use sa_cli::application::services::confirm::{Decision, confirm_plan};

use crate::mocks::{RecordingReporter, ScriptedInput};

fn targets() -> Vec<String> {
    vec!["h1".into(), "h2".into(), "h3".into()]
}

fn decide(answer: &str) -> Decision {
    let mut input = ScriptedInput::answering(answer);
    let reporter = RecordingReporter::default();
    confirm_plan(&mut input, &reporter, "uptime", &targets(), false).expect("confirm")
}

#[test]
fn answers_starting_with_y_proceed() {
    for answer in ["Y", "yes", "y\n", "YES\n"] {
        assert_eq!(decide(answer), Decision::Proceed, "{answer:?}");
    }
}

#[test]
fn other_answers_abort() {
    for answer in ["", "\n", "n", "no", "nope\n", " yes", "ok"] {
        assert_eq!(decide(answer), Decision::Abort, "{answer:?}");
    }
}

#[test]
fn plan_is_shown_before_prompting() {
    let mut input = ScriptedInput::answering("y\n");
    let reporter = RecordingReporter::default();

    confirm_plan(&mut input, &reporter, "df -h", &targets(), false).expect("confirm");

    assert_eq!(
        *reporter.infos.lock().unwrap(),
        ["Running command \"df -h\" on 3 hosts: [h1 h2 h3]"]
    );
    assert_eq!(input.prompts, ["Continue? [yes/no] "]);
}

#[test]
fn assume_yes_skips_input_but_still_shows_plan() {
    let mut input = ScriptedInput::answering("n");
    let reporter = RecordingReporter::default();

    let decision = confirm_plan(&mut input, &reporter, "id", &targets(), true).expect("confirm");

    assert_eq!(decision, Decision::Proceed);
    assert!(input.prompts.is_empty());
    assert_eq!(reporter.infos.lock().unwrap().len(), 1);
}
