use super::*;
use crate::kernel::simulator::{simulate, HELLO_TRANSCRIPT};

#[test]
fn start_enters_running_with_banner() {
    let mut execution = ExecutionState::new();
    assert_eq!(execution.status(), RunStatus::Idle);

    let run_id = execution.start().unwrap();

    assert_eq!(execution.status(), RunStatus::Running);
    assert_eq!(execution.transcript(), RUNNING_BANNER);
    assert_eq!(execution.in_flight(), Some(run_id));
}

#[test]
fn start_while_running_is_ignored() {
    let mut execution = ExecutionState::new();
    let first = execution.start().unwrap();

    assert_eq!(execution.start(), None);
    assert_eq!(execution.in_flight(), Some(first));
}

#[test]
fn finish_applies_outcome() {
    let mut execution = ExecutionState::new();
    let run_id = execution.start().unwrap();

    assert!(execution.finish(run_id, simulate("python", "print(\"Hello, World!\")", "")));

    assert_eq!(execution.status(), RunStatus::Completed);
    assert_eq!(execution.transcript(), HELLO_TRANSCRIPT);
    assert!(!execution.is_running());
}

#[test]
fn finish_error_outcome() {
    let mut execution = ExecutionState::new();
    let run_id = execution.start().unwrap();

    assert!(execution.finish(run_id, simulate("go", "", "")));
    assert_eq!(execution.status(), RunStatus::Error);
}

#[test]
fn stop_appends_note_and_suppresses_completion() {
    let mut execution = ExecutionState::new();
    let run_id = execution.start().unwrap();

    assert!(execution.stop());
    assert_eq!(execution.status(), RunStatus::Completed);
    assert_eq!(
        execution.transcript(),
        "Running code...\n\nExecution stopped by user.\n"
    );

    assert!(!execution.finish(run_id, simulate("python", "pass", "")));
    assert_eq!(
        execution.transcript(),
        "Running code...\n\nExecution stopped by user.\n"
    );
}

#[test]
fn stop_when_idle_is_noop() {
    let mut execution = ExecutionState::new();
    assert!(!execution.stop());
    assert_eq!(execution.transcript(), "");
}

#[test]
fn new_run_gets_fresh_id_after_stop() {
    let mut execution = ExecutionState::new();
    let first = execution.start().unwrap();
    execution.stop();

    let second = execution.start().unwrap();
    assert_ne!(first, second);
    assert!(!execution.finish(first, simulate("python", "pass", "")));
    assert!(execution.finish(second, simulate("python", "pass", "")));
}

#[test]
fn clear_resets_to_idle() {
    let mut execution = ExecutionState::new();
    let run_id = execution.start().unwrap();
    execution.finish(run_id, simulate("python", "pass", ""));

    assert!(execution.clear());
    assert_eq!(execution.status(), RunStatus::Idle);
    assert_eq!(execution.transcript(), "");
    assert!(!execution.clear());
}

#[test]
fn clear_abandons_in_flight_run() {
    let mut execution = ExecutionState::new();
    let run_id = execution.start().unwrap();

    assert!(execution.clear());
    assert!(!execution.finish(run_id, simulate("python", "pass", "")));
    assert_eq!(execution.status(), RunStatus::Idle);
}
