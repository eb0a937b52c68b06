use super::*;
use crate::kernel::execution::{RUNNING_BANNER, STOPPED_NOTE};
use crate::kernel::simulator::{simulate_language, RunStatus};
use crate::kernel::{LanguageId, NotificationKind};

fn new_store() -> Store {
    Store::with_workspace(WorkspaceController::with_samples())
}

fn empty_store() -> Store {
    Store::with_workspace(WorkspaceController::new())
}

fn notifications(result: &DispatchResult) -> Vec<NotificationKind> {
    result
        .effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Notify(n) => Some(n.kind),
            _ => None,
        })
        .collect()
}

fn run_request(result: &DispatchResult) -> Option<&RunRequest> {
    result.effects.iter().find_map(|effect| match effect {
        Effect::StartRun(req) => Some(req),
        _ => None,
    })
}

#[test]
fn save_notifies_for_active_file() {
    let mut store = new_store();
    let active = store.state.workspace.active_id().unwrap();

    let result = store.dispatch(Action::RunCommand(Command::SaveFile));

    assert!(matches!(
        result.effects.as_slice(),
        [Effect::Notify(Notification { kind: NotificationKind::Saved, file: Some(id), .. })] if *id == active
    ));
    assert!(!result.state_changed);
}

#[test]
fn save_without_active_file_is_noop() {
    let mut store = empty_store();

    let result = store.dispatch(Action::RunCommand(Command::SaveFile));

    assert!(result.effects.is_empty());
    assert!(!result.state_changed);
}

#[test]
fn duplicate_command_copies_active_file() {
    let mut store = new_store();
    let active = store.state.workspace.active_id().unwrap();

    let result = store.dispatch(Action::RunCommand(Command::DuplicateFile));

    assert_eq!(notifications(&result), vec![NotificationKind::Duplicated]);
    assert_eq!(store.state.workspace.len(), 4);
    assert_eq!(store.state.workspace.active_id(), Some(active));
    let copy = store.state.workspace.files().last().unwrap();
    assert_eq!(copy.name(), "main_copy.py");
}

#[test]
fn duplicate_command_without_active_file_is_noop() {
    let mut store = empty_store();

    let result = store.dispatch(Action::RunCommand(Command::DuplicateFile));

    assert!(result.effects.is_empty());
    assert!(store.state.workspace.is_empty());
}

#[test]
fn new_file_command_creates_untitled_and_activates() {
    let mut store = empty_store();

    let result = store.dispatch(Action::RunCommand(Command::NewFile(LanguageId::Java)));

    assert_eq!(notifications(&result), vec![NotificationKind::Created]);
    let active = store.state.workspace.active().unwrap();
    assert_eq!(active.name(), "untitled.java");
    assert_eq!(active.language(), LanguageId::Java);
}

#[test]
fn create_file_action_notifies_with_name() {
    let mut store = empty_store();

    let result = store.dispatch(Action::CreateFile {
        name: "solver.cpp".to_string(),
        language: LanguageId::Cpp,
    });

    match result.effects.as_slice() {
        [Effect::Notify(n)] => {
            assert_eq!(n.kind, NotificationKind::Created);
            assert_eq!(n.description, "Created solver.cpp");
        }
        other => panic!("unexpected effects: {other:?}"),
    }
}

#[test]
fn declined_operations_leave_state_untouched() {
    let mut store = new_store();
    let id = store.state.workspace.ids()[0];
    store.dispatch(Action::DeleteFile(id));
    let len = store.state.workspace.len();

    for action in [
        Action::DeleteFile(id),
        Action::DuplicateFile(id),
        Action::SelectFile(id),
        Action::RenameFile {
            id,
            name: "x.py".to_string(),
        },
        Action::UpdateContent {
            id,
            content: "x".to_string(),
        },
    ] {
        let result = store.dispatch(action);
        assert!(result.effects.is_empty());
        assert!(!result.state_changed);
    }
    assert_eq!(store.state.workspace.len(), len);
}

#[test]
fn delete_active_reassigns_pointer() {
    let mut store = new_store();
    let ids = store.state.workspace.ids().to_vec();

    let result = store.dispatch(Action::DeleteFile(ids[0]));

    assert_eq!(notifications(&result), vec![NotificationKind::Deleted]);
    assert_eq!(store.state.workspace.active_id(), Some(ids[1]));
}

#[test]
fn update_content_same_value_is_not_a_change() {
    let mut store = new_store();
    let id = store.state.workspace.active_id().unwrap();
    let content = "print(2)".to_string();

    let first = store.dispatch(Action::UpdateContent {
        id,
        content: content.clone(),
    });
    let second = store.dispatch(Action::UpdateContent { id, content });

    assert!(first.state_changed);
    assert!(!second.state_changed);
    assert!(second.effects.is_empty());
}

#[test]
fn rename_notifies() {
    let mut store = new_store();
    let id = store.state.workspace.active_id().unwrap();

    let result = store.dispatch(Action::RenameFile {
        id,
        name: "app.py".to_string(),
    });

    assert_eq!(notifications(&result), vec![NotificationKind::Renamed]);
    assert_eq!(store.state.workspace.get(id).unwrap().name(), "app.py");
}

#[test]
fn toggle_shortcuts_does_not_touch_workspace() {
    let mut store = new_store();
    let len = store.state.workspace.len();

    store.dispatch(Action::RunCommand(Command::ToggleShortcuts));
    assert!(store.state.ui.shortcuts_visible);

    store.dispatch(Action::RunCommand(Command::ToggleShortcuts));
    assert!(!store.state.ui.shortcuts_visible);

    store.dispatch(Action::RunCommand(Command::ToggleShortcuts));
    let result = store.dispatch(Action::RunCommand(Command::CloseShortcuts));
    assert!(result.state_changed);
    assert!(!store.state.ui.shortcuts_visible);
    assert_eq!(store.state.workspace.len(), len);
}

#[test]
fn run_snapshots_active_file_and_stdin() {
    let mut store = new_store();
    store.dispatch(Action::SetStdin("abc".to_string()));
    let active = store.state.workspace.active().unwrap();
    let expected_source = active.content().unwrap().to_string();

    let result = store.dispatch(Action::RunCommand(Command::RunCode));

    let req = run_request(&result).unwrap().clone();
    assert_eq!(req.language, LanguageId::Python);
    assert_eq!(req.source, expected_source);
    assert_eq!(req.stdin, "abc");
    assert_eq!(notifications(&result), vec![NotificationKind::RunStarted]);
    assert_eq!(store.state.execution.status(), RunStatus::Running);
    assert_eq!(store.state.execution.transcript(), RUNNING_BANNER);

    let id = store.state.workspace.active_id().unwrap();
    store.dispatch(Action::UpdateContent {
        id,
        content: "edited".to_string(),
    });
    assert_eq!(req.source, expected_source);
}

#[test]
fn run_without_active_file_is_noop() {
    let mut store = empty_store();

    let result = store.dispatch(Action::RunCommand(Command::RunCode));

    assert!(result.effects.is_empty());
    assert_eq!(store.state.execution.status(), RunStatus::Idle);
}

#[test]
fn run_while_running_is_ignored() {
    let mut store = new_store();
    store.dispatch(Action::RunCommand(Command::RunCode));
    assert!(store.command_in_flight(Command::RunCode));

    let result = store.dispatch(Action::RunCommand(Command::RunCode));

    assert!(result.effects.is_empty());
    assert!(!result.state_changed);
}

#[test]
fn run_finished_applies_outcome() {
    let mut store = new_store();
    let result = store.dispatch(Action::RunCommand(Command::RunCode));
    let req = run_request(&result).unwrap().clone();

    let outcome = simulate_language(req.language, &req.source, &req.stdin);
    let result = store.dispatch(Action::RunFinished {
        run_id: req.run_id,
        outcome,
    });

    assert!(result.state_changed);
    assert_eq!(store.state.execution.status(), RunStatus::Completed);
    assert_eq!(store.state.execution.transcript(), "Hello, World!\n");
    assert!(!store.command_in_flight(Command::RunCode));
}

#[test]
fn stop_suppresses_late_completion() {
    let mut store = new_store();
    let result = store.dispatch(Action::RunCommand(Command::RunCode));
    let req = run_request(&result).unwrap().clone();

    store.dispatch(Action::RunCommand(Command::StopRun));
    let late = store.dispatch(Action::RunFinished {
        run_id: req.run_id,
        outcome: simulate_language(req.language, &req.source, &req.stdin),
    });

    assert!(!late.state_changed);
    assert_eq!(store.state.execution.status(), RunStatus::Completed);
    assert_eq!(
        store.state.execution.transcript(),
        format!("{RUNNING_BANNER}{STOPPED_NOTE}")
    );
}

#[test]
fn clear_output_resets_execution() {
    let mut store = new_store();
    store.dispatch(Action::RunCommand(Command::RunCode));

    let result = store.dispatch(Action::RunCommand(Command::ClearOutput));

    assert!(result.state_changed);
    assert_eq!(store.state.execution.status(), RunStatus::Idle);
    assert_eq!(store.state.execution.transcript(), "");
}

#[test]
fn autosave_tick_notifies_only_with_active_file() {
    let mut store = new_store();
    let result = store.dispatch(Action::AutosaveTick);
    assert_eq!(notifications(&result), vec![NotificationKind::AutoSaved]);

    let mut store = empty_store();
    let result = store.dispatch(Action::AutosaveTick);
    assert!(result.effects.is_empty());
}

#[test]
fn set_stdin_reports_change_once() {
    let mut store = new_store();

    assert!(store.dispatch(Action::SetStdin("42".to_string())).state_changed);
    assert!(!store.dispatch(Action::SetStdin("42".to_string())).state_changed);
    assert_eq!(store.state.stdin, "42");
}

#[test]
fn run_with_folder_active_is_noop() {
    let mut store = new_store();
    let folder = store.workspace_mut().insert_folder("src");
    store.dispatch(Action::SelectFile(folder));
    assert_eq!(store.state.workspace.active_id(), Some(folder));

    let result = store.dispatch(Action::RunCommand(Command::RunCode));

    assert!(result.effects.is_empty());
    assert!(!result.state_changed);
    assert!(!store.state.execution.is_running());
    assert_eq!(store.state.execution.status(), RunStatus::Idle);
}

#[test]
fn folder_content_edit_is_declined() {
    let mut store = new_store();
    let folder = store.workspace_mut().insert_folder("src");
    let len = store.state.workspace.len();

    for action in [
        Action::UpdateContent {
            id: folder,
            content: "x".to_string(),
        },
        Action::DuplicateFile(folder),
    ] {
        let result = store.dispatch(action);
        assert!(result.effects.is_empty());
        assert!(!result.state_changed);
    }
    assert_eq!(store.state.workspace.len(), len);
}
