use crate::core::Command;
use crate::kernel::workspace::WorkspaceError;
use crate::models::FileId;

use super::{Action, AppState, Effect, Notification, RunRequest, WorkspaceController};

#[derive(Debug, Default)]
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn notify(notification: Notification) -> Self {
        Self {
            effects: vec![Effect::Notify(notification)],
            state_changed: true,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn with_workspace(workspace: WorkspaceController) -> Self {
        Self::new(AppState::new(workspace))
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Observer registration lives on the controller; exposed here so the
    /// store stays the only owner of the workspace.
    pub fn workspace_mut(&mut self) -> &mut WorkspaceController {
        &mut self.state.workspace
    }

    /// A command whose previous activation has not settled yet.
    pub fn command_in_flight(&self, command: Command) -> bool {
        match command {
            Command::RunCode => self.state.execution.is_running(),
            _ => false,
        }
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::CreateFile { name, language } => {
                let record = self.state.workspace.create_file(name, language);
                DispatchResult::notify(Notification::created(record.id(), record.name()))
            }
            Action::DuplicateFile(id) => self.duplicate(id),
            Action::DeleteFile(id) => match self.state.workspace.delete_file(id) {
                Ok(_) => DispatchResult::notify(Notification::deleted(id)),
                Err(e) => declined("delete", e),
            },
            Action::UpdateContent { id, content } => {
                match self.state.workspace.update_content(id, content) {
                    Ok(changed) => DispatchResult::changed(changed),
                    Err(e) => declined("update_content", e),
                }
            }
            Action::RenameFile { id, name } => {
                match self.state.workspace.rename_file(id, name.as_str()) {
                    Ok(()) => DispatchResult::notify(Notification::renamed(id, &name)),
                    Err(e) => declined("rename", e),
                }
            }
            Action::SelectFile(id) => {
                let prev = self.state.workspace.active_id();
                match self.state.workspace.select_file(id) {
                    Ok(()) => DispatchResult::changed(prev != Some(id)),
                    Err(e) => declined("select", e),
                }
            }
            Action::SetStdin(stdin) => {
                if self.state.stdin == stdin {
                    return DispatchResult::unchanged();
                }
                self.state.stdin = stdin;
                DispatchResult::changed(true)
            }
            Action::RunFinished { run_id, outcome } => {
                DispatchResult::changed(self.state.execution.finish(run_id, outcome))
            }
            Action::AutosaveTick => match self.state.workspace.active_id() {
                Some(id) => DispatchResult {
                    effects: vec![Effect::Notify(Notification::auto_saved(id))],
                    state_changed: false,
                },
                None => DispatchResult::unchanged(),
            },
        }
    }

    fn dispatch_command(&mut self, command: Command) -> DispatchResult {
        tracing::debug!(command = command.name(), "dispatch command");
        if command.targets_active_file() && self.state.workspace.active_id().is_none() {
            return DispatchResult::unchanged();
        }
        match command {
            // Content is live-bound, so saving only acknowledges.
            Command::SaveFile => match self.state.workspace.active_id() {
                Some(id) => DispatchResult {
                    effects: vec![Effect::Notify(Notification::saved(id))],
                    state_changed: false,
                },
                None => DispatchResult::unchanged(),
            },
            Command::DuplicateFile => match self.state.workspace.active_id() {
                Some(id) => self.duplicate(id),
                None => DispatchResult::unchanged(),
            },
            Command::NewFile(language) => {
                let record = self.state.workspace.create_from_template(language);
                DispatchResult::notify(Notification::created(record.id(), record.name()))
            }
            Command::RunCode => self.start_run(),
            Command::StopRun => DispatchResult::changed(self.state.execution.stop()),
            Command::ClearOutput => DispatchResult::changed(self.state.execution.clear()),
            Command::ToggleShortcuts => {
                self.state.ui.shortcuts_visible = !self.state.ui.shortcuts_visible;
                DispatchResult::changed(true)
            }
            Command::CloseShortcuts => {
                let was_visible = self.state.ui.shortcuts_visible;
                self.state.ui.shortcuts_visible = false;
                DispatchResult::changed(was_visible)
            }
        }
    }

    fn duplicate(&mut self, id: FileId) -> DispatchResult {
        match self.state.workspace.duplicate_file(id) {
            Ok(copy) => DispatchResult::notify(Notification::duplicated(copy.id(), copy.name())),
            Err(e) => declined("duplicate", e),
        }
    }

    fn start_run(&mut self) -> DispatchResult {
        let Some(file) = self.state.workspace.active() else {
            return DispatchResult::unchanged();
        };
        let Some(source) = file.content() else {
            return DispatchResult::unchanged();
        };
        let file_id = file.id();
        let language = file.language();
        let source = source.to_string();

        let Some(run_id) = self.state.execution.start() else {
            tracing::debug!("run already in flight");
            return DispatchResult::unchanged();
        };
        tracing::info!(run_id, %language, "run started");

        DispatchResult {
            effects: vec![
                Effect::Notify(Notification::run_started(file_id)),
                Effect::StartRun(RunRequest {
                    run_id,
                    language,
                    source,
                    stdin: self.state.stdin.clone(),
                }),
            ],
            state_changed: true,
        }
    }
}

fn declined(op: &'static str, error: WorkspaceError) -> DispatchResult {
    tracing::warn!(op, error = %error, "workspace operation declined");
    DispatchResult::unchanged()
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
