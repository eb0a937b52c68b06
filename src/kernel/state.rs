use super::execution::ExecutionState;
use super::workspace::WorkspaceController;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub shortcuts_visible: bool,
}

#[derive(Debug, Default)]
pub struct AppState {
    pub workspace: WorkspaceController,
    pub execution: ExecutionState,
    pub ui: UiState,
    /// Program input typed into the run panel.
    pub stdin: String,
}

impl AppState {
    pub fn new(workspace: WorkspaceController) -> Self {
        Self {
            workspace,
            ..Self::default()
        }
    }
}
