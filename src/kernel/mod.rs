//! Headless application core (state/action/effect).

pub mod action;
pub mod dispatcher;
pub mod effect;
pub mod execution;
pub mod language;
pub mod notification;
pub mod services;
pub mod simulator;
pub mod state;
pub mod store;
pub mod workspace;

pub use action::Action;
pub use dispatcher::{CommandDispatcher, KeyDispatch};
pub use effect::{Effect, RunRequest};
pub use execution::{ExecutionState, RunId};
pub use language::LanguageId;
pub use notification::{Notification, NotificationKind};
pub use simulator::{simulate, simulate_language, RunOutcome, RunStatus};
pub use state::{AppState, UiState};
pub use store::{DispatchResult, Store};
pub use workspace::{WorkspaceController, WorkspaceError, WorkspaceEvent};
