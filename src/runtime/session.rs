use std::fmt;
use std::io;
use std::time::Duration;

use crossterm::event::KeyEvent;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use super::autosave::AutosaveTicker;
use super::gate::{EntryGate, GateDecision};
use crate::core::{Command, Key};
use crate::kernel::services::settings::Settings;
use crate::kernel::services::{kernel_bus, KernelBusReceiver, KernelBusSender, KernelMessage};
use crate::kernel::services::KeybindingService;
use crate::kernel::{
    simulate_language, Action, AppState, CommandDispatcher, Effect, KeyDispatch, Notification,
    RunRequest, Store, WorkspaceController, WorkspaceEvent,
};

#[derive(Debug)]
pub enum SessionError {
    EntryDenied,
    Runtime(io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::EntryDenied => write!(f, "entry gate denied access to the workspace"),
            SessionError::Runtime(e) => write!(f, "failed to start async runtime: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Runtime(e) => Some(e),
            SessionError::EntryDenied => None,
        }
    }
}

/// One open workspace: the store, its dispatcher, and the background tasks
/// feeding it. Constructed only after the entry gate says `Proceed`.
pub struct Session {
    handle: Handle,
    store: Store,
    dispatcher: CommandDispatcher,
    bus_tx: KernelBusSender,
    bus_rx: KernelBusReceiver,
    autosave: Option<AutosaveTicker>,
    run_delay: Duration,
    run_tasks: Vec<JoinHandle<()>>,
    notifications: Vec<Notification>,
    open: bool,
    runtime: Option<tokio::runtime::Runtime>,
}

impl Session {
    /// Builds a private tokio runtime for the background tasks.
    pub fn open(gate: &mut impl EntryGate, settings: Settings) -> Result<Self, SessionError> {
        authorize(gate)?;
        let runtime = build_runtime().map_err(SessionError::Runtime)?;
        let handle = runtime.handle().clone();
        Ok(Self::build(handle, Some(runtime), settings))
    }

    /// Runs the background tasks on an existing runtime.
    pub fn open_in(
        gate: &mut impl EntryGate,
        settings: Settings,
        handle: Handle,
    ) -> Result<Self, SessionError> {
        authorize(gate)?;
        Ok(Self::build(handle, None, settings))
    }

    fn build(handle: Handle, runtime: Option<tokio::runtime::Runtime>, settings: Settings) -> Self {
        let workspace = if settings.seed_samples {
            WorkspaceController::with_samples()
        } else {
            WorkspaceController::new()
        };

        let mut keybindings = KeybindingService::with_defaults();
        let applied = keybindings.apply_rules(&settings.keybindings);
        if applied > 0 {
            tracing::info!(applied, "user keybindings applied");
        }

        let (bus_tx, bus_rx) = kernel_bus();
        let autosave = AutosaveTicker::start(&handle, settings.autosave_interval(), bus_tx.clone());
        tracing::info!(files = workspace.len(), "workspace opened");

        Self {
            handle,
            store: Store::with_workspace(workspace),
            dispatcher: CommandDispatcher::new(keybindings),
            bus_tx,
            bus_rx,
            autosave: Some(autosave),
            run_delay: settings.run_delay(),
            run_tasks: Vec::new(),
            notifications: Vec::new(),
            open: true,
            runtime,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&WorkspaceEvent) + 'static) {
        self.store.workspace_mut().subscribe(observer);
    }

    pub fn handle_key_event(&mut self, event: KeyEvent) -> KeyDispatch {
        if !self.open {
            return KeyDispatch::PassThrough;
        }
        let outcome = self.dispatcher.handle_key_event(&mut self.store, event);
        self.apply_outcome(&outcome);
        outcome
    }

    pub fn handle_key(&mut self, key: Key) -> KeyDispatch {
        if !self.open {
            return KeyDispatch::PassThrough;
        }
        let outcome = self.dispatcher.handle_key(&mut self.store, key);
        self.apply_outcome(&outcome);
        outcome
    }

    pub fn trigger(&mut self, command: Command) -> KeyDispatch {
        if !self.open {
            return KeyDispatch::Ignored { command };
        }
        let outcome = self.dispatcher.trigger(&mut self.store, command);
        self.apply_outcome(&outcome);
        outcome
    }

    /// Returns whether the state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        if !self.open {
            return false;
        }
        let result = self.store.dispatch(action);
        self.apply_effects(&result.effects);
        result.state_changed
    }

    /// Drains the kernel bus into the store. Called by the host loop.
    pub fn pump(&mut self) -> bool {
        if !self.open {
            return false;
        }

        let mut changed = false;
        for msg in self.bus_rx.drain() {
            match msg {
                KernelMessage::Action(action) => changed |= self.dispatch(action),
                KernelMessage::AutosaveTick { ticker } => {
                    let current = self.autosave.as_ref().map(AutosaveTicker::id);
                    if current == Some(ticker) {
                        changed |= self.dispatch(Action::AutosaveTick);
                    } else {
                        tracing::debug!(ticker, "stale autosave tick dropped");
                    }
                }
            }
        }
        changed
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Stops the ticker, abandons pending runs, and discards anything they
    /// already queued. Idempotent; the session ignores input afterwards.
    pub fn teardown(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;

        if let Some(mut ticker) = self.autosave.take() {
            ticker.stop();
        }
        for task in self.run_tasks.drain(..) {
            task.abort();
        }
        let dropped = self.bus_rx.drain().len();
        tracing::info!(dropped, "session torn down");
    }

    fn apply_outcome(&mut self, outcome: &KeyDispatch) {
        if let Some(result) = outcome.result() {
            self.apply_effects(&result.effects);
        }
    }

    fn apply_effects(&mut self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::Notify(notification) => {
                    tracing::info!(
                        title = notification.title,
                        description = %notification.description,
                        "notification"
                    );
                    self.notifications.push(notification.clone());
                }
                Effect::StartRun(request) => self.spawn_run(request.clone()),
            }
        }
    }

    fn spawn_run(&mut self, request: RunRequest) {
        self.run_tasks.retain(|task| !task.is_finished());

        let tx = self.bus_tx.clone();
        let delay = self.run_delay;
        let task = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            let outcome = simulate_language(request.language, &request.source, &request.stdin);
            let _ = tx.send_action(Action::RunFinished {
                run_id: request.run_id,
                outcome,
            });
        });
        self.run_tasks.push(task);
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.teardown();
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

fn authorize(gate: &mut impl EntryGate) -> Result<(), SessionError> {
    match gate.authorize() {
        GateDecision::Proceed => Ok(()),
        GateDecision::Deny => {
            tracing::info!("entry gate denied access");
            Err(SessionError::EntryDenied)
        }
    }
}

fn build_runtime() -> io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .or_else(|e| {
            tracing::error!(
                error = %e,
                "Failed to create multi-thread tokio runtime, falling back to current-thread"
            );
            tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
        })
}
