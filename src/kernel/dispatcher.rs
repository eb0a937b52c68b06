//! 命令分发器：按键 / 按钮 → Store
//!
//! One activation produces at most one action. Auto-repeat and release
//! events of a bound combination are swallowed, and a command whose previous
//! activation is still in flight is dropped instead of queued.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::core::event::Key;
use crate::core::Command;
use crate::kernel::services::KeybindingService;
use crate::kernel::{Action, DispatchResult, Store};

#[derive(Debug)]
pub enum KeyDispatch {
    /// The command reached the store.
    Handled {
        command: Command,
        result: DispatchResult,
    },
    /// Recognized but dropped (repeat, release, or still in flight).
    Ignored { command: Command },
    /// Not a bound combination; the platform keeps its default handling.
    PassThrough,
}

impl KeyDispatch {
    /// Every recognized combination suppresses the platform default, even
    /// when it ends up doing nothing.
    pub fn prevent_default(&self) -> bool {
        !matches!(self, KeyDispatch::PassThrough)
    }

    pub fn command(&self) -> Option<Command> {
        match self {
            KeyDispatch::Handled { command, .. } | KeyDispatch::Ignored { command } => {
                Some(*command)
            }
            KeyDispatch::PassThrough => None,
        }
    }

    pub fn result(&self) -> Option<&DispatchResult> {
        match self {
            KeyDispatch::Handled { result, .. } => Some(result),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CommandDispatcher {
    keybindings: KeybindingService,
}

impl CommandDispatcher {
    pub fn new(keybindings: KeybindingService) -> Self {
        Self { keybindings }
    }

    pub fn keybindings(&self) -> &KeybindingService {
        &self.keybindings
    }

    pub fn keybindings_mut(&mut self) -> &mut KeybindingService {
        &mut self.keybindings
    }

    pub fn handle_key_event(&self, store: &mut Store, event: KeyEvent) -> KeyDispatch {
        let key = Key::from(event);
        let Some(command) = self.keybindings.get(&key).copied() else {
            return KeyDispatch::PassThrough;
        };

        if event.kind != KeyEventKind::Press {
            return KeyDispatch::Ignored { command };
        }
        self.trigger(store, command)
    }

    pub fn handle_key(&self, store: &mut Store, key: Key) -> KeyDispatch {
        match self.keybindings.get(&key).copied() {
            Some(command) => self.trigger(store, command),
            None => KeyDispatch::PassThrough,
        }
    }

    /// Explicit UI actions (toolbar buttons, menu items) enter here.
    pub fn trigger(&self, store: &mut Store, command: Command) -> KeyDispatch {
        if store.command_in_flight(command) {
            tracing::debug!(command = command.name(), "command in flight, ignored");
            return KeyDispatch::Ignored { command };
        }

        let result = store.dispatch(Action::RunCommand(command));
        KeyDispatch::Handled { command, result }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/dispatcher.rs"]
mod tests;
