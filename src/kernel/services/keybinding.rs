//! 快捷键服务：按键 → 命令映射
//!
//! 默认键位与浏览器版一致：Ctrl/Cmd 组合触发文件与运行命令，Alt+S 打开快捷键面板。

use super::settings::{parse_keybinding, KeybindingRule};
use crate::core::event::Key;
use crate::core::Command;
use crossterm::event::{KeyCode, KeyModifiers};
use rustc_hash::FxHashMap;

/// Shortcuts the overlay lists for the embedded editor widget. They are
/// handled by the widget itself, not by the command dispatcher.
const EDITOR_SHORTCUTS: &[(&str, &str)] = &[
    ("Ctrl + N", "New file"),
    ("Ctrl + O", "Open file"),
    ("Ctrl + F", "Find in file"),
    ("Ctrl + H", "Find and replace"),
    ("Ctrl + /", "Toggle comment"),
    ("Ctrl + Z", "Undo"),
    ("Ctrl + Y", "Redo"),
    ("Tab", "Indent selection"),
    ("Shift + Tab", "Unindent selection"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutHint {
    pub keys: String,
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub struct KeybindingService {
    bindings: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn empty() -> Self {
        Self {
            bindings: FxHashMap::default(),
        }
    }

    pub fn with_defaults() -> Self {
        let mut service = Self::empty();

        // Ctrl on Linux/Windows, Cmd on macOS.
        for (code, command) in [
            (KeyCode::Char('s'), Command::SaveFile),
            (KeyCode::Char('d'), Command::DuplicateFile),
            (KeyCode::Enter, Command::RunCode),
        ] {
            service.bind(Key::ctrl(code), command);
            service.bind(Key::meta(code), command);
        }

        service.bind(Key::alt(KeyCode::Char('s')), Command::ToggleShortcuts);
        service.bind(Key::simple(KeyCode::Esc), Command::CloseShortcuts);

        service
    }

    /// Applies user rules on top of the current map. Unparseable rules are
    /// skipped with a warning; an empty command string unbinds the key.
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) -> usize {
        let mut applied = 0;
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "invalid keybinding key");
                continue;
            };

            if rule.command.trim().is_empty() {
                self.unbind(&key);
                applied += 1;
                continue;
            }

            match Command::from_name(&rule.command) {
                Some(command) => {
                    self.bind(key, command);
                    applied += 1;
                }
                None => tracing::warn!(command = %rule.command, "unknown keybinding command"),
            }
        }
        applied
    }

    pub fn get(&self, key: &Key) -> Option<&Command> {
        self.bindings.get(key)
    }

    pub fn bind(&mut self, key: Key, command: Command) {
        self.bindings.insert(key, command);
    }

    pub fn unbind(&mut self, key: &Key) -> Option<Command> {
        self.bindings.remove(key)
    }

    pub fn keys_for_command(&self, command: &Command) -> Vec<Key> {
        let mut keys: Vec<Key> = self
            .bindings
            .iter()
            .filter(|(_, cmd)| *cmd == command)
            .map(|(key, _)| *key)
            .collect();
        // Ctrl variants first so hints read the same on every platform.
        keys.sort_by_key(|key| (!key.modifiers.contains(KeyModifiers::CONTROL), key.to_string()));
        keys
    }

    pub fn is_bound(&self, key: &Key) -> bool {
        self.bindings.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Rows for the shortcuts overlay: bound commands first, then the
    /// editor widget's own shortcuts.
    pub fn shortcut_hints(&self) -> Vec<ShortcutHint> {
        const ORDER: [Command; 4] = [
            Command::SaveFile,
            Command::DuplicateFile,
            Command::RunCode,
            Command::ToggleShortcuts,
        ];

        let mut hints: Vec<ShortcutHint> = ORDER
            .iter()
            .filter_map(|command| {
                let keys = self.keys_for_command(command);
                let key = keys.first()?;
                Some(ShortcutHint {
                    keys: key.to_string(),
                    description: command.description(),
                })
            })
            .collect();

        hints.extend(
            EDITOR_SHORTCUTS
                .iter()
                .map(|&(keys, description)| ShortcutHint {
                    keys: keys.to_string(),
                    description,
                }),
        );
        hints
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}
