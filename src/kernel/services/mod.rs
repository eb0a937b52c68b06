//! Kernel-facing services.
//!
//! - `bus`: channel carrying actions from background tasks back to the store.
//! - `keybinding`: key -> command map.
//! - `settings`: user settings file (JSON).

pub mod bus;
pub mod keybinding;
pub mod settings;

pub use bus::{kernel_bus, KernelBusReceiver, KernelBusSender, KernelMessage};
pub use keybinding::{KeybindingService, ShortcutHint};
pub use settings::{KeybindingRule, Settings};
