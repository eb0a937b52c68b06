//! 会话运行时：入口闸门、自动保存、模拟执行的延迟
//!
//! The kernel never blocks; everything time-based runs on tokio and comes
//! back as a `KernelMessage` on the kernel bus.

mod autosave;
mod gate;
mod session;

pub use autosave::AutosaveTicker;
pub use gate::{EntryGate, GateDecision, OpenGate};
pub use session::{Session, SessionError};
