//! codepad - headless multi-file code workspace
//!
//! 模块结构：
//! - core: 语义命令与按键（Command, Key）
//! - models: 数据模型（FileRecord, FileStore）
//! - kernel: 状态 / 动作 / 副作用（Store, WorkspaceController, 模拟执行）
//! - runtime: 会话运行时（入口闸门、自动保存、延迟执行）

pub mod core;
pub mod kernel;
pub mod models;
pub mod runtime;
