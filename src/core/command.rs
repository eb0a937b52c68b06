//! 命令系统：语义命令定义
//!
//! Command 不关心具体按键；按键到命令的映射由 KeybindingService 负责。

use crate::kernel::language::LanguageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== 文件操作 ====================
    SaveFile,
    DuplicateFile,
    NewFile(LanguageId),

    // ==================== 执行面板 ====================
    RunCode,
    StopRun,
    ClearOutput,

    // ==================== 视图操作 ====================
    ToggleShortcuts,
    CloseShortcuts,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::SaveFile => "saveFile",
            Command::DuplicateFile => "duplicateFile",
            Command::NewFile(LanguageId::Python) => "newPythonFile",
            Command::NewFile(LanguageId::Java) => "newJavaFile",
            Command::NewFile(LanguageId::Cpp) => "newCppFile",
            Command::RunCode => "runCode",
            Command::StopRun => "stopRun",
            Command::ClearOutput => "clearOutput",
            Command::ToggleShortcuts => "toggleShortcuts",
            Command::CloseShortcuts => "closeShortcuts",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let cmd = match name.trim() {
            "saveFile" => Command::SaveFile,
            "duplicateFile" => Command::DuplicateFile,
            "newPythonFile" => Command::NewFile(LanguageId::Python),
            "newJavaFile" => Command::NewFile(LanguageId::Java),
            "newCppFile" => Command::NewFile(LanguageId::Cpp),
            "runCode" => Command::RunCode,
            "stopRun" => Command::StopRun,
            "clearOutput" => Command::ClearOutput,
            "toggleShortcuts" => Command::ToggleShortcuts,
            "closeShortcuts" => Command::CloseShortcuts,
            _ => return None,
        };
        Some(cmd)
    }

    /// Text shown next to the binding in the shortcuts overlay.
    pub fn description(&self) -> &'static str {
        match self {
            Command::SaveFile => "Save current file",
            Command::DuplicateFile => "Duplicate current file",
            Command::NewFile(LanguageId::Python) => "New Python file",
            Command::NewFile(LanguageId::Java) => "New Java file",
            Command::NewFile(LanguageId::Cpp) => "New C++ file",
            Command::RunCode => "Run code",
            Command::StopRun => "Stop running code",
            Command::ClearOutput => "Clear output",
            Command::ToggleShortcuts => "Show keyboard shortcuts",
            Command::CloseShortcuts => "Close keyboard shortcuts",
        }
    }

    /// 需要活动文件才有意义的命令
    pub fn targets_active_file(&self) -> bool {
        matches!(
            self,
            Command::SaveFile | Command::DuplicateFile | Command::RunCode
        )
    }
}
