use crate::core::Command;
use crate::kernel::execution::RunId;
use crate::kernel::language::LanguageId;
use crate::kernel::simulator::RunOutcome;
use crate::models::FileId;

#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(Command),
    CreateFile {
        name: String,
        language: LanguageId,
    },
    DuplicateFile(FileId),
    DeleteFile(FileId),
    UpdateContent {
        id: FileId,
        content: String,
    },
    RenameFile {
        id: FileId,
        name: String,
    },
    SelectFile(FileId),
    SetStdin(String),
    RunFinished {
        run_id: RunId,
        outcome: RunOutcome,
    },
    AutosaveTick,
}
