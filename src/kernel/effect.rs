use super::execution::RunId;
use super::language::LanguageId;
use super::notification::Notification;

/// Snapshot handed to the simulator; later edits to the file do not reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub run_id: RunId,
    pub language: LanguageId,
    pub source: String,
    pub stdin: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Notify(Notification),
    StartRun(RunRequest),
}
