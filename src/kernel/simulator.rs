//! Scripted execution stand-in.
//!
//! Deterministic echo: the source is scanned for a fixed per-language
//! marker, never parsed or run.

use crate::kernel::language::LanguageId;
use memchr::memmem;
use std::fmt;

pub const HELLO_TRANSCRIPT: &str = "Hello, World!\n";
pub const NO_OUTPUT_TRANSCRIPT: &str = "Code executed successfully.\nNo output generated.\n";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RunStatus {
    #[default]
    Idle,
    Running,
    Completed,
    Error,
}

impl RunStatus {
    pub fn label(self) -> &'static str {
        match self {
            RunStatus::Idle => "Ready",
            RunStatus::Running => "Running",
            RunStatus::Completed => "Completed",
            RunStatus::Error => "Error",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RunStatus::Completed | RunStatus::Error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub transcript: String,
    pub status: RunStatus,
}

impl RunOutcome {
    fn completed(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            status: RunStatus::Completed,
        }
    }

    fn error(message: impl fmt::Display) -> Self {
        Self {
            transcript: format!("Error: {message}\n"),
            status: RunStatus::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedLanguage(pub String);

impl fmt::Display for UnsupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported language: {}", self.0)
    }
}

impl std::error::Error for UnsupportedLanguage {}

/// Entry point for callers holding a raw language identifier. Anything
/// outside `python`/`java`/`cpp` yields [`RunStatus::Error`].
pub fn simulate(language: &str, source: &str, stdin: &str) -> RunOutcome {
    match LanguageId::from_name(language) {
        Some(language) => simulate_language(language, source, stdin),
        None => {
            let err = UnsupportedLanguage(language.to_string());
            tracing::warn!(error = %err, "simulation declined");
            RunOutcome::error(err)
        }
    }
}

pub fn simulate_language(language: LanguageId, source: &str, stdin: &str) -> RunOutcome {
    let says_hello = language
        .hello_markers()
        .iter()
        .any(|marker| memmem::find(source.as_bytes(), marker.as_bytes()).is_some());
    if says_hello {
        return RunOutcome::completed(HELLO_TRANSCRIPT);
    }

    // The trimmed form only decides the branch; the echo keeps stdin as typed.
    if !stdin.trim().is_empty() {
        return RunOutcome::completed(format!(
            "Input received: {stdin}\nProcessed successfully.\n"
        ));
    }

    RunOutcome::completed(NO_OUTPUT_TRANSCRIPT)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/simulator.rs"]
mod tests;
