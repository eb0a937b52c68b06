//! 执行面板状态机：Idle -> Running -> Completed | Error
//!
//! The running phase is cosmetic. A run is identified by its `RunId`; once
//! the run is stopped or cleared its late completion is dropped.

use super::simulator::{RunOutcome, RunStatus};

pub const RUNNING_BANNER: &str = "Running code...\n";
pub const STOPPED_NOTE: &str = "\nExecution stopped by user.\n";

pub type RunId = u64;

#[derive(Debug, Clone, Default)]
pub struct ExecutionState {
    status: RunStatus,
    transcript: String,
    in_flight: Option<RunId>,
    next_run_id: RunId,
}

impl ExecutionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn in_flight(&self) -> Option<RunId> {
        self.in_flight
    }

    pub fn is_running(&self) -> bool {
        self.in_flight.is_some()
    }

    /// `None` while another run is in flight; runs are never queued.
    pub fn start(&mut self) -> Option<RunId> {
        if self.is_running() {
            return None;
        }

        let run_id = self.next_run_id;
        self.next_run_id += 1;
        self.in_flight = Some(run_id);
        self.status = RunStatus::Running;
        self.transcript.clear();
        self.transcript.push_str(RUNNING_BANNER);
        Some(run_id)
    }

    pub fn finish(&mut self, run_id: RunId, outcome: RunOutcome) -> bool {
        if self.in_flight != Some(run_id) {
            tracing::debug!(run_id, "stale run completion dropped");
            return false;
        }

        self.in_flight = None;
        self.status = outcome.status;
        self.transcript = outcome.transcript;
        true
    }

    pub fn stop(&mut self) -> bool {
        if self.in_flight.take().is_none() {
            return false;
        }

        self.status = RunStatus::Completed;
        self.transcript.push_str(STOPPED_NOTE);
        true
    }

    /// Also abandons an in-flight run.
    pub fn clear(&mut self) -> bool {
        let changed =
            self.status != RunStatus::Idle || !self.transcript.is_empty() || self.is_running();
        self.in_flight = None;
        self.status = RunStatus::Idle;
        self.transcript.clear();
        changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/execution.rs"]
mod tests;
