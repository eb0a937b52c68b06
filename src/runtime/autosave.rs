use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::kernel::services::bus::TickerId;
use crate::kernel::services::{KernelBusSender, KernelMessage};

static NEXT_TICKER_ID: AtomicU64 = AtomicU64::new(1);

/// Posts `KernelMessage::AutosaveTick` every `period`, first tick one full
/// period after start. Holds nothing but its schedule.
///
/// Ticks carry the ticker id so the consumer can drop anything a stopped
/// ticker managed to post before it was cancelled.
pub struct AutosaveTicker {
    id: TickerId,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl AutosaveTicker {
    pub fn start(handle: &Handle, period: Duration, bus: KernelBusSender) -> Self {
        let id = NEXT_TICKER_ID.fetch_add(1, Ordering::Relaxed);
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let task = handle.spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = &mut shutdown_rx => break,
                    _ = interval.tick() => {
                        if bus.send(KernelMessage::AutosaveTick { ticker: id }).is_err() {
                            break;
                        }
                    }
                }
            }
            tracing::debug!(ticker = id, "autosave ticker exited");
        });

        tracing::info!(ticker = id, ?period, "autosave ticker started");
        Self {
            id,
            shutdown: Some(shutdown_tx),
            task: Some(task),
        }
    }

    pub fn id(&self) -> TickerId {
        self.id
    }

    /// Idempotent.
    pub fn stop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::info!(ticker = self.id, "autosave ticker stopped");
        }
    }
}

impl Drop for AutosaveTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
