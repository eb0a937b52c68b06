use std::sync::mpsc::{self, Receiver, Sender};

use crate::kernel::Action;

/// Ticker generation stamped on each autosave tick.
pub type TickerId = u64;

#[derive(Debug)]
pub enum KernelMessage {
    Action(Action),
    AutosaveTick { ticker: TickerId },
}

#[derive(Clone)]
pub struct KernelBusSender {
    tx: Sender<KernelMessage>,
}

pub struct KernelBusReceiver {
    rx: Receiver<KernelMessage>,
}

pub fn kernel_bus() -> (KernelBusSender, KernelBusReceiver) {
    let (tx, rx) = mpsc::channel();
    (KernelBusSender { tx }, KernelBusReceiver { rx })
}

impl KernelBusSender {
    pub fn send(&self, msg: KernelMessage) -> Result<(), mpsc::SendError<KernelMessage>> {
        self.tx.send(msg)
    }

    pub fn send_action(&self, action: Action) -> Result<(), mpsc::SendError<KernelMessage>> {
        self.send(KernelMessage::Action(action))
    }
}

impl KernelBusReceiver {
    /// Everything queued right now, in send order.
    pub fn drain(&mut self) -> Vec<KernelMessage> {
        self.rx.try_iter().collect()
    }
}
