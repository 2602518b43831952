//! Cross-thread label updates
//!
//! The counting thread never touches UI state. It posts typed messages into a
//! FIFO queue that the UI event loop drains and applies on its own thread.

use log::debug;
use std::time::Duration;

/// Which overlay label an update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Fps,
    Stats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelUpdate {
    pub label: Label,
    pub text: String,
}

impl LabelUpdate {
    pub fn new(label: Label, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }
}

/// Create the queue between the counting thread and the UI.
pub fn update_channel() -> (UpdateSender, UpdateReceiver) {
    let (tx, rx) = flume::unbounded();
    (UpdateSender { tx }, UpdateReceiver { rx })
}

#[derive(Debug, Clone)]
pub struct UpdateSender {
    tx: flume::Sender<LabelUpdate>,
}

impl UpdateSender {
    /// Queue `text` for `label`. Never blocks.
    ///
    /// Returns false once the UI side is gone; the update is dropped.
    pub fn post(&self, label: Label, text: &str) -> bool {
        match self.tx.send(LabelUpdate::new(label, text)) {
            Ok(()) => true,
            Err(flume::SendError(update)) => {
                debug!("UI gone, dropping {:?} update", update.label);
                false
            }
        }
    }

    pub fn is_disconnected(&self) -> bool {
        self.tx.is_disconnected()
    }
}

/// UI end of the queue. Clones drain the same queue.
#[derive(Debug, Clone)]
pub struct UpdateReceiver {
    rx: flume::Receiver<LabelUpdate>,
}

impl UpdateReceiver {
    /// Wait for the next update; `None` once every sender is gone.
    pub async fn recv_async(&self) -> Option<LabelUpdate> {
        self.rx.recv_async().await.ok()
    }

    pub fn try_recv(&self) -> Option<LabelUpdate> {
        self.rx.try_recv().ok()
    }

    /// Block the calling thread for at most `timeout`. Not for the UI thread.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<LabelUpdate> {
        self.rx.recv_timeout(timeout).ok()
    }

    /// Take everything currently queued, oldest first.
    pub fn drain(&self) -> Vec<LabelUpdate> {
        self.rx.drain().collect()
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}
