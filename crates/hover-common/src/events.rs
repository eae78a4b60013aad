use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::id::{EditorId, TerminalId};
use crate::types::FocusTarget;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    ConfigReloaded,
    EditorOpened(EditorId),
    EditorClosed(EditorId),
    TerminalCreated(TerminalId),
    TerminalDisposed(TerminalId),
    FocusChanged(FocusTarget),
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}
