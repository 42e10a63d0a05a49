//! Concrete observer implementations.

use crossbeam_channel::Sender;
use parking_lot::Mutex;
use tracing::info;

use crate::observer::{SequenceEvent, SequenceObserver};

/// Observer that ignores every event.
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceObserver for NoOpObserver {
    fn on_event(&self, _event: &SequenceEvent) {}
}

/// Observer that logs events through `tracing`.
pub struct LoggingObserver {
    producer: &'static str,
}

impl LoggingObserver {
    /// Create a logging observer labelled with the producer name.
    #[must_use]
    pub fn new(producer: &'static str) -> Self {
        Self { producer }
    }
}

impl SequenceObserver for LoggingObserver {
    fn on_event(&self, event: &SequenceEvent) {
        match event {
            SequenceEvent::LimitReached { produced } => {
                info!(producer = self.producer, produced, "limit reached");
            }
            SequenceEvent::ReceivedStop { produced } => {
                info!(producer = self.producer, produced, "received stop");
            }
        }
    }
}

/// Observer that keeps every event for later inspection.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<SequenceEvent>>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<SequenceEvent> {
        self.events.lock().clone()
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl SequenceObserver for RecordingObserver {
    fn on_event(&self, event: &SequenceEvent) {
        self.events.lock().push(*event);
    }
}

/// Observer that forwards events through a channel (non-blocking).
pub struct ChannelObserver {
    sender: Sender<SequenceEvent>,
}

impl ChannelObserver {
    #[must_use]
    pub fn new(sender: Sender<SequenceEvent>) -> Self {
        Self { sender }
    }
}

impl SequenceObserver for ChannelObserver {
    fn on_event(&self, event: &SequenceEvent) {
        // Full or disconnected channels drop the event.
        let _ = self.sender.try_send(*event);
    }
}
