//! Observer pattern for producer termination events.
//!
//! Producers report exactly one terminal event per run: either they were
//! told to stop by the consumer or they ran out of pairs.

use crate::sequence::Ending;

/// Terminal event reported by a producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceEvent {
    /// The producer emitted all of its pairs.
    LimitReached {
        /// Number of pairs handed to the yield callback.
        produced: usize,
    },
    /// The yield callback asked the producer to stop.
    ReceivedStop {
        /// Number of pairs delivered before the consumer asked to stop.
        produced: usize,
    },
}

impl SequenceEvent {
    /// How the run ended.
    #[must_use]
    pub fn ending(self) -> Ending {
        match self {
            Self::LimitReached { .. } => Ending::Exhausted,
            Self::ReceivedStop { .. } => Ending::Stopped,
        }
    }

    /// Number of pairs produced before the event.
    #[must_use]
    pub fn produced(self) -> usize {
        match self {
            Self::LimitReached { produced } | Self::ReceivedStop { produced } => produced,
        }
    }
}

/// Receiver of producer termination events.
pub trait SequenceObserver: Send + Sync {
    /// Receive a terminal event.
    fn on_event(&self, event: &SequenceEvent);
}
