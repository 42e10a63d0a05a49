//! # pullseq-core
//!
//! Push-style sequence producers and the adapter that turns them into
//! pull-style iterators with explicit early stop.

pub mod collections;
pub mod constants;
pub mod error;
pub mod lines;
pub mod observer;
pub mod observers;
pub mod pull;
pub mod random;
pub mod sequence;

// Re-exports
pub use collections::{Entries, Indexed};
pub use constants::{exit_codes, LIMIT, RANDOM_UPPER};
pub use error::SeqError;
pub use lines::{FileLines, LinePair, Lines};
pub use observer::{SequenceEvent, SequenceObserver};
pub use observers::{ChannelObserver, LoggingObserver, NoOpObserver, RecordingObserver};
pub use pull::{Pull, State};
pub use random::RandomValues;
pub use sequence::{from_fn, Ending, FromFn, Sequence};
