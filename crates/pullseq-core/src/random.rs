//! Bounded random-integer producer.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{LIMIT, RANDOM_UPPER};
use crate::observer::{SequenceEvent, SequenceObserver};
use crate::observers::LoggingObserver;
use crate::sequence::Sequence;

/// Produces `limit` pairs `(index, value)` with `value` drawn uniformly from
/// `0..upper`.
///
/// Reports [`SequenceEvent::LimitReached`] when all pairs were produced and
/// [`SequenceEvent::ReceivedStop`] when the consumer stopped it early.
///
/// # Example
/// ```
/// use pullseq_core::{RandomValues, Sequence};
///
/// let pairs: Vec<_> = RandomValues::new().with_seed(7).pull().collect();
/// assert_eq!(pairs.len(), 10);
/// assert!(pairs.iter().enumerate().all(|(i, &(k, v))| k == i && v < 100));
/// ```
#[derive(Clone)]
pub struct RandomValues {
    limit: usize,
    upper: u32,
    seed: Option<u64>,
    observer: Arc<dyn SequenceObserver>,
}

impl RandomValues {
    /// Generator with the default limit and range, logging its terminal event.
    #[must_use]
    pub fn new() -> Self {
        Self {
            limit: LIMIT,
            upper: RANDOM_UPPER,
            seed: None,
            observer: Arc::new(LoggingObserver::new("random-values")),
        }
    }

    /// Number of pairs to produce.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Exclusive upper bound for values. Zero is treated as one.
    #[must_use]
    pub fn with_upper(mut self, upper: u32) -> Self {
        self.upper = upper.max(1);
        self
    }

    /// Seed the generator for a reproducible sequence.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the observer that receives the terminal event.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn SequenceObserver>) -> Self {
        self.observer = observer;
        self
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for RandomValues {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequence for RandomValues {
    type Key = usize;
    type Value = u32;

    fn run(self, yield_: &mut dyn FnMut(usize, u32) -> bool) {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        for i in 0..self.limit {
            if !yield_(i, rng.random_range(0..self.upper)) {
                self.observer
                    .on_event(&SequenceEvent::ReceivedStop { produced: i + 1 });
                return;
            }
        }
        self.observer.on_event(&SequenceEvent::LimitReached {
            produced: self.limit,
        });
    }
}
