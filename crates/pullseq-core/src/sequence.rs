//! The push-style producer contract.
//!
//! A [`Sequence`] emits ordered `(key, value)` pairs by calling a yield
//! callback once per pair. The callback answers `true` to ask for the next
//! pair or `false` to ask the producer to stop; after a `false` the producer
//! must clean up and return without yielding again.

use std::marker::PhantomData;
use std::ops::ControlFlow;

use crate::pull::Pull;

/// Why a run of a producer came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ending {
    /// The producer ran out of pairs on its own.
    Exhausted,
    /// The consumer asked the producer to stop.
    Stopped,
    /// The producer panicked, or its thread could not be started.
    Failed,
}

impl Ending {
    /// Short human-readable label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exhausted => "exhausted",
            Self::Stopped => "stopped",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for Ending {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A producer of `(key, value)` pairs driven by a yield callback.
///
/// `run` consumes the producer, so each value is run at most once. A producer
/// owns whatever resource it reads from for the duration of `run` and must
/// release it on every exit path.
pub trait Sequence: Send + 'static {
    /// Key half of each produced pair.
    type Key: Send + 'static;
    /// Value half of each produced pair.
    type Value: Send + 'static;

    /// Emit pairs in order until exhausted or until `yield_` returns `false`.
    fn run(self, yield_: &mut dyn FnMut(Self::Key, Self::Value) -> bool);

    /// Wrap this producer in a demand-driven [`Pull`] adapter.
    fn pull(self) -> Pull<Self::Key, Self::Value>
    where
        Self: Sized,
    {
        Pull::new(self)
    }

    /// Run the producer on the calling thread, feeding each pair to `f`.
    ///
    /// Returning [`ControlFlow::Break`] from `f` stops the producer.
    ///
    /// # Example
    /// ```
    /// use std::ops::ControlFlow;
    /// use pullseq_core::{Ending, Indexed, Sequence};
    ///
    /// let mut seen = Vec::new();
    /// let ending = Indexed::new(vec!["a", "b", "c"]).for_each_pair(|i, s| {
    ///     seen.push((i, s));
    ///     if i == 1 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
    /// });
    /// assert_eq!(seen, [(0, "a"), (1, "b")]);
    /// assert_eq!(ending, Ending::Stopped);
    /// ```
    fn for_each_pair<F>(self, mut f: F) -> Ending
    where
        Self: Sized,
        F: FnMut(Self::Key, Self::Value) -> ControlFlow<()>,
    {
        let mut stopped = false;
        self.run(&mut |key: Self::Key, value: Self::Value| {
            if stopped {
                tracing::warn!("producer yielded after being told to stop; pair discarded");
                return false;
            }
            match f(key, value) {
                ControlFlow::Continue(()) => true,
                ControlFlow::Break(()) => {
                    stopped = true;
                    false
                }
            }
        });
        if stopped {
            Ending::Stopped
        } else {
            Ending::Exhausted
        }
    }
}

/// A [`Sequence`] backed by a closure that receives the yield callback.
///
/// Created by [`from_fn`].
pub struct FromFn<F, K, V> {
    body: F,
    _pair: PhantomData<fn() -> (K, V)>,
}

/// Build a producer from a closure.
///
/// # Example
/// ```
/// use pullseq_core::{from_fn, Sequence};
///
/// let squares = from_fn::<u32, u32, _>(|yield_| {
///     for i in 0..3 {
///         if !yield_(i, i * i) {
///             return;
///         }
///     }
/// });
/// let pairs: Vec<_> = squares.pull().collect();
/// assert_eq!(pairs, [(0, 0), (1, 1), (2, 4)]);
/// ```
pub fn from_fn<K, V, F>(body: F) -> FromFn<F, K, V>
where
    F: FnOnce(&mut dyn FnMut(K, V) -> bool) + Send + 'static,
{
    FromFn {
        body,
        _pair: PhantomData,
    }
}

impl<F, K, V> Sequence for FromFn<F, K, V>
where
    F: FnOnce(&mut dyn FnMut(K, V) -> bool) + Send + 'static,
    K: Send + 'static,
    V: Send + 'static,
{
    type Key = K;
    type Value = V;

    fn run(self, yield_: &mut dyn FnMut(K, V) -> bool) {
        (self.body)(yield_);
    }
}
