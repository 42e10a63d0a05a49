//! Push-to-pull adapter.
//!
//! [`Pull`] turns a callback-driven [`Sequence`] into an iterator the consumer
//! drives one pair at a time. The producer runs on its own thread, started on
//! the first demand, and hands pairs over a zero-capacity channel. After each
//! handoff it parks inside its yield call until the consumer either asks for
//! another pair (`Continue`) or stops it (`Stop`), so producer and consumer
//! strictly alternate and at most one pair is ever in flight.

use std::any::Any;
use std::fmt;
use std::iter::FusedIterator;
use std::panic;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, Sender};
use tracing::{debug, error, warn};

use crate::constants::PRODUCER_THREAD_NAME;
use crate::sequence::{Ending, Sequence};

/// Lifecycle state of a [`Pull`] adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Created, producer not started yet.
    Idle,
    /// Producer started and parked inside a yield call.
    Running,
    /// Stop requested, producer unwinding.
    Draining,
    /// Terminal. Every further `next` reports no item.
    Done,
}

/// Resume signal sent from the consumer to a parked producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    Continue,
    Stop,
}

/// What to do with a producer panic observed while finishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OnPanic {
    Resume,
    Swallow,
}

type Body<K, V> = Box<dyn FnOnce(&mut dyn FnMut(K, V) -> bool) + Send>;

/// Live producer thread plus its two handoff channels.
struct Session<K, V> {
    pairs: Receiver<(K, V)>,
    resume: Sender<Signal>,
    worker: JoinHandle<()>,
    /// The producer is parked in a yield call waiting for a signal.
    parked: bool,
}

/// Demand-driven view over a push-style [`Sequence`].
///
/// Pairs come out of [`Iterator::next`] in production order. Once `next`
/// returns `None` it keeps returning `None`. [`Pull::stop`] can be called any
/// number of times; dropping the adapter stops the producer as well.
///
/// # Panics
///
/// `next` re-raises a panic that escaped the producer while it was
/// producing. The adapter is `Done` afterwards and reports
/// [`Ending::Failed`].
///
/// # Example
/// ```
/// use pullseq_core::{Ending, Indexed, Pull};
///
/// let mut pull = Pull::new(Indexed::new(vec![10, 20, 30]));
/// assert_eq!(pull.next(), Some((0, 10)));
/// pull.stop();
/// assert_eq!(pull.next(), None);
/// assert_eq!(pull.ending(), Some(Ending::Stopped));
/// ```
pub struct Pull<K, V> {
    state: State,
    body: Option<Body<K, V>>,
    session: Option<Session<K, V>>,
    ending: Option<Ending>,
}

impl<K, V> Pull<K, V>
where
    K: Send + 'static,
    V: Send + 'static,
{
    /// Wrap a producer. Nothing runs until the first `next`.
    pub fn new<S>(producer: S) -> Self
    where
        S: Sequence<Key = K, Value = V>,
    {
        Self {
            state: State::Idle,
            body: Some(Box::new(move |yield_: &mut dyn FnMut(K, V) -> bool| {
                producer.run(yield_);
            })),
            session: None,
            ending: None,
        }
    }

    /// Pull the next pair as a `(key, value, ok)` triple.
    ///
    /// When no pair is left this returns zero values with `ok = false`.
    pub fn next_or_default(&mut self) -> (K, V, bool)
    where
        K: Default,
        V: Default,
    {
        match self.advance() {
            Some((key, value)) => (key, value, true),
            None => (K::default(), V::default(), false),
        }
    }

    fn advance(&mut self) -> Option<(K, V)> {
        match self.state {
            State::Idle => self.start(),
            State::Running => {}
            State::Draining | State::Done => return None,
        }

        let received = {
            let session = self.session.as_mut()?;
            let resumed = !session.parked || session.resume.send(Signal::Continue).is_ok();
            let pair = if resumed {
                session.pairs.recv().ok()
            } else {
                None
            };
            session.parked = pair.is_some();
            pair
        };

        if received.is_none() {
            self.finish(Ending::Exhausted, OnPanic::Resume);
        }
        received
    }

    /// Launch the producer thread. It blocks on its first handoff.
    fn start(&mut self) {
        self.launch(thread::Builder::new().name(PRODUCER_THREAD_NAME.to_string()));
    }

    fn launch(&mut self, builder: thread::Builder) {
        let Some(body) = self.body.take() else {
            self.state = State::Done;
            return;
        };

        let (pair_tx, pair_rx) = bounded::<(K, V)>(0);
        let (resume_tx, resume_rx) = bounded::<Signal>(0);

        let spawned = builder.spawn(move || {
            let mut stopped = false;
            let mut yield_ = |key: K, value: V| -> bool {
                if stopped {
                    warn!("producer yielded after being told to stop; pair discarded");
                    return false;
                }
                if pair_tx.send((key, value)).is_err() {
                    stopped = true;
                    return false;
                }
                match resume_rx.recv() {
                    Ok(Signal::Continue) => true,
                    Ok(Signal::Stop) | Err(_) => {
                        stopped = true;
                        false
                    }
                }
            };
            body(&mut yield_);
        });
        let worker = match spawned {
            Ok(worker) => worker,
            Err(err) => {
                error!(error = %err, "failed to spawn producer thread");
                self.state = State::Done;
                self.ending = Some(Ending::Failed);
                return;
            }
        };

        debug!("pull session started");
        self.session = Some(Session {
            pairs: pair_rx,
            resume: resume_tx,
            worker,
            parked: false,
        });
        self.state = State::Running;
    }
}

impl<K, V> Pull<K, V> {
    /// Stop the producer and wait for it to unwind.
    ///
    /// Safe to call at any time and any number of times. Stopping before the
    /// first `next` means the producer never runs. Stopping after exhaustion
    /// has no effect. A panic raised by the producer while unwinding is logged
    /// and swallowed.
    pub fn stop(&mut self) {
        match self.state {
            State::Idle => {
                self.body = None;
                self.finish(Ending::Stopped, OnPanic::Swallow);
            }
            State::Running => {
                self.state = State::Draining;
                if let Some(session) = self.session.as_mut() {
                    if session.parked {
                        session.parked = false;
                        let _ = session.resume.send(Signal::Stop);
                    }
                }
                self.finish(Ending::Stopped, OnPanic::Swallow);
            }
            State::Draining | State::Done => {}
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Why the adapter finished, or `None` while pairs may still come.
    #[must_use]
    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    /// Whether the adapter has reached its terminal state.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    fn finish(&mut self, ending: Ending, on_panic: OnPanic) {
        self.state = State::Done;
        let Some(session) = self.session.take() else {
            self.ending = Some(ending);
            debug!(%ending, "pull session finished before starting");
            return;
        };

        let Session {
            pairs,
            resume,
            worker,
            ..
        } = session;
        drop(resume);
        drop(pairs);

        let joined = worker.join();
        let ending = if joined.is_ok() { ending } else { Ending::Failed };
        self.ending = Some(ending);
        debug!(%ending, "pull session finished");
        if let Err(payload) = joined {
            match on_panic {
                OnPanic::Resume => panic::resume_unwind(payload),
                OnPanic::Swallow => {
                    warn!(
                        reason = panic_message(payload.as_ref()),
                        "producer panicked while stopping"
                    );
                }
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "unknown panic"
    }
}

impl<K, V> Iterator for Pull<K, V>
where
    K: Send + 'static,
    V: Send + 'static,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}

impl<K, V> FusedIterator for Pull<K, V>
where
    K: Send + 'static,
    V: Send + 'static,
{
}

impl<K, V> Drop for Pull<K, V> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<K, V> fmt::Debug for Pull<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pull")
            .field("state", &self.state)
            .field("ending", &self.ending)
            .finish_non_exhaustive()
    }
}
