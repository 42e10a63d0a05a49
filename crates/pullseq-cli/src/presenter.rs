//! Console presenter for scenario output.

use std::fmt::Display;
use std::io::{self, Write};

use parking_lot::Mutex;
use pullseq_core::{SequenceEvent, SequenceObserver};

use crate::output::{format_event, format_line, format_pair, format_triple, LineVerdict};

/// Trait for presenting scenario progress to the user.
pub trait ScenarioPresenter: Send + Sync {
    /// Start a new scenario section.
    fn heading(&self, title: &str);

    /// Present one pulled pair inline.
    fn pair(&self, key: &dyn Display, value: &dyn Display);

    /// Present a raw `(key, value, ok)` triple on its own line.
    fn triple(&self, key: &dyn Display, value: &dyn Display, ok: bool);

    /// Present a classified line from a line reader.
    fn line(&self, verdict: LineVerdict, text: &str);

    /// Present a free-standing message line.
    fn message(&self, text: &str);

    /// Terminate the current output line.
    fn end_line(&self);
}

/// Presenter writing plain text to a sink, stdout by default.
///
/// Also acts as a [`SequenceObserver`] so producers can print their terminal
/// events into the same stream.
pub struct ConsolePresenter {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsolePresenter {
    /// Presenter writing to the given sink.
    #[must_use]
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Presenter writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    fn write(&self, text: &str) {
        let mut out = self.out.lock();
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            tracing::debug!(error = %e, "console write failed");
        }
    }
}

impl ScenarioPresenter for ConsolePresenter {
    fn heading(&self, title: &str) {
        self.write(&format!("\n{title}\n"));
    }

    fn pair(&self, key: &dyn Display, value: &dyn Display) {
        self.write(&format_pair(key, value));
    }

    fn triple(&self, key: &dyn Display, value: &dyn Display, ok: bool) {
        self.write(&format!("{}\n", format_triple(key, value, ok)));
    }

    fn line(&self, verdict: LineVerdict, text: &str) {
        self.write(&format!("{}\n", format_line(verdict, text)));
    }

    fn message(&self, text: &str) {
        self.write(&format!("{text}\n"));
    }

    fn end_line(&self) {
        self.write("\n");
    }
}

impl SequenceObserver for ConsolePresenter {
    fn on_event(&self, event: &SequenceEvent) {
        self.write(format_event(event));
    }
}
