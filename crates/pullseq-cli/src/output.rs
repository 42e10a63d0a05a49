//! CLI output formatting.

use std::fmt::Display;

use pullseq_core::SequenceEvent;

/// Format one pair as `key: value; `.
#[must_use]
pub fn format_pair(key: impl Display, value: impl Display) -> String {
    format!("{key}: {value}; ")
}

/// Format a `(key, value, ok)` triple as `key: value: ok; `.
#[must_use]
pub fn format_triple(key: impl Display, value: impl Display, ok: bool) -> String {
    format!("{key}: {value}: {ok}; ")
}

/// Message printed for a producer's terminal event.
#[must_use]
pub fn format_event(event: &SequenceEvent) -> &'static str {
    match event {
        SequenceEvent::LimitReached { .. } => "Limit reached",
        SequenceEvent::ReceivedStop { .. } => "Received stop",
    }
}

/// How the line-reading consumer treats one pulled line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineVerdict {
    /// Ordinary line, keep reading.
    Read,
    /// Line carries the stop marker; stop after printing it.
    Stop,
    /// Error pair.
    Error,
}

impl LineVerdict {
    /// Classify a successfully read line against the stop marker.
    #[must_use]
    pub fn classify(line: &str, marker: &str) -> Self {
        if !marker.is_empty() && line.contains(marker) {
            Self::Stop
        } else {
            Self::Read
        }
    }

    /// Prefix printed before the line text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Read => "Read line",
            Self::Stop => "Stop",
            Self::Error => "Error",
        }
    }
}

/// Format a classified line as `Label: text`.
#[must_use]
pub fn format_line(verdict: LineVerdict, text: &str) -> String {
    format!("{}: {text}", verdict.label())
}
