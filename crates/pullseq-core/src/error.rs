//! Errors carried as data inside produced pairs.

use std::io;
use std::path::PathBuf;

/// Error reported by a producer whose underlying resource failed.
///
/// Producers never return this from `run`; they hand it to the consumer as
/// the value half of a single sentinel pair and then stop.
#[derive(Debug, thiserror::Error)]
pub enum SeqError {
    /// The input resource could not be opened.
    #[error("open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from an already open resource failed.
    #[error("read line: {source}")]
    Read {
        #[source]
        source: io::Error,
    },
}

impl SeqError {
    /// The underlying I/O error kind.
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Open { source, .. } | Self::Read { source } => source.kind(),
        }
    }
}
