//! Line-oriented readers.
//!
//! Both producers emit `(line, None)` per line with the terminator stripped,
//! or a single `("", Some(err))` sentinel on failure, after which they stop.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SeqError;
use crate::sequence::Sequence;

/// Pair type produced by the line readers.
pub type LinePair = (String, Option<SeqError>);

/// Reads lines from a file opened when the producer starts running.
///
/// The file stays open only while `run` executes and is closed on every exit
/// path.
#[derive(Debug, Clone)]
pub struct FileLines {
    path: PathBuf,
}

impl FileLines {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sequence for FileLines {
    type Key = String;
    type Value = Option<SeqError>;

    fn run(self, yield_: &mut dyn FnMut(String, Option<SeqError>) -> bool) {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(source) => {
                let _ = yield_(
                    String::new(),
                    Some(SeqError::Open {
                        path: self.path,
                        source,
                    }),
                );
                return;
            }
        };
        debug!(path = %self.path.display(), "opened input");
        read_lines(BufReader::new(file), yield_);
    }
}

/// Reads lines from any buffered reader.
pub struct Lines<R> {
    reader: R,
}

impl<R> Lines<R>
where
    R: BufRead + Send + 'static,
{
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R> Sequence for Lines<R>
where
    R: BufRead + Send + 'static,
{
    type Key = String;
    type Value = Option<SeqError>;

    fn run(self, yield_: &mut dyn FnMut(String, Option<SeqError>) -> bool) {
        read_lines(self.reader, yield_);
    }
}

fn read_lines<R: BufRead>(
    mut reader: R,
    yield_: &mut dyn FnMut(String, Option<SeqError>) -> bool,
) {
    let mut buf = String::new();
    loop {
        buf.clear();
        match reader.read_line(&mut buf) {
            Ok(0) => return,
            Ok(_) => {
                let line = strip_terminator(&buf).to_owned();
                if !yield_(line, None) {
                    return;
                }
            }
            Err(source) => {
                let _ = yield_(String::new(), Some(SeqError::Read { source }));
                return;
            }
        }
    }
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Read, Write};

    use super::*;

    fn collect(seq: impl Sequence<Key = String, Value = Option<SeqError>>) -> Vec<LinePair> {
        seq.pull().collect()
    }

    #[test]
    fn strips_line_terminators() {
        assert_eq!(strip_terminator("abc\n"), "abc");
        assert_eq!(strip_terminator("abc\r\n"), "abc");
        assert_eq!(strip_terminator("abc"), "abc");
        assert_eq!(strip_terminator("\n"), "");
    }

    #[test]
    fn reads_every_line() {
        let pairs = collect(Lines::new(Cursor::new("one\ntwo\r\n\nlast")));
        let lines: Vec<&str> = pairs.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(lines, ["one", "two", "", "last"]);
        assert!(pairs.iter().all(|(_, e)| e.is_none()));
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(collect(Lines::new(Cursor::new(""))).is_empty());
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let pairs = collect(Lines::new(Cursor::new(b"ok\n\xff\xfe\nafter\n".to_vec())));
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0, "ok");
        assert!(pairs[1].0.is_empty());
        assert!(matches!(pairs[1].1, Some(SeqError::Read { .. })));
    }

    struct FailAfterFirstLine {
        served: bool,
    }

    impl Read for FailAfterFirstLine {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::new(io::ErrorKind::Other, "disk on fire"));
            }
            self.served = true;
            let line = b"first\n";
            buf[..line.len()].copy_from_slice(line);
            Ok(line.len())
        }
    }

    #[test]
    fn read_failure_yields_single_error_pair() {
        let reader = BufReader::new(FailAfterFirstLine { served: false });
        let pairs = collect(Lines::new(reader));
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0, "first");
        let err = pairs[1].1.as_ref().expect("error pair");
        assert_eq!(err.to_string(), "read line: disk on fire");
    }

    #[test]
    fn missing_file_yields_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let mut pull = FileLines::new(&path).pull();
        let (line, err) = pull.next().expect("one error pair");
        assert!(line.is_empty());
        assert!(matches!(err, Some(SeqError::Open { .. })));
        assert_eq!(err.unwrap().kind(), io::ErrorKind::NotFound);
        assert!(pull.next().is_none());
        assert!(pull.next().is_none());
    }

    #[test]
    fn reads_file_and_stops_early() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alpha").unwrap();
        writeln!(file, "beta").unwrap();
        writeln!(file, "gamma").unwrap();

        let mut pull = FileLines::new(file.path()).pull();
        assert_eq!(pull.next().map(|(l, _)| l), Some("alpha".to_string()));
        pull.stop();
        assert!(pull.next().is_none());
    }

    #[test]
    fn path_accessor() {
        assert_eq!(FileLines::new("a/b.txt").path(), Path::new("a/b.txt"));
    }
}
