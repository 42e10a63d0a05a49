//! Scenario integration tests.
//!
//! Drives the bundled producers through the pull adapter the way a consumer
//! program would, covering full drains, early stops, the stop-marker line
//! reader and open failures.

use std::io::Write;
use std::sync::Arc;

use pullseq_core::{
    Ending, FileLines, Pull, RandomValues, RecordingObserver, SeqError, Sequence, SequenceEvent,
    State,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn recorded_generator(limit: usize) -> (RandomValues, Arc<RecordingObserver>) {
    let recorder = Arc::new(RecordingObserver::new());
    let gen = RandomValues::new()
        .with_limit(limit)
        .with_seed(2024)
        .with_observer(recorder.clone());
    (gen, recorder)
}

fn write_lines(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file
}

// ---------------------------------------------------------------------------
// Bounded generator
// ---------------------------------------------------------------------------

#[test]
fn full_drain_delivers_ten_pairs_then_stops_reporting() {
    let (gen, recorder) = recorded_generator(10);
    let mut pull = gen.pull();

    for expected in 0..10 {
        let (index, value, ok) = pull.next_or_default();
        assert!(ok, "pair {expected} missing");
        assert_eq!(index, expected);
        assert!(value < 100);
    }
    assert_eq!(pull.next_or_default(), (0, 0, false));
    assert_eq!(pull.next_or_default(), (0, 0, false));

    assert_eq!(pull.ending(), Some(Ending::Exhausted));
    assert_eq!(
        recorder.events(),
        [SequenceEvent::LimitReached { produced: 10 }]
    );
}

#[test]
fn early_stop_after_five_pairs() {
    let (gen, recorder) = recorded_generator(10);
    let mut pull = gen.pull();

    let delivered: Vec<usize> = (0..5).filter_map(|_| pull.next()).map(|(i, _)| i).collect();
    assert_eq!(delivered, [0, 1, 2, 3, 4]);

    pull.stop();
    assert_eq!(pull.next_or_default(), (0, 0, false));
    pull.stop();
    assert_eq!(pull.next(), None);

    assert_eq!(pull.state(), State::Done);
    assert_eq!(pull.ending(), Some(Ending::Stopped));
    assert_eq!(
        recorder.events(),
        [SequenceEvent::ReceivedStop { produced: 5 }]
    );
}

#[test]
fn stop_without_demand_never_starts_generator() {
    let (gen, recorder) = recorded_generator(10);
    let mut pull = gen.pull();
    pull.stop();
    pull.stop();
    assert_eq!(pull.next(), None);
    assert!(recorder.is_empty());
}

#[test]
fn seeded_pull_matches_seeded_push() {
    let (gen, _) = recorded_generator(10);
    let pulled: Vec<(usize, u32)> = gen.clone().pull().collect();

    let mut pushed = Vec::new();
    gen.for_each_pair(|i, v| {
        pushed.push((i, v));
        std::ops::ControlFlow::Continue(())
    });
    assert_eq!(pulled, pushed);
}

// ---------------------------------------------------------------------------
// Line reader
// ---------------------------------------------------------------------------

#[test]
fn line_reader_stops_on_marker() {
    let file = write_lines(&[
        "Lorem ipsum dolor sit amet",
        "Donec malesuada suscipit nulla, STOP HERE",
        "Should never be read",
    ]);
    let mut pull = FileLines::new(file.path()).pull();
    let mut seen = Vec::new();

    while let Some((line, err)) = pull.next() {
        assert!(err.is_none());
        let stop = line.contains("STOP");
        seen.push(line);
        if stop {
            pull.stop();
        }
    }

    assert_eq!(
        seen,
        [
            "Lorem ipsum dolor sit amet",
            "Donec malesuada suscipit nulla, STOP HERE"
        ]
    );
    assert_eq!(pull.ending(), Some(Ending::Stopped));
}

#[test]
fn line_reader_without_marker_reads_to_end() {
    let file = write_lines(&["one", "two", "three"]);
    let lines: Vec<String> = FileLines::new(file.path())
        .pull()
        .map(|(line, _)| line)
        .collect();
    assert_eq!(lines, ["one", "two", "three"]);
}

#[test]
fn missing_file_yields_single_error_pair() {
    let dir = tempfile::tempdir().unwrap();
    let mut pull: Pull<String, Option<SeqError>> =
        FileLines::new(dir.path().join("does-not-exist.txt")).pull();

    let (line, err, ok) = pull.next_or_default();
    assert!(ok);
    assert!(line.is_empty());
    let err = err.expect("error indicator");
    assert!(err.to_string().starts_with("open "));

    for _ in 0..3 {
        let (line, err, ok) = pull.next_or_default();
        assert!(!ok);
        assert!(line.is_empty());
        assert!(err.is_none());
    }
    assert_eq!(pull.ending(), Some(Ending::Exhausted));
}
