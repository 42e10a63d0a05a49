//! Cross-crate scenario tests for PullSeq live in `tests/`.
