//! PullSeq library — scenario driver for push-to-pull iteration.

pub mod app;
pub mod config;
pub mod errors;
