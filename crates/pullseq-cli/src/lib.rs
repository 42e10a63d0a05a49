//! # pullseq-cli
//!
//! Console presentation of pulled pairs and producer events.

pub mod output;
pub mod presenter;

pub use presenter::{ConsolePresenter, ScenarioPresenter};
