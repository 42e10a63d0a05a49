//! Error handling and exit codes.

use pullseq_core::constants::exit_codes;

/// Errors raised by the application before any scenario runs.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Invalid command-line configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Map an application error to the process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<AppError>() {
        Some(AppError::Config(_)) => exit_codes::ERROR_CONFIG,
        None => exit_codes::ERROR_GENERIC,
    }
}

/// Map the outcome of a run to the process exit code.
#[must_use]
pub fn exit_status(outcome: &anyhow::Result<()>) -> i32 {
    match outcome {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => exit_code(err),
    }
}
