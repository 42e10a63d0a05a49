//! Constants for the bundled producers and the command-line driver.

/// Number of pairs the bounded random generator produces by default.
pub const LIMIT: usize = 10;

/// Exclusive upper bound of the random generator's value range.
pub const RANDOM_UPPER: u32 = 100;

/// Name given to the thread that hosts a pulled producer.
pub const PRODUCER_THREAD_NAME: &str = "pullseq-producer";

/// Exit codes for the CLI application.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
