//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pullseq_core::constants::LIMIT;

use crate::errors::AppError;

/// Scenario to run.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Every scenario in order.
    All,
    /// Indexed pairs of a vector, push style.
    Slice,
    /// Entries of an ordered map, push style.
    Map,
    /// Random generator driven push style.
    Range,
    /// Random generator pulled to exhaustion, then pulled once more.
    Pull,
    /// Random generator stopped early, then pulled and stopped again.
    EarlyStop,
    /// Line reader stopped on the marker line.
    File,
}

/// PullSeq — pull pairs out of push-style producers.
#[derive(Parser, Debug)]
#[command(name = "pullseq", version, about)]
pub struct AppConfig {
    /// Scenario to run.
    #[arg(short, long, value_enum, default_value_t = Scenario::All)]
    pub scenario: Scenario,

    /// Input file for the line reader.
    #[arg(short, long, default_value = "./dump.txt", env = "PULLSEQ_FILE")]
    pub file: PathBuf,

    /// Number of pairs the random generator produces.
    #[arg(long, default_value_t = LIMIT)]
    pub limit: usize,

    /// Pairs pulled before stopping in the early-stop scenario.
    #[arg(long, default_value_t = 5)]
    pub stop_after: usize,

    /// Seed for reproducible random values.
    #[arg(long, env = "PULLSEQ_SEED")]
    pub seed: Option<u64>,

    /// Text that makes the line reader consumer stop.
    #[arg(long, default_value = "STOP")]
    pub stop_marker: String,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Check values clap cannot check on its own.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.stop_marker.is_empty() {
            return Err(AppError::Config("stop marker must not be empty".into()));
        }
        Ok(())
    }

    /// Whether `scenario` is selected by this configuration.
    #[must_use]
    pub fn runs(&self, scenario: Scenario) -> bool {
        self.scenario == Scenario::All || self.scenario == scenario
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("pullseq").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.scenario, Scenario::All);
        assert_eq!(config.limit, 10);
        assert_eq!(config.stop_after, 5);
        assert_eq!(config.stop_marker, "STOP");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn scenario_names_are_kebab_case() {
        assert_eq!(parse(&["--scenario", "early-stop"]).scenario, Scenario::EarlyStop);
        assert_eq!(parse(&["-s", "file"]).scenario, Scenario::File);
        assert!(AppConfig::try_parse_from(["pullseq", "--scenario", "bogus"]).is_err());
    }

    #[test]
    fn runs_selection() {
        let all = parse(&[]);
        assert!(all.runs(Scenario::Map));
        let one = parse(&["--scenario", "pull"]);
        assert!(one.runs(Scenario::Pull));
        assert!(!one.runs(Scenario::File));
    }

    #[test]
    fn empty_marker_rejected() {
        let config = parse(&["--stop-marker", ""]);
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn seed_and_limit() {
        let config = parse(&["--seed", "9", "--limit", "3"]);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.limit, 3);
    }
}
