//! Application entry point and scenario dispatch.

use std::collections::BTreeMap;
use std::ops::ControlFlow;
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use pullseq_cli::output::LineVerdict;
use pullseq_cli::presenter::{ConsolePresenter, ScenarioPresenter};
use pullseq_core::{Entries, FileLines, Indexed, RandomValues, Sequence, SequenceObserver};

use crate::config::{AppConfig, Scenario};

/// Run the application, writing to standard output.
pub fn run(config: &AppConfig) -> Result<()> {
    let presenter = Arc::new(ConsolePresenter::stdout());
    run_with(config, &presenter)
}

/// Run the selected scenarios against the given presenter.
///
/// The presenter doubles as the observer of the random generator so its
/// terminal events land in the same output stream.
pub fn run_with<P>(config: &AppConfig, presenter: &Arc<P>) -> Result<()>
where
    P: ScenarioPresenter + SequenceObserver + 'static,
{
    config.validate()?;

    if config.runs(Scenario::Slice) {
        run_slice(presenter.as_ref());
    }
    if config.runs(Scenario::Map) {
        run_map(presenter.as_ref());
    }
    if config.runs(Scenario::Range) {
        run_range(config, presenter);
    }
    if config.runs(Scenario::Pull) {
        run_pull(config, presenter);
    }
    if config.runs(Scenario::EarlyStop) {
        run_early_stop(config, presenter);
    }
    if config.runs(Scenario::File) {
        run_file(config, presenter.as_ref());
    }
    Ok(())
}

fn random_values<P>(config: &AppConfig, presenter: &Arc<P>) -> RandomValues
where
    P: SequenceObserver + 'static,
{
    let observer: Arc<dyn SequenceObserver> = presenter.clone();
    let gen = RandomValues::new()
        .with_limit(config.limit)
        .with_observer(observer);
    match config.seed {
        Some(seed) => gen.with_seed(seed),
        None => gen,
    }
}

fn run_slice(presenter: &dyn ScenarioPresenter) {
    presenter.heading("Slice: indexed pairs of a vector");
    let letters = Indexed::new(vec!["a", "b", "c", "d", "e", "f", "g", "h"]);
    letters.for_each_pair(|i, s| {
        presenter.pair(&i, &s);
        ControlFlow::Continue(())
    });
    presenter.end_line();
}

fn run_map(presenter: &dyn ScenarioPresenter) {
    presenter.heading("Map: entries of an ordered map");
    let vendors = Entries::new(BTreeMap::from([
        ("Apple", "United States"),
        ("Samsung", "South Korea"),
        ("Xiaomi", "China"),
    ]));
    vendors.for_each_pair(|k, v| {
        presenter.pair(&k, &v);
        ControlFlow::Continue(())
    });
    presenter.end_line();
}

fn run_range<P>(config: &AppConfig, presenter: &Arc<P>)
where
    P: ScenarioPresenter + SequenceObserver + 'static,
{
    presenter.heading("Range: random generator driven push style");
    let ending = random_values(config, presenter).for_each_pair(|i, v| {
        presenter.pair(&i, &v);
        ControlFlow::Continue(())
    });
    presenter.end_line();
    debug!(%ending, "range scenario finished");
}

fn run_pull<P>(config: &AppConfig, presenter: &Arc<P>)
where
    P: ScenarioPresenter + SequenceObserver + 'static,
{
    presenter.heading("Pull: random generator pulled to exhaustion");
    let mut pull = random_values(config, presenter).pull();
    loop {
        let (i, v, ok) = pull.next_or_default();
        if !ok {
            break;
        }
        presenter.pair(&i, &v);
    }
    presenter.end_line();

    presenter.heading("Pull: one more time");
    let (i, v, ok) = pull.next_or_default();
    presenter.triple(&i, &v, ok);
    debug!(ending = ?pull.ending(), "pull scenario finished");
}

fn run_early_stop<P>(config: &AppConfig, presenter: &Arc<P>)
where
    P: ScenarioPresenter + SequenceObserver + 'static,
{
    presenter.heading("Early stop: random generator stopped by the consumer");
    let mut pull = random_values(config, presenter).pull();
    for _ in 0..config.stop_after {
        let Some((i, v)) = pull.next() else {
            break;
        };
        presenter.pair(&i, &v);
    }
    pull.stop();
    presenter.end_line();

    presenter.heading("Early stop: pull one more time");
    let (i, v, ok) = pull.next_or_default();
    presenter.triple(&i, &v, ok);

    presenter.heading("Early stop: stop one more time");
    pull.stop();
    presenter.message("OK");
    debug!(ending = ?pull.ending(), "early-stop scenario finished");
}

fn run_file(config: &AppConfig, presenter: &dyn ScenarioPresenter) {
    presenter.heading("File: read lines until the stop marker");
    let mut pull = FileLines::new(&config.file).pull();
    let mut delivered = 0usize;
    while let Some((line, err)) = pull.next() {
        delivered += 1;
        if let Some(err) = err {
            presenter.line(LineVerdict::Error, &err.to_string());
            continue;
        }
        let verdict = LineVerdict::classify(&line, &config.stop_marker);
        presenter.line(verdict, &line);
        if verdict == LineVerdict::Stop {
            pull.stop();
        }
    }
    info!(path = %config.file.display(), delivered, ending = ?pull.ending(), "file scenario finished");
}
