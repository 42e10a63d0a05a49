//! PullSeq — demonstrates pulling pairs out of push-style producers.

use pullseq_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    // Initialize tracing
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let outcome = app::run(&config);
    if let Err(err) = &outcome {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(errors::exit_status(&outcome));
}
