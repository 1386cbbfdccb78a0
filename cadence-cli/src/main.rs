//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use cadence_cli::CliError;
use log::error;
use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "CADENCE_LOG";

fn main() -> ExitCode {
    init_logging();
    match cadence_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Install a stderr `fmt` subscriber that also receives `log` records.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();
    if let Err(err) = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
    {
        // An existing global subscriber stays in charge.
        log::debug!("logging already initialised: {err}");
    }
}
