//! Command-line interface for ranking songs with Cadence.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod error;
mod profiles;
mod recommend;
mod report;
mod strategies;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend, run_recommend_with};
use strategies::{StrategiesArgs, run_strategies, run_strategies_with};

const ARG_RECOMMEND_PROFILES: &str = "profiles";
const ARG_RECOMMEND_CATALOG: &str = "catalog";
const ARG_RECOMMEND_STRATEGIES: &str = "strategies";
const ARG_STRATEGIES_FILE: &str = "strategies";

/// Run the Cadence CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration merging, input
/// loading, or writing the report fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Strategies(args) => run_strategies(args),
    }
}

/// Run the CLI for an explicit argument vector, writing output to `writer`.
///
/// # Errors
/// Returns [`CliError`] on the same conditions as [`run`].
pub fn run_from<I, T>(argv: I, writer: &mut dyn Write) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::try_parse_from(argv)?;
    match cli.command {
        Command::Recommend(args) => run_recommend_with(args, writer),
        Command::Strategies(args) => run_strategies_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "cadence",
    about = "Content-based song recommendations from a CSV catalog",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the catalog for each listener profile.
    Recommend(RecommendArgs),
    /// List the available scoring strategies.
    Strategies(StrategiesArgs),
}

#[cfg(test)]
mod tests;
