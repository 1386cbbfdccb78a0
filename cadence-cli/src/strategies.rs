//! Strategies command and strategy file loading.

use std::io::Write;

use cadence_catalog::fs::read_to_string;
use cadence_scorer::{Strategy, StrategyRegistry};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::recommend::require_existing;
use crate::report::{ReportFormat, write_strategies};
use crate::{ARG_STRATEGIES_FILE, CliError};

/// CLI arguments for the `strategies` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "strategies",
    about = "List the scoring strategies and their weights"
)]
#[ortho_config(prefix = "CADENCE")]
pub(crate) struct StrategiesArgs {
    /// JSON file with extra strategies to register alongside the built-ins.
    #[arg(long = ARG_STRATEGIES_FILE, value_name = "path")]
    #[serde(default)]
    pub(crate) strategies: Option<Utf8PathBuf>,
    /// Output format.
    #[arg(long = "format", value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<ReportFormat>,
}

/// Resolved `strategies` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StrategiesConfig {
    pub(crate) strategies: Option<Utf8PathBuf>,
    pub(crate) format: ReportFormat,
}

impl From<StrategiesArgs> for StrategiesConfig {
    fn from(args: StrategiesArgs) -> Self {
        Self {
            strategies: args.strategies,
            format: args.format.unwrap_or_default(),
        }
    }
}

pub(super) fn run_strategies(args: StrategiesArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_strategies_with(args, &mut stdout)
}

pub(super) fn run_strategies_with(
    args: StrategiesArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = StrategiesConfig::from(merged);
    if let Some(path) = &config.strategies {
        require_existing(path, ARG_STRATEGIES_FILE)?;
    }
    let registry = load_registry(config.strategies.as_deref())?;
    write_strategies(writer, config.format, &registry)
}

/// Built-in registry extended with the strategies in `path`, if any.
///
/// Strategies named like a built-in replace it.
pub(crate) fn load_registry(path: Option<&Utf8Path>) -> Result<StrategyRegistry, CliError> {
    let registry = StrategyRegistry::builtin();
    let Some(file) = path else {
        return Ok(registry);
    };
    let text = read_to_string(file).map_err(|source| CliError::ReadStrategies {
        path: file.to_path_buf(),
        source,
    })?;
    let extra: Vec<Strategy> =
        serde_json::from_str(&text).map_err(|source| CliError::ParseStrategies {
            path: file.to_path_buf(),
            source,
        })?;
    debug!("registering {} strategies from {file}", extra.len());
    registry
        .with_strategies(extra)
        .map_err(|source| CliError::InvalidStrategy {
            path: file.to_path_buf(),
            source,
        })
}
