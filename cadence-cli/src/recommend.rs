//! Recommend command implementation for the Cadence CLI.

use std::io::Write;

use cadence_catalog::{fs::file_is_file, load_catalog};
use cadence_scorer::{DEFAULT_STRATEGY, StrategyRegistry, recommend_catalog};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::profiles::{NamedProfile, load_profiles};
use crate::report::{ProfileReport, ReportFormat, write_report};
use crate::strategies::load_registry;
use crate::{
    ARG_RECOMMEND_CATALOG, ARG_RECOMMEND_PROFILES, ARG_RECOMMEND_STRATEGIES, CliError,
};

/// Number of recommendations printed per profile unless overridden.
pub(crate) const DEFAULT_TOP: usize = 5;

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Rank a song catalog for one or more listener profiles. \
                 The catalog is a headed CSV; profiles are JSON, either a \
                 single profile object or an array of {name, profile} \
                 entries. Paths default to files inside the data directory.",
    about = "Recommend songs for listener profiles"
)]
#[ortho_config(prefix = "CADENCE")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file with one profile or a list of named profiles.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) profiles: Option<Utf8PathBuf>,
    /// Directory containing `songs.csv` and `profiles.json`.
    #[arg(long = "data-dir", value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Override the path to the song catalog CSV.
    #[arg(long = ARG_RECOMMEND_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Strategy used to rank songs; unknown names fall back to the default.
    #[arg(long = "strategy", value_name = "name")]
    #[serde(default)]
    pub(crate) strategy: Option<String>,
    /// JSON file with extra strategies to register alongside the built-ins.
    #[arg(long = ARG_RECOMMEND_STRATEGIES, value_name = "path")]
    #[serde(default)]
    pub(crate) strategies: Option<Utf8PathBuf>,
    /// Number of recommendations per profile.
    #[arg(short = 'k', long = "top", value_name = "count")]
    #[serde(default)]
    pub(crate) top: Option<usize>,
    /// Output format.
    #[arg(long = "format", value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<ReportFormat>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(RecommendConfig::from(merged))
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) profiles: Utf8PathBuf,
    pub(crate) catalog: Utf8PathBuf,
    pub(crate) strategy: String,
    pub(crate) strategies: Option<Utf8PathBuf>,
    pub(crate) top: usize,
    pub(crate) format: ReportFormat,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.profiles, ARG_RECOMMEND_PROFILES)?;
        require_existing(&self.catalog, ARG_RECOMMEND_CATALOG)?;
        if let Some(path) = &self.strategies {
            require_existing(path, ARG_RECOMMEND_STRATEGIES)?;
        }
        Ok(())
    }
}

impl From<RecommendArgs> for RecommendConfig {
    fn from(args: RecommendArgs) -> Self {
        let data_dir = args.data_dir.unwrap_or_else(|| Utf8PathBuf::from("."));
        let profiles = args
            .profiles
            .unwrap_or_else(|| data_dir.join("profiles.json"));
        let catalog = args.catalog.unwrap_or_else(|| data_dir.join("songs.csv"));
        Self {
            profiles,
            catalog,
            strategy: args
                .strategy
                .unwrap_or_else(|| DEFAULT_STRATEGY.to_owned()),
            strategies: args.strategies,
            top: args.top.unwrap_or(DEFAULT_TOP),
            format: args.format.unwrap_or_default(),
        }
    }
}

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_recommend_config(args)?;
    execute_recommend(&config, writer)
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(super) fn execute_recommend(
    config: &RecommendConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let registry = load_registry(config.strategies.as_deref())?;
    let catalog = load_catalog(&config.catalog)?;
    let profiles = load_profiles(&config.profiles)?;
    info!(
        "ranking {} songs for {} profiles",
        catalog.len(),
        profiles.len()
    );

    let reports = build_reports(&registry, &config.strategy, &catalog, &profiles, config.top);
    write_report(writer, config.format, catalog.len(), &reports)
}

fn build_reports(
    registry: &StrategyRegistry,
    strategy_name: &str,
    catalog: &cadence_core::Catalog,
    profiles: &[NamedProfile],
    top: usize,
) -> Vec<ProfileReport> {
    let strategy = registry.resolve(strategy_name);
    profiles
        .iter()
        .map(|named| {
            let ranked = recommend_catalog(&named.profile, catalog, strategy, top);
            ProfileReport::new(&named.name, &strategy.name, &ranked)
        })
        .collect()
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    Ok(RecommendConfig::from(merged))
}
