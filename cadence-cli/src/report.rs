//! Text and JSON rendering of command output.

use std::io::Write;

use cadence_core::ScoredSong;
use cadence_scorer::{Strategy, StrategyRegistry};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::CliError;

const RULE: &str = "========================================";

/// Output format shared by every subcommand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ReportFormat {
    /// Human-readable blocks.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Recommendations for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ProfileReport {
    pub(crate) profile: String,
    pub(crate) strategy: String,
    pub(crate) recommendations: Vec<RecommendationView>,
}

/// One ranked song with its explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RecommendationView {
    pub(crate) id: u64,
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) score: f64,
    pub(crate) reasons: Vec<String>,
}

impl ProfileReport {
    pub(crate) fn new(profile: &str, strategy: &str, ranked: &[ScoredSong<'_>]) -> Self {
        let recommendations = ranked
            .iter()
            .map(|scored| RecommendationView {
                id: scored.song.id,
                title: scored.song.title.clone(),
                artist: scored.song.artist.clone(),
                score: scored.score(),
                reasons: scored.reasons(),
            })
            .collect();
        Self {
            profile: profile.to_owned(),
            strategy: strategy.to_owned(),
            recommendations,
        }
    }
}

pub(crate) fn write_report(
    writer: &mut dyn Write,
    format: ReportFormat,
    songs_loaded: usize,
    reports: &[ProfileReport],
) -> Result<(), CliError> {
    match format {
        ReportFormat::Text => write_text_report(writer, songs_loaded, reports),
        ReportFormat::Json => write_json(writer, reports),
    }
}

fn write_text_report(
    writer: &mut dyn Write,
    songs_loaded: usize,
    reports: &[ProfileReport],
) -> Result<(), CliError> {
    writeln!(writer, "Loaded songs: {songs_loaded}").map_err(CliError::WriteOutput)?;
    for report in reports {
        writeln!(
            writer,
            "\nTop recommendations for {} ({}):\n",
            report.profile, report.strategy
        )
        .map_err(CliError::WriteOutput)?;
        for rec in &report.recommendations {
            writeln!(writer, "{} - Score: {:.2}", rec.title, rec.score)
                .map_err(CliError::WriteOutput)?;
            writeln!(writer, "Because: {}\n", rec.reasons.join(", "))
                .map_err(CliError::WriteOutput)?;
        }
        writeln!(writer, "{RULE}").map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

pub(crate) fn write_strategies(
    writer: &mut dyn Write,
    format: ReportFormat,
    registry: &StrategyRegistry,
) -> Result<(), CliError> {
    match format {
        ReportFormat::Text => {
            for strategy in registry.iter() {
                write_strategy_line(writer, strategy, registry.default_name())?;
            }
            Ok(())
        }
        ReportFormat::Json => {
            let strategies: Vec<&Strategy> = registry.iter().collect();
            write_json(writer, &strategies)
        }
    }
}

fn write_strategy_line(
    writer: &mut dyn Write,
    strategy: &Strategy,
    default_name: &str,
) -> Result<(), CliError> {
    let marker = if strategy.name == default_name {
        " (default)"
    } else {
        ""
    };
    let weights: Vec<String> = strategy
        .weights()
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    writeln!(writer, "{}{marker}: {}", strategy.name, weights.join(" "))
        .map_err(CliError::WriteOutput)
}

fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
