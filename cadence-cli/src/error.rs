//! Error types emitted by the Cadence CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use cadence_catalog::CatalogError;
use cadence_scorer::StrategyError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the Cadence CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag naming the input.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag naming the input.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag naming the input.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Loading the song catalog failed.
    #[error(transparent)]
    LoadCatalog(#[from] CatalogError),
    /// Reading the profiles file failed.
    #[error("failed to read profiles at {path:?}: {source}")]
    ReadProfiles {
        /// Profiles file path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The profiles file is not a profile or a list of named profiles.
    #[error("failed to parse profiles JSON at {path:?}: {source}")]
    ParseProfiles {
        /// Profiles file path.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// Reading the strategies file failed.
    #[error("failed to read strategies at {path:?}: {source}")]
    ReadStrategies {
        /// Strategies file path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The strategies file is not a list of strategies.
    #[error("failed to parse strategies JSON at {path:?}: {source}")]
    ParseStrategies {
        /// Strategies file path.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// A strategy in the strategies file failed validation.
    #[error("invalid strategy in {path:?}: {source}")]
    InvalidStrategy {
        /// Strategies file path.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: StrategyError,
    },
    /// Serializing a JSON report failed.
    #[error("failed to serialize report: {0}")]
    SerializeReport(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
