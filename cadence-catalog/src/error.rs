//! Errors raised while loading a song catalog.

use camino::Utf8PathBuf;
use cadence_core::SongError;
use thiserror::Error;

/// Errors raised while reading a catalog from CSV.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be opened.
    #[error("failed to open catalog at {path}: {source}")]
    OpenCatalog {
        /// Path that failed to open.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The header row could not be read.
    #[error("failed to read catalog header: {source}")]
    ReadHeader {
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
    /// A required column is absent from the header row.
    #[error("catalog is missing required column `{column}`")]
    MissingColumn {
        /// Name of the absent column.
        column: &'static str,
    },
    /// A row could not be decoded into a song.
    #[error("failed to parse catalog row on line {line}: {source}")]
    ParseRow {
        /// One-based line number of the row.
        line: u64,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
    /// A row decoded but holds out-of-range values.
    #[error("song {id} on line {line} is invalid: {source}")]
    InvalidSong {
        /// One-based line number of the row.
        line: u64,
        /// Identifier of the offending song.
        id: u64,
        /// Validation failure.
        #[source]
        source: SongError,
    },
}
