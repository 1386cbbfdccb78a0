//! CSV catalog source for Cadence.
//!
//! A catalog file is a headed CSV with one song per row:
//!
//! ```text
//! id,title,artist,genre,mood,energy,tempo_bpm,valence,danceability,acousticness
//! 1,Sunrise City,Neon Echo,pop,happy,0.82,118,0.84,0.79,0.18
//! ```
//!
//! Columns are matched by header name, so their order is free and extra
//! columns are ignored. Fields are trimmed. `tempo_bpm` accepts integer or
//! real text. Every row is validated before the [`Catalog`] is returned.
//!
//! # Examples
//!
//! ```
//! use cadence_catalog::read_catalog;
//!
//! let csv = "id,title,artist,genre,mood,energy,tempo_bpm,valence,danceability,acousticness\n\
//!            1,Sunrise City,Neon Echo,pop,happy,0.82,118,0.84,0.79,0.18\n";
//! let catalog = read_catalog(csv.as_bytes()).expect("valid catalog");
//! assert_eq!(catalog.len(), 1);
//! ```

#![forbid(unsafe_code)]

use std::io::Read;

use cadence_core::{Catalog, Song};
use camino::Utf8Path;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;

mod error;
pub mod fs;

pub use error::CatalogError;

/// Header names a catalog must provide.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "id",
    "title",
    "artist",
    "genre",
    "mood",
    "energy",
    "tempo_bpm",
    "valence",
    "danceability",
    "acousticness",
];

/// Read and validate a catalog from any CSV byte stream.
///
/// # Errors
/// Returns [`CatalogError::MissingColumn`] for the first required header
/// that is absent, [`CatalogError::ParseRow`] when a row cannot be decoded,
/// and [`CatalogError::InvalidSong`] when a decoded row is out of range.
pub fn read_catalog<R: Read>(source: R) -> Result<Catalog, CatalogError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(source);
    let headers = reader
        .headers()
        .map_err(|source| CatalogError::ReadHeader { source })?
        .clone();
    check_columns(&headers)?;

    let mut songs = Vec::new();
    let mut lines = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let fallback_line = row_line(index);
        let record = result.map_err(|source| CatalogError::ParseRow {
            line: source
                .position()
                .map_or(fallback_line, csv::Position::line),
            source,
        })?;
        let line = record
            .position()
            .map_or(fallback_line, csv::Position::line);
        let song: Song = record
            .deserialize(Some(&headers))
            .map_err(|source| CatalogError::ParseRow { line, source })?;
        songs.push(song);
        lines.push(line);
    }

    Catalog::new(songs).map_err(|err| CatalogError::InvalidSong {
        line: lines.get(err.position).copied().unwrap_or_default(),
        id: err.id,
        source: err.source,
    })
}

/// Open and read a catalog file.
///
/// # Errors
/// Returns [`CatalogError::OpenCatalog`] when the file cannot be opened and
/// otherwise the errors of [`read_catalog`].
pub fn load_catalog(path: &Utf8Path) -> Result<Catalog, CatalogError> {
    let file = fs::open_utf8_file(path).map_err(|source| CatalogError::OpenCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = read_catalog(file)?;
    debug!("loaded {} songs from {path}", catalog.len());
    Ok(catalog)
}

fn check_columns(headers: &StringRecord) -> Result<(), CatalogError> {
    REQUIRED_COLUMNS
        .into_iter()
        .find(|column| !headers.iter().any(|header| header == *column))
        .map_or(Ok(()), |column| Err(CatalogError::MissingColumn { column }))
}

/// One-based line of the `index`th data row, assuming no embedded newlines.
fn row_line(index: usize) -> u64 {
    u64::try_from(index).map_or(u64::MAX, |row| row.saturating_add(2))
}
