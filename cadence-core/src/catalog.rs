//! Validated, immutable song catalogs.

use thiserror::Error;

use crate::{Song, SongError, TempoBounds};

/// An ordered collection of validated songs.
///
/// Order is significant: ranking ties keep catalog order.
///
/// # Examples
/// ```
/// use cadence_core::Catalog;
///
/// let catalog = Catalog::empty();
/// assert!(catalog.is_empty());
/// assert!(catalog.tempo_bounds().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    songs: Vec<Song>,
}

/// Error returned by [`Catalog::new`] when a song fails validation.
#[derive(Debug, Error, PartialEq)]
#[error("song {id} at position {position} is invalid: {source}")]
pub struct CatalogValidationError {
    /// Zero-based position of the song in the input.
    pub position: usize,
    /// Identifier of the offending song.
    pub id: u64,
    /// Validation failure.
    #[source]
    pub source: SongError,
}

impl Catalog {
    /// Validate every song and construct the catalog.
    ///
    /// # Errors
    /// Returns [`CatalogValidationError`] for the first song whose numeric
    /// attributes are out of range.
    pub fn new(songs: Vec<Song>) -> Result<Self, CatalogValidationError> {
        for (position, song) in songs.iter().enumerate() {
            song.validate()
                .map_err(|source| CatalogValidationError {
                    position,
                    id: song.id,
                    source,
                })?;
        }
        Ok(Self { songs })
    }

    /// Construct a catalog without songs.
    #[must_use]
    pub const fn empty() -> Self {
        Self { songs: Vec::new() }
    }

    /// Songs in catalog order.
    #[must_use]
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Iterate over songs in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Song> {
        self.songs.iter()
    }

    /// Number of songs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Report whether the catalog has no songs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Tempo bounds across the catalog, or `None` when empty.
    #[must_use]
    pub fn tempo_bounds(&self) -> Option<TempoBounds> {
        TempoBounds::from_songs(&self.songs)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Song;
    type IntoIter = std::slice::Iter<'a, Song>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
