//! Catalog-relative tempo normalisation.
//!
//! Tempo has no natural upper bound, so it is mapped onto the unit interval
//! using the minimum and maximum tempo of the catalog being ranked. The
//! bounds belong to a ranking run, not to the user, and must be recomputed
//! whenever the catalog changes.

use thiserror::Error;

use crate::Song;

/// Minimum and maximum tempo observed across a catalog.
///
/// # Examples
/// ```
/// use cadence_core::TempoBounds;
///
/// # fn main() -> Result<(), cadence_core::TempoBoundsError> {
/// let bounds = TempoBounds::new(60.0, 160.0)?;
/// assert_eq!(bounds.normalise(110.0), 0.5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TempoBounds {
    min: f64,
    max: f64,
}

/// Errors returned by [`TempoBounds::new`].
#[derive(Debug, Error, PartialEq)]
pub enum TempoBoundsError {
    /// A bound was NaN or infinite.
    #[error("tempo bounds must be finite, found [{min}, {max}]")]
    NonFinite {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
    /// The lower bound exceeded the upper bound.
    #[error("tempo minimum {min} exceeds maximum {max}")]
    Inverted {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
}

impl TempoBounds {
    /// Validate and construct bounds.
    ///
    /// # Errors
    /// Returns [`TempoBoundsError`] when either bound is not finite or when
    /// `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self, TempoBoundsError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(TempoBoundsError::NonFinite { min, max });
        }
        if min > max {
            return Err(TempoBoundsError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    /// Derive bounds from the tempos of `songs`.
    ///
    /// Returns `None` when there are no songs.
    ///
    /// # Examples
    /// ```
    /// use cadence_core::TempoBounds;
    ///
    /// assert!(TempoBounds::from_songs(std::iter::empty()).is_none());
    /// ```
    pub fn from_songs<'a, I>(songs: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Song>,
    {
        songs.into_iter().fold(None, |acc, song| {
            let bpm = song.tempo_bpm;
            Some(acc.map_or(Self { min: bpm, max: bpm }, |bounds: Self| Self {
                min: bounds.min.min(bpm),
                max: bounds.max.max(bpm),
            }))
        })
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Width used as the normalisation divisor.
    ///
    /// A catalog with a single distinct tempo has zero width; the divisor then
    /// falls back to `1.0` so normalised values become a plain offset from
    /// the minimum.
    #[expect(
        clippy::float_arithmetic,
        reason = "the range is the difference between the bounds"
    )]
    #[must_use]
    pub fn range(&self) -> f64 {
        let span = self.max - self.min;
        if span > 0.0 { span } else { 1.0 }
    }

    /// Map a tempo into the catalog's coordinate system.
    ///
    /// Values outside the bounds are not clamped.
    ///
    /// # Examples
    /// ```
    /// use cadence_core::TempoBounds;
    ///
    /// # fn main() -> Result<(), cadence_core::TempoBoundsError> {
    /// let flat = TempoBounds::new(120.0, 120.0)?;
    /// assert_eq!(flat.normalise(120.0), 0.0);
    /// assert_eq!(flat.normalise(125.0), 5.0);
    /// # Ok(())
    /// # }
    /// ```
    #[expect(
        clippy::float_arithmetic,
        reason = "normalisation shifts and scales the tempo"
    )]
    #[must_use]
    pub fn normalise(&self, bpm: f64) -> f64 {
        (bpm - self.min) / self.range()
    }
}
