//! Catalog entries and their bounded audio features.
//!
//! A [`Song`] carries two free-form categorical attributes (genre and mood),
//! four features constrained to the unit interval, and a tempo in beats per
//! minute. Songs are validated once at the catalog boundary and never mutated
//! afterwards.

use thiserror::Error;

/// A single catalog entry.
///
/// # Examples
/// ```
/// use cadence_core::{Song, UnitFeature};
///
/// let song = Song {
///     id: 7,
///     title: "Night Drive".into(),
///     artist: "Neon Echo".into(),
///     genre: "synthwave".into(),
///     mood: "moody".into(),
///     energy: 0.75,
///     tempo_bpm: 110.0,
///     valence: 0.49,
///     danceability: 0.73,
///     acousticness: 0.22,
/// };
/// assert!(song.validate().is_ok());
/// assert_eq!(song.unit_feature(UnitFeature::Energy), 0.75);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Song {
    /// Catalog identifier.
    pub id: u64,
    /// Display title. Not interpreted.
    pub title: String,
    /// Display artist. Not interpreted.
    pub artist: String,
    /// Genre label, compared by exact equality.
    pub genre: String,
    /// Mood label, compared by exact equality.
    pub mood: String,
    /// Perceived intensity in `[0, 1]`.
    pub energy: f64,
    /// Tempo in beats per minute. Positive, unbounded above.
    pub tempo_bpm: f64,
    /// Musical positiveness in `[0, 1]`.
    pub valence: f64,
    /// Suitability for dancing in `[0, 1]`.
    pub danceability: f64,
    /// Confidence that the track is acoustic, in `[0, 1]`.
    pub acousticness: f64,
}

/// Song features that live on the unit interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnitFeature {
    /// Perceived intensity.
    Energy,
    /// Musical positiveness.
    Valence,
    /// Suitability for dancing.
    Danceability,
    /// Acoustic confidence.
    Acousticness,
}

impl UnitFeature {
    /// Every unit feature, in scoring order.
    pub const ALL: [Self; 4] = [
        Self::Energy,
        Self::Valence,
        Self::Danceability,
        Self::Acousticness,
    ];

    /// Return the feature name as used in catalog headers and reasons.
    ///
    /// # Examples
    /// ```
    /// use cadence_core::UnitFeature;
    ///
    /// assert_eq!(UnitFeature::Danceability.as_str(), "danceability");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Energy => "energy",
            Self::Valence => "valence",
            Self::Danceability => "danceability",
            Self::Acousticness => "acousticness",
        }
    }
}

impl std::fmt::Display for UnitFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by [`Song::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum SongError {
    /// A unit feature was non-finite or outside `[0, 1]`.
    #[error("{feature} must be within [0, 1], found {value}")]
    OutOfUnitRange {
        /// Offending feature.
        feature: UnitFeature,
        /// Value found on the song.
        value: f64,
    },
    /// Tempo was non-finite, zero, or negative.
    #[error("tempo_bpm must be a positive number, found {value}")]
    InvalidTempo {
        /// Value found on the song.
        value: f64,
    },
}

impl Song {
    /// Return the value of a unit feature.
    #[must_use]
    pub const fn unit_feature(&self, feature: UnitFeature) -> f64 {
        match feature {
            UnitFeature::Energy => self.energy,
            UnitFeature::Valence => self.valence,
            UnitFeature::Danceability => self.danceability,
            UnitFeature::Acousticness => self.acousticness,
        }
    }

    /// Check the numeric attribute ranges.
    ///
    /// # Errors
    /// Returns [`SongError::OutOfUnitRange`] for the first unit feature that
    /// is not a finite value in `[0, 1]`, and [`SongError::InvalidTempo`] when
    /// the tempo is not a finite positive number.
    pub fn validate(&self) -> Result<(), SongError> {
        if let Some(feature) = UnitFeature::ALL
            .into_iter()
            .find(|&feature| !(0.0..=1.0).contains(&self.unit_feature(feature)))
        {
            return Err(SongError::OutOfUnitRange {
                feature,
                value: self.unit_feature(feature),
            });
        }
        if !self.tempo_bpm.is_finite() || self.tempo_bpm <= 0.0 {
            return Err(SongError::InvalidTempo {
                value: self.tempo_bpm,
            });
        }
        Ok(())
    }
}
