//! User taste profiles: favourite categories and numeric targets.
//!
//! A [`UserProfile`] mirrors the attribute shape of a [`Song`](crate::Song).
//! Profiles are assembled through [`UserProfileBuilder`], which refuses to
//! produce a partially-shaped record. Before scoring, a profile is paired
//! with the catalog's [`TempoBounds`] via [`UserProfile::calibrate`].

use thiserror::Error;

use crate::{TempoBounds, UnitFeature};

/// Preferences a catalog is ranked against.
///
/// # Examples
/// ```
/// use cadence_core::{UnitFeature, UserProfile};
///
/// # fn main() -> Result<(), cadence_core::UserProfileError> {
/// let profile = UserProfile::builder()
///     .favorite_genre("lofi")
///     .favorite_mood("chill")
///     .target_energy(0.4)
///     .target_tempo_bpm(80.0)
///     .target_valence(0.6)
///     .target_danceability(0.3)
///     .target_acousticness(0.5)
///     .build()?;
/// assert_eq!(profile.target(UnitFeature::Energy), 0.4);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UserProfileBuilder"))]
pub struct UserProfile {
    favorite_genre: String,
    favorite_mood: String,
    target_energy: f64,
    target_tempo_bpm: f64,
    target_valence: f64,
    target_danceability: f64,
    target_acousticness: f64,
}

/// Errors returned by [`UserProfileBuilder::build`].
#[derive(Debug, Error, PartialEq)]
pub enum UserProfileError {
    /// A required field was never supplied.
    #[error("missing field `{field}`")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },
    /// A numeric target was NaN or infinite.
    #[error("`{field}` must be finite, found {value}")]
    NonFiniteTarget {
        /// Name of the offending field.
        field: &'static str,
        /// Value supplied.
        value: f64,
    },
}

/// Incrementally assembles a [`UserProfile`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UserProfileBuilder {
    favorite_genre: Option<String>,
    favorite_mood: Option<String>,
    target_energy: Option<f64>,
    #[cfg_attr(feature = "serde", serde(alias = "target_tempo"))]
    target_tempo_bpm: Option<f64>,
    target_valence: Option<f64>,
    target_danceability: Option<f64>,
    target_acousticness: Option<f64>,
}

impl UserProfileBuilder {
    /// Set the favourite genre.
    #[must_use]
    pub fn favorite_genre(mut self, genre: impl Into<String>) -> Self {
        self.favorite_genre = Some(genre.into());
        self
    }

    /// Set the favourite mood.
    #[must_use]
    pub fn favorite_mood(mut self, mood: impl Into<String>) -> Self {
        self.favorite_mood = Some(mood.into());
        self
    }

    /// Set the target energy.
    #[must_use]
    pub const fn target_energy(mut self, value: f64) -> Self {
        self.target_energy = Some(value);
        self
    }

    /// Set the target tempo in beats per minute.
    #[must_use]
    pub const fn target_tempo_bpm(mut self, value: f64) -> Self {
        self.target_tempo_bpm = Some(value);
        self
    }

    /// Set the target valence.
    #[must_use]
    pub const fn target_valence(mut self, value: f64) -> Self {
        self.target_valence = Some(value);
        self
    }

    /// Set the target danceability.
    #[must_use]
    pub const fn target_danceability(mut self, value: f64) -> Self {
        self.target_danceability = Some(value);
        self
    }

    /// Set the target acousticness.
    #[must_use]
    pub const fn target_acousticness(mut self, value: f64) -> Self {
        self.target_acousticness = Some(value);
        self
    }

    /// Validate and construct the profile.
    ///
    /// # Errors
    /// Returns [`UserProfileError::MissingField`] for the first field that was
    /// not set, and [`UserProfileError::NonFiniteTarget`] when a numeric
    /// target is NaN or infinite.
    pub fn build(self) -> Result<UserProfile, UserProfileError> {
        Ok(UserProfile {
            favorite_genre: required("favorite_genre", self.favorite_genre)?,
            favorite_mood: required("favorite_mood", self.favorite_mood)?,
            target_energy: finite("target_energy", self.target_energy)?,
            target_tempo_bpm: finite("target_tempo_bpm", self.target_tempo_bpm)?,
            target_valence: finite("target_valence", self.target_valence)?,
            target_danceability: finite("target_danceability", self.target_danceability)?,
            target_acousticness: finite("target_acousticness", self.target_acousticness)?,
        })
    }
}

fn required<T>(field: &'static str, value: Option<T>) -> Result<T, UserProfileError> {
    value.ok_or(UserProfileError::MissingField { field })
}

fn finite(field: &'static str, value: Option<f64>) -> Result<f64, UserProfileError> {
    let present = required(field, value)?;
    if present.is_finite() {
        Ok(present)
    } else {
        Err(UserProfileError::NonFiniteTarget {
            field,
            value: present,
        })
    }
}

impl TryFrom<UserProfileBuilder> for UserProfile {
    type Error = UserProfileError;

    fn try_from(builder: UserProfileBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

impl UserProfile {
    /// Start building a profile.
    #[must_use]
    pub fn builder() -> UserProfileBuilder {
        UserProfileBuilder::default()
    }

    /// Favourite genre.
    #[must_use]
    pub fn favorite_genre(&self) -> &str {
        &self.favorite_genre
    }

    /// Favourite mood.
    #[must_use]
    pub fn favorite_mood(&self) -> &str {
        &self.favorite_mood
    }

    /// Target value for a unit feature.
    #[must_use]
    pub const fn target(&self, feature: UnitFeature) -> f64 {
        match feature {
            UnitFeature::Energy => self.target_energy,
            UnitFeature::Valence => self.target_valence,
            UnitFeature::Danceability => self.target_danceability,
            UnitFeature::Acousticness => self.target_acousticness,
        }
    }

    /// Target tempo in beats per minute.
    #[must_use]
    pub const fn target_tempo_bpm(&self) -> f64 {
        self.target_tempo_bpm
    }

    /// Pair the profile with the tempo bounds of the catalog being ranked.
    #[must_use]
    pub const fn calibrate(&self, tempo: TempoBounds) -> CalibratedProfile<'_> {
        CalibratedProfile {
            profile: self,
            tempo,
        }
    }
}

/// A profile bound to one ranking run's tempo coordinate system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibratedProfile<'p> {
    profile: &'p UserProfile,
    tempo: TempoBounds,
}

impl<'p> CalibratedProfile<'p> {
    /// Underlying user preferences.
    #[must_use]
    pub const fn profile(&self) -> &'p UserProfile {
        self.profile
    }

    /// Tempo bounds of the catalog.
    #[must_use]
    pub const fn tempo_bounds(&self) -> TempoBounds {
        self.tempo
    }

    /// Target tempo mapped into the catalog's coordinate system.
    #[must_use]
    pub fn normalised_target_tempo(&self) -> f64 {
        self.tempo.normalise(self.profile.target_tempo_bpm)
    }
}
