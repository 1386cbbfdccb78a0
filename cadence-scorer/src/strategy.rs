//! Named weight bundles that parameterise scoring.

use cadence_core::UnitFeature;

use crate::StrategyError;

/// Name of the strategy used when no other is requested.
pub const DEFAULT_STRATEGY: &str = "balanced";

/// Categorical bonuses and per-feature closeness weights.
///
/// Strategies are immutable values passed explicitly to each ranking call.
/// Negative weights are allowed and invert the "closer is better" reading of
/// the affected feature.
///
/// # Examples
/// ```
/// use cadence_core::UnitFeature;
/// use cadence_scorer::Strategy;
///
/// let strategy = Strategy::default();
/// assert_eq!(strategy.name, "balanced");
/// assert_eq!(strategy.unit_weight(UnitFeature::Energy), 1.2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strategy {
    /// Registry key.
    pub name: String,
    /// Flat bonus for an exact genre match.
    pub genre_bonus: f64,
    /// Flat bonus for an exact mood match.
    pub mood_bonus: f64,
    /// Energy closeness multiplier.
    pub w_energy: f64,
    /// Normalised tempo closeness multiplier.
    pub w_tempo: f64,
    /// Valence closeness multiplier.
    pub w_valence: f64,
    /// Danceability closeness multiplier.
    pub w_dance: f64,
    /// Acousticness closeness multiplier.
    pub w_acoustic: f64,
}

impl Strategy {
    /// Even-handed weighting; the default.
    #[must_use]
    pub fn balanced() -> Self {
        Self {
            name: DEFAULT_STRATEGY.to_owned(),
            genre_bonus: 2.0,
            mood_bonus: 1.0,
            w_energy: 1.2,
            w_tempo: 1.0,
            w_valence: 1.0,
            w_dance: 0.9,
            w_acoustic: 0.9,
        }
    }

    /// Genre dominates; numeric features are damped.
    #[must_use]
    pub fn genre_first() -> Self {
        Self {
            name: "genre_first".to_owned(),
            genre_bonus: 3.0,
            mood_bonus: 0.5,
            w_energy: 0.9,
            w_tempo: 0.8,
            w_valence: 0.8,
            w_dance: 0.8,
            w_acoustic: 0.8,
        }
    }

    /// Mood dominates.
    #[must_use]
    pub fn mood_first() -> Self {
        Self {
            name: "mood_first".to_owned(),
            genre_bonus: 1.0,
            mood_bonus: 2.5,
            w_energy: 0.9,
            w_tempo: 0.9,
            w_valence: 1.0,
            w_dance: 0.9,
            w_acoustic: 0.9,
        }
    }

    /// Energy and tempo dominate; categories barely matter.
    #[must_use]
    pub fn energy_focused() -> Self {
        Self {
            name: "energy_focused".to_owned(),
            genre_bonus: 0.5,
            mood_bonus: 0.5,
            w_energy: 2.0,
            w_tempo: 1.2,
            w_valence: 0.7,
            w_dance: 0.8,
            w_acoustic: 0.7,
        }
    }

    /// Closeness weight for a unit feature.
    #[must_use]
    pub const fn unit_weight(&self, feature: UnitFeature) -> f64 {
        match feature {
            UnitFeature::Energy => self.w_energy,
            UnitFeature::Valence => self.w_valence,
            UnitFeature::Danceability => self.w_dance,
            UnitFeature::Acousticness => self.w_acoustic,
        }
    }

    /// Validate the strategy and return it.
    ///
    /// # Errors
    /// Returns [`StrategyError::BlankName`] when the name is blank and
    /// [`StrategyError::NonFiniteWeight`] for the first NaN or infinite
    /// weight.
    pub fn validate(self) -> Result<Self, StrategyError> {
        if self.name.trim().is_empty() {
            return Err(StrategyError::BlankName);
        }
        if let Some((weight, value)) = self
            .weights()
            .into_iter()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(StrategyError::NonFiniteWeight {
                strategy: self.name,
                weight,
                value,
            });
        }
        Ok(self)
    }

    /// Every weight paired with its field name.
    #[must_use]
    pub const fn weights(&self) -> [(&'static str, f64); 7] {
        [
            ("genre_bonus", self.genre_bonus),
            ("mood_bonus", self.mood_bonus),
            ("w_energy", self.w_energy),
            ("w_tempo", self.w_tempo),
            ("w_valence", self.w_valence),
            ("w_dance", self.w_dance),
            ("w_acoustic", self.w_acoustic),
        ]
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::balanced()
    }
}
