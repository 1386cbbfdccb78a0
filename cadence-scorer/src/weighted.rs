//! Strategy-weighted similarity between a song and a calibrated profile.

use cadence_core::{
    CalibratedProfile, Contribution, ScoreBreakdown, Scorer, Signal, Song, UnitFeature,
};

use crate::{Strategy, closeness};

/// Score one song against a profile under a strategy.
///
/// Contributions are recorded, and summed, in a fixed order: genre bonus and
/// mood bonus (each only on an exact, case-sensitive match), then closeness
/// for energy, valence, danceability, and acousticness, and finally closeness
/// of the tempo after both the song's and the target's tempo are normalised
/// with the profile's catalog bounds.
///
/// # Examples
/// ```
/// use cadence_core::{Signal, TempoBounds};
/// use cadence_core::test_support::{rock_profile, storm_runner};
/// use cadence_scorer::{Strategy, score_song};
///
/// let profile = rock_profile();
/// let bounds = TempoBounds::new(120.0, 140.0).expect("valid bounds");
/// let breakdown = score_song(&profile.calibrate(bounds), &storm_runner(), &Strategy::balanced());
/// assert_eq!(breakdown.points(Signal::Genre), Some(2.0));
/// assert_eq!(breakdown.contributions().len(), 7);
/// ```
#[must_use]
pub fn score_song(
    profile: &CalibratedProfile<'_>,
    song: &Song,
    strategy: &Strategy,
) -> ScoreBreakdown {
    let preferences = profile.profile();
    let mut breakdown = ScoreBreakdown::new();

    if song.genre == preferences.favorite_genre() {
        breakdown.push(Contribution::new(Signal::Genre, strategy.genre_bonus));
    }
    if song.mood == preferences.favorite_mood() {
        breakdown.push(Contribution::new(Signal::Mood, strategy.mood_bonus));
    }

    for feature in UnitFeature::ALL {
        let points = closeness(
            song.unit_feature(feature),
            preferences.target(feature),
            strategy.unit_weight(feature),
        );
        breakdown.push(Contribution::new(Signal::from(feature), points));
    }

    let bounds = profile.tempo_bounds();
    let tempo_points = closeness(
        bounds.normalise(song.tempo_bpm),
        profile.normalised_target_tempo(),
        strategy.w_tempo,
    );
    breakdown.push(Contribution::new(Signal::Tempo, tempo_points));

    breakdown
}

/// [`Scorer`] adapter over a borrowed [`Strategy`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedScorer<'s> {
    strategy: &'s Strategy,
}

impl<'s> WeightedScorer<'s> {
    /// Wrap a strategy.
    #[must_use]
    pub const fn new(strategy: &'s Strategy) -> Self {
        Self { strategy }
    }

    /// Strategy applied by this scorer.
    #[must_use]
    pub const fn strategy(&self) -> &'s Strategy {
        self.strategy
    }
}

impl<'s> From<&'s Strategy> for WeightedScorer<'s> {
    fn from(strategy: &'s Strategy) -> Self {
        Self::new(strategy)
    }
}

impl Scorer for WeightedScorer<'_> {
    fn score(&self, song: &Song, profile: &CalibratedProfile<'_>) -> ScoreBreakdown {
        score_song(profile, song, self.strategy)
    }
}
