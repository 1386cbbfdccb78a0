//! Score songs for a user profile.
//!
//! The `Scorer` trait assigns a score and an explanation to a
//! [`Song`](crate::Song) given a [`CalibratedProfile`](crate::CalibratedProfile).

use crate::{CalibratedProfile, ScoreBreakdown, Song};

/// Calculate a score for a song.
///
/// Higher scores indicate a better match. Implementations must be pure: the
/// same inputs always produce the same breakdown, and scoring one song never
/// depends on another. They must also be thread-safe (`Send` + `Sync`) so a
/// catalog can be scored across threads.
///
/// Scores are not clamped. Negative weights are a legitimate configuration
/// and may produce negative totals.
///
/// # Examples
///
/// ```rust
/// use cadence_core::{CalibratedProfile, Contribution, ScoreBreakdown, Scorer, Signal, Song};
///
/// struct GenreOnly;
///
/// impl Scorer for GenreOnly {
///     fn score(&self, song: &Song, profile: &CalibratedProfile<'_>) -> ScoreBreakdown {
///         let mut breakdown = ScoreBreakdown::new();
///         if song.genre == profile.profile().favorite_genre() {
///             breakdown.push(Contribution::new(Signal::Genre, 1.0));
///         }
///         breakdown
///     }
/// }
/// ```
pub trait Scorer: Send + Sync {
    /// Return the breakdown for `song` according to `profile`.
    fn score(&self, song: &Song, profile: &CalibratedProfile<'_>) -> ScoreBreakdown;
}
