//! Score breakdowns and the reasons rendered from them.
//!
//! Each scoring contribution is kept as a labelled magnitude. Rendering to
//! text is deferred to [`Contribution`]'s `Display` implementation so report
//! sinks can choose between structured and textual output.

use std::fmt;

use crate::{Song, UnitFeature};

/// A single source of score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Signal {
    /// Exact genre match bonus.
    Genre,
    /// Exact mood match bonus.
    Mood,
    /// Energy closeness.
    Energy,
    /// Valence closeness.
    Valence,
    /// Danceability closeness.
    Danceability,
    /// Acousticness closeness.
    Acousticness,
    /// Normalised tempo closeness.
    Tempo,
}

impl Signal {
    /// Return the lowercase label used in reasons.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Genre => "genre",
            Self::Mood => "mood",
            Self::Energy => "energy",
            Self::Valence => "valence",
            Self::Danceability => "danceability",
            Self::Acousticness => "acousticness",
            Self::Tempo => "tempo",
        }
    }

    /// Report whether the signal is a flat categorical bonus.
    #[must_use]
    pub const fn is_categorical(self) -> bool {
        matches!(self, Self::Genre | Self::Mood)
    }
}

impl From<UnitFeature> for Signal {
    fn from(feature: UnitFeature) -> Self {
        match feature {
            UnitFeature::Energy => Self::Energy,
            UnitFeature::Valence => Self::Valence,
            UnitFeature::Danceability => Self::Danceability,
            UnitFeature::Acousticness => Self::Acousticness,
        }
    }
}

/// Points awarded by one signal.
///
/// # Examples
/// ```
/// use cadence_core::{Contribution, Signal};
///
/// assert_eq!(Contribution::new(Signal::Genre, 2.0).to_string(), "genre match (+2.0)");
/// assert_eq!(
///     Contribution::new(Signal::Energy, 0.96).to_string(),
///     "energy closeness (+0.96)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contribution {
    /// Source of the points.
    pub signal: Signal,
    /// Points added to the total.
    pub points: f64,
}

impl Contribution {
    /// Construct a contribution.
    #[must_use]
    pub const fn new(signal: Signal, points: f64) -> Self {
        Self { signal, points }
    }
}

impl fmt::Display for Contribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.signal.as_str();
        if self.signal.is_categorical() {
            write!(f, "{label} match (+{:.1})", self.points)
        } else {
            write!(f, "{label} closeness (+{:.2})", self.points)
        }
    }
}

/// Total score together with its ordered contributions.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakdown {
    total: f64,
    contributions: Vec<Contribution>,
}

impl ScoreBreakdown {
    /// Start an empty breakdown.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0.0,
            contributions: Vec::new(),
        }
    }

    /// Append a contribution and add its points to the total.
    #[expect(
        clippy::float_arithmetic,
        reason = "the total accumulates contribution points in order"
    )]
    pub fn push(&mut self, contribution: Contribution) {
        self.total += contribution.points;
        self.contributions.push(contribution);
    }

    /// Accumulated score.
    #[must_use]
    pub const fn total(&self) -> f64 {
        self.total
    }

    /// Contributions in the order they were recorded.
    #[must_use]
    pub fn contributions(&self) -> &[Contribution] {
        &self.contributions
    }

    /// Points recorded for `signal`, if it contributed.
    #[must_use]
    pub fn points(&self, signal: Signal) -> Option<f64> {
        self.contributions
            .iter()
            .find(|contribution| contribution.signal == signal)
            .map(|contribution| contribution.points)
    }

    /// Render every contribution as a reason string.
    #[must_use]
    pub fn reasons(&self) -> Vec<String> {
        self.contributions.iter().map(ToString::to_string).collect()
    }
}

/// A catalog song paired with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSong<'a> {
    /// Song that was scored.
    pub song: &'a Song,
    /// Score and explanation.
    pub breakdown: ScoreBreakdown,
}

impl<'a> ScoredSong<'a> {
    /// Pair a song with its breakdown.
    #[must_use]
    pub const fn new(song: &'a Song, breakdown: ScoreBreakdown) -> Self {
        Self { song, breakdown }
    }

    /// Total score.
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.breakdown.total()
    }

    /// Reason strings in contribution order.
    #[must_use]
    pub fn reasons(&self) -> Vec<String> {
        self.breakdown.reasons()
    }
}
