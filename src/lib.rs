//! Facade crate for the Cadence song recommender.
//!
//! This crate re-exports the core domain types and the weighted scorer, and
//! exposes the CSV catalog source behind the `catalog` feature.

#![forbid(unsafe_code)]

pub use cadence_core::{
    CalibratedProfile, Catalog, CatalogValidationError, Contribution, ScoreBreakdown, ScoredSong,
    Scorer, Signal, Song, SongError, TempoBounds, TempoBoundsError, UnitFeature, UserProfile,
    UserProfileBuilder, UserProfileError,
};

pub use cadence_scorer::{
    DEFAULT_STRATEGY, Strategy, StrategyError, StrategyRegistry, WeightedScorer, closeness,
    recommend, recommend_catalog, score_song,
};

#[cfg(feature = "catalog")]
pub use cadence_catalog::{CatalogError, load_catalog, read_catalog};
