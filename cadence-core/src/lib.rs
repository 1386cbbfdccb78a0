//! Core domain types for the Cadence recommender.
//!
//! These models validate at construction so the scoring code never sees a
//! partially-shaped record. Constructors return `Result` to surface invalid
//! input early.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod catalog;
mod explain;
mod profile;
mod scorer;
mod song;
mod tempo;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::{Catalog, CatalogValidationError};
pub use explain::{Contribution, ScoreBreakdown, ScoredSong, Signal};
pub use profile::{CalibratedProfile, UserProfile, UserProfileBuilder, UserProfileError};
pub use scorer::Scorer;
pub use song::{Song, SongError, UnitFeature};
pub use tempo::{TempoBounds, TempoBoundsError};
