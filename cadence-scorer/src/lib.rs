//! Weighted content scoring and ranking for Cadence.
//!
//! The crate turns a [`Strategy`] into a [`Scorer`](cadence_core::Scorer)
//! and ranks catalogs with it:
//! - [`closeness`] is the primitive every numeric feature uses.
//! - [`score_song`] applies one strategy to one song and records why.
//! - [`recommend`] and [`recommend_catalog`] score every song and keep the
//!   top `k` with a stable, descending sort.
//! - [`StrategyRegistry`] maps names to strategies and falls back to
//!   [`DEFAULT_STRATEGY`] for names it does not know.
//!
//! # Examples
//!
//! ```
//! use cadence_core::Catalog;
//! use cadence_core::test_support::{rock_profile, storm_runner, sunrise_city};
//! use cadence_scorer::{StrategyRegistry, recommend_catalog};
//!
//! let catalog = Catalog::new(vec![sunrise_city(), storm_runner()]).expect("valid songs");
//! let registry = StrategyRegistry::builtin();
//! let top = recommend_catalog(&rock_profile(), &catalog, registry.resolve("balanced"), 1);
//! assert_eq!(top[0].song.title, "Storm Runner");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod closeness;
mod error;
mod rank;
mod registry;
mod strategy;
mod weighted;

pub use closeness::closeness;
pub use error::StrategyError;
pub use rank::{recommend, recommend_catalog};
pub use registry::StrategyRegistry;
pub use strategy::{DEFAULT_STRATEGY, Strategy};
pub use weighted::{WeightedScorer, score_song};
