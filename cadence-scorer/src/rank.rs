//! Exhaustive top-K ranking of a catalog.
//!
//! Every song is scored independently, the scores are sorted with a single
//! stable sort, and the result is truncated. With the `parallel` feature the
//! scoring loop runs on the `rayon` pool; the sort always runs afterwards on
//! the complete score set so output is identical either way.

use cadence_core::{CalibratedProfile, Catalog, Scorer, ScoredSong, Song, UserProfile};
use log::{debug, warn};

use crate::{Strategy, WeightedScorer};

/// Return the `k` highest-scoring songs, best first.
///
/// An empty catalog or `k == 0` yields an empty result; `k` larger than the
/// catalog yields the whole catalog. Songs with equal scores keep their
/// catalog order.
///
/// # Examples
/// ```
/// use cadence_core::TempoBounds;
/// use cadence_core::test_support::{rock_profile, storm_runner, sunrise_city};
/// use cadence_scorer::{Strategy, WeightedScorer, recommend};
///
/// let songs = [sunrise_city(), storm_runner()];
/// let profile = rock_profile();
/// let bounds = TempoBounds::new(120.0, 140.0).expect("valid bounds");
/// let strategy = Strategy::balanced();
/// let top = recommend(&profile.calibrate(bounds), &songs, 1, &WeightedScorer::new(&strategy));
/// assert_eq!(top.len(), 1);
/// assert_eq!(top[0].song.title, "Storm Runner");
/// ```
pub fn recommend<'c, S>(
    profile: &CalibratedProfile<'_>,
    songs: &'c [Song],
    k: usize,
    scorer: &S,
) -> Vec<ScoredSong<'c>>
where
    S: Scorer + ?Sized,
{
    if k == 0 || songs.is_empty() {
        return Vec::new();
    }
    let mut scored = score_all(profile, songs, scorer);
    // `sort_by` is stable, so ties keep catalog order.
    scored.sort_by(|left, right| right.score().total_cmp(&left.score()));
    scored.truncate(k);
    debug!(
        "ranked {} songs, returning top {}",
        songs.len(),
        scored.len()
    );
    scored
}

/// Rank a catalog for a profile using one strategy.
///
/// Tempo bounds are derived from `catalog` for this call, so the same
/// profile can be ranked against different catalogs without carrying stale
/// bounds.
///
/// # Examples
/// ```
/// use cadence_core::Catalog;
/// use cadence_core::test_support::lofi_profile;
/// use cadence_scorer::{Strategy, recommend_catalog};
///
/// let catalog = Catalog::empty();
/// let top = recommend_catalog(&lofi_profile(), &catalog, &Strategy::default(), 5);
/// assert!(top.is_empty());
/// ```
pub fn recommend_catalog<'c>(
    profile: &UserProfile,
    catalog: &'c Catalog,
    strategy: &Strategy,
    k: usize,
) -> Vec<ScoredSong<'c>> {
    let Some(bounds) = catalog.tempo_bounds() else {
        warn!("catalog is empty, nothing to rank");
        return Vec::new();
    };
    recommend(
        &profile.calibrate(bounds),
        catalog.songs(),
        k,
        &WeightedScorer::new(strategy),
    )
}

#[cfg(not(feature = "parallel"))]
fn score_all<'c, S>(
    profile: &CalibratedProfile<'_>,
    songs: &'c [Song],
    scorer: &S,
) -> Vec<ScoredSong<'c>>
where
    S: Scorer + ?Sized,
{
    songs
        .iter()
        .map(|song| ScoredSong::new(song, scorer.score(song, profile)))
        .collect()
}

#[cfg(feature = "parallel")]
fn score_all<'c, S>(
    profile: &CalibratedProfile<'_>,
    songs: &'c [Song],
    scorer: &S,
) -> Vec<ScoredSong<'c>>
where
    S: Scorer + ?Sized,
{
    use rayon::prelude::*;

    // Indexed collection preserves catalog order.
    songs
        .par_iter()
        .map(|song| ScoredSong::new(song, scorer.score(song, profile)))
        .collect()
}
