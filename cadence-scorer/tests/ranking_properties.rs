//! Property-based tests for scoring and ranking.
//!
//! # Invariants tested
//!
//! - **Length:** a ranking holds `min(k, n)` songs.
//! - **Order:** scores never increase down a ranking.
//! - **Stability:** equal scores keep catalog order.
//! - **Prefix:** the top `k` is a prefix of the full ranking.
//! - **Bounds:** unit closeness stays within `[0, weight]` and catalog tempos
//!   normalise into `[0, 1]`.

#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

use cadence_core::{Catalog, Song, TempoBounds, UserProfile};
use cadence_scorer::{Strategy as ScoringStrategy, closeness, recommend_catalog};
use proptest::prelude::*;

const GENRES: &[&str] = &["pop", "rock", "lofi", "jazz"];
const MOODS: &[&str] = &["happy", "chill", "intense"];

fn unit() -> impl Strategy<Value = f64> {
    0.0_f64..=1.0_f64
}

fn label(options: &'static [&'static str]) -> impl Strategy<Value = String> {
    proptest::sample::select(options).prop_map(str::to_owned)
}

fn songs(max: usize) -> impl Strategy<Value = Vec<Song>> {
    let song = (
        label(GENRES),
        label(MOODS),
        unit(),
        60.0_f64..=180.0_f64,
        unit(),
        unit(),
        unit(),
    );
    proptest::collection::vec(song, 0..max).prop_map(|rows| {
        rows.into_iter()
            .zip(0_u64..)
            .map(
                |((genre, mood, energy, tempo_bpm, valence, danceability, acousticness), id)| {
                    Song {
                        id,
                        title: format!("Song {id}"),
                        artist: "Prop".to_owned(),
                        genre,
                        mood,
                        energy,
                        tempo_bpm,
                        valence,
                        danceability,
                        acousticness,
                    }
                },
            )
            .collect()
    })
}

fn profile() -> impl Strategy<Value = UserProfile> {
    (
        label(GENRES),
        label(MOODS),
        unit(),
        60.0_f64..=180.0_f64,
        unit(),
        unit(),
        unit(),
    )
        .prop_map(
            |(genre, mood, energy, tempo, valence, danceability, acousticness)| {
                UserProfile::builder()
                    .favorite_genre(genre)
                    .favorite_mood(mood)
                    .target_energy(energy)
                    .target_tempo_bpm(tempo)
                    .target_valence(valence)
                    .target_danceability(danceability)
                    .target_acousticness(acousticness)
                    .build()
                    .expect("generated profile is complete")
            },
        )
}

fn strategy() -> impl Strategy<Value = ScoringStrategy> {
    proptest::sample::select(vec![
        ScoringStrategy::balanced(),
        ScoringStrategy::genre_first(),
        ScoringStrategy::mood_first(),
        ScoringStrategy::energy_focused(),
    ])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: rankings are sorted, stable, and sized `min(k, n)`.
    #[test]
    fn rankings_are_sorted_and_sized(
        songs in songs(40),
        profile in profile(),
        strategy in strategy(),
        k in 0_usize..50,
    ) {
        let catalog = Catalog::new(songs).expect("generated songs are valid");
        let ranked = recommend_catalog(&profile, &catalog, &strategy, k);

        prop_assert_eq!(ranked.len(), k.min(catalog.len()));
        for pair in ranked.windows(2) {
            let [first, second] = pair else { continue };
            prop_assert!(first.score() >= second.score());
            if first.score().total_cmp(&second.score()).is_eq() {
                prop_assert!(first.song.id < second.song.id);
            }
        }
    }

    /// Property: the top `k` agrees with the head of the full ranking.
    #[test]
    fn top_k_is_prefix_of_full_ranking(
        songs in songs(30),
        profile in profile(),
        strategy in strategy(),
        k in 0_usize..30,
    ) {
        let catalog = Catalog::new(songs).expect("generated songs are valid");
        let full: Vec<u64> = recommend_catalog(&profile, &catalog, &strategy, catalog.len())
            .iter()
            .map(|scored| scored.song.id)
            .collect();
        let top: Vec<u64> = recommend_catalog(&profile, &catalog, &strategy, k)
            .iter()
            .map(|scored| scored.song.id)
            .collect();
        prop_assert_eq!(top.as_slice(), full.get(..top.len()).expect("prefix in range"));
    }

    /// Property: closeness of unit values is bounded by a non-negative weight.
    #[test]
    fn unit_closeness_is_bounded(
        song_value in unit(),
        target_value in unit(),
        weight in 0.0_f64..=5.0_f64,
    ) {
        let points = closeness(song_value, target_value, weight);
        prop_assert!(points >= 0.0);
        prop_assert!(points <= weight);
    }

    /// Property: every catalog tempo normalises into the unit interval.
    #[test]
    fn catalog_tempos_normalise_into_unit_interval(songs in songs(30)) {
        let Some(bounds) = TempoBounds::from_songs(&songs) else {
            prop_assert!(songs.is_empty());
            return Ok(());
        };
        for song in &songs {
            let normalised = bounds.normalise(song.tempo_bpm);
            prop_assert!((0.0..=1.0).contains(&normalised), "{normalised}");
        }
    }
}
