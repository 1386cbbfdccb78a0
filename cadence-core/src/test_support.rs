//! Fixtures shared by unit, behaviour, property, and benchmark code.

use crate::{Song, UserProfile};

/// A mid-range song with placeholder metadata.
///
/// Every unit feature sits at `0.5` and the tempo at `100` BPM.
#[must_use]
pub fn neutral_song(id: u64) -> Song {
    Song {
        id,
        title: format!("Track {id}"),
        artist: "Test Artist".to_owned(),
        genre: "ambient".to_owned(),
        mood: "neutral".to_owned(),
        energy: 0.5,
        tempo_bpm: 100.0,
        valence: 0.5,
        danceability: 0.5,
        acousticness: 0.5,
    }
}

/// A neutral song with the given tempo.
#[must_use]
pub fn song_with_tempo(id: u64, tempo_bpm: f64) -> Song {
    Song {
        tempo_bpm,
        ..neutral_song(id)
    }
}

/// A neutral song with the given genre and mood.
#[must_use]
pub fn tagged_song(id: u64, genre: &str, mood: &str) -> Song {
    Song {
        genre: genre.to_owned(),
        mood: mood.to_owned(),
        ..neutral_song(id)
    }
}

/// A loud, dark rock track.
#[must_use]
pub fn storm_runner() -> Song {
    Song {
        id: 3,
        title: "Storm Runner".to_owned(),
        artist: "Voltline".to_owned(),
        genre: "rock".to_owned(),
        mood: "intense".to_owned(),
        energy: 0.9,
        tempo_bpm: 140.0,
        valence: 0.25,
        danceability: 0.45,
        acousticness: 0.10,
    }
}

/// A bright, danceable pop track.
#[must_use]
pub fn sunrise_city() -> Song {
    Song {
        id: 1,
        title: "Sunrise City".to_owned(),
        artist: "Neon Echo".to_owned(),
        genre: "pop".to_owned(),
        mood: "happy".to_owned(),
        energy: 0.85,
        tempo_bpm: 120.0,
        valence: 0.80,
        danceability: 0.75,
        acousticness: 0.15,
    }
}

/// A relaxed lofi listener.
///
/// # Panics
/// Never; every field is set.
#[must_use]
#[expect(clippy::expect_used, reason = "fixture fields are all present")]
pub fn lofi_profile() -> UserProfile {
    UserProfile::builder()
        .favorite_genre("lofi")
        .favorite_mood("chill")
        .target_energy(0.4)
        .target_tempo_bpm(80.0)
        .target_valence(0.6)
        .target_danceability(0.3)
        .target_acousticness(0.5)
        .build()
        .expect("complete lofi profile")
}

/// A listener who wants loud, dark rock.
///
/// # Panics
/// Never; every field is set.
#[must_use]
#[expect(clippy::expect_used, reason = "fixture fields are all present")]
pub fn rock_profile() -> UserProfile {
    UserProfile::builder()
        .favorite_genre("rock")
        .favorite_mood("intense")
        .target_energy(0.9)
        .target_tempo_bpm(140.0)
        .target_valence(0.25)
        .target_danceability(0.45)
        .target_acousticness(0.10)
        .build()
        .expect("complete rock profile")
}

/// A profile whose numeric targets all match [`neutral_song`].
///
/// # Panics
/// Never; every field is set.
#[must_use]
#[expect(clippy::expect_used, reason = "fixture fields are all present")]
pub fn neutral_profile(genre: &str, mood: &str) -> UserProfile {
    UserProfile::builder()
        .favorite_genre(genre)
        .favorite_mood(mood)
        .target_energy(0.5)
        .target_tempo_bpm(100.0)
        .target_valence(0.5)
        .target_danceability(0.5)
        .target_acousticness(0.5)
        .build()
        .expect("complete neutral profile")
}
