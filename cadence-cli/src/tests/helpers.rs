//! Test helpers for laying out catalog, profile, and strategy files.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

pub(super) const CATALOG_CSV: &str = "\
id,title,artist,genre,mood,energy,tempo_bpm,valence,danceability,acousticness
1,Sunrise City,Neon Echo,pop,happy,0.82,118,0.84,0.79,0.18
2,Midnight Coding,LoRoom,lofi,chill,0.42,78,0.56,0.62,0.71
3,Storm Runner,Voltline,rock,intense,0.91,152,0.48,0.66,0.10
";

pub(super) const ROCK_PROFILES_JSON: &str = r#"[
  {
    "name": "rock_fan",
    "profile": {
      "favorite_genre": "rock",
      "favorite_mood": "intense",
      "target_energy": 0.9,
      "target_tempo_bpm": 150,
      "target_valence": 0.45,
      "target_danceability": 0.65,
      "target_acousticness": 0.1
    }
  }
]"#;

pub(super) const EXTRA_STRATEGIES_JSON: &str = r#"[
  {
    "name": "acoustic_evenings",
    "genre_bonus": 1.0,
    "mood_bonus": 1.5,
    "w_energy": 0.8,
    "w_tempo": 0.6,
    "w_valence": 0.9,
    "w_dance": 0.4,
    "w_acoustic": 2.0
  }
]"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// A temporary data directory holding the default input file names.
pub(super) struct DataDir {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl DataDir {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn with_defaults() -> Self {
        let data = Self::new();
        data.write_catalog();
        data.write_profiles();
        data
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn catalog(&self) -> Utf8PathBuf {
        self.root.join("songs.csv")
    }

    pub(super) fn profiles(&self) -> Utf8PathBuf {
        self.root.join("profiles.json")
    }

    pub(super) fn strategies(&self) -> Utf8PathBuf {
        self.root.join("strategies.json")
    }

    pub(super) fn write_catalog(&self) {
        write_utf8(&self.catalog(), CATALOG_CSV.as_bytes());
    }

    pub(super) fn write_profiles(&self) {
        write_utf8(&self.profiles(), ROCK_PROFILES_JSON.as_bytes());
    }

    pub(super) fn write_strategies(&self) {
        write_utf8(&self.strategies(), EXTRA_STRATEGIES_JSON.as_bytes());
    }
}
