//! Behavioural coverage for parsing user profiles from JSON.
#![cfg(feature = "serde")]
#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

use std::cell::RefCell;

use cadence_core::{UnitFeature, UserProfile};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const COMPLETE: &str = r#"{
    "favorite_genre": "lofi",
    "favorite_mood": "chill",
    "target_energy": 0.4,
    "target_tempo_bpm": 80,
    "target_valence": 0.6,
    "target_danceability": 0.3,
    "target_acousticness": 0.5
}"#;

const WITHOUT_ENERGY: &str = r#"{
    "favorite_genre": "lofi",
    "favorite_mood": "chill",
    "target_tempo_bpm": 80,
    "target_valence": 0.6,
    "target_danceability": 0.3,
    "target_acousticness": 0.5
}"#;

const LEGACY_TEMPO: &str = r#"{
    "favorite_genre": "lofi",
    "favorite_mood": "chill",
    "target_energy": 0.4,
    "target_tempo": 80,
    "target_valence": 0.6,
    "target_danceability": 0.3,
    "target_acousticness": 0.5
}"#;

/// Scenario state shared between steps.
pub struct ProfileContext {
    document: RefCell<&'static str>,
    parsed: RefCell<Option<Result<UserProfile, String>>>,
}

#[fixture]
/// Build a fresh `ProfileContext` for each scenario run.
pub fn context() -> ProfileContext {
    ProfileContext {
        document: RefCell::new(""),
        parsed: RefCell::new(None),
    }
}

#[given("a profile document with every field")]
fn complete_document(context: &ProfileContext) {
    *context.document.borrow_mut() = COMPLETE;
}

#[given("a profile document without a target energy")]
fn document_without_energy(context: &ProfileContext) {
    *context.document.borrow_mut() = WITHOUT_ENERGY;
}

#[given("a profile document using the target_tempo key")]
fn document_with_legacy_tempo(context: &ProfileContext) {
    *context.document.borrow_mut() = LEGACY_TEMPO;
}

#[when("I parse the profile")]
fn parse_profile(context: &ProfileContext) {
    let document = *context.document.borrow();
    let result = serde_json::from_str::<UserProfile>(document).map_err(|err| err.to_string());
    *context.parsed.borrow_mut() = Some(result);
}

#[then("the profile targets an energy of 0.4")]
fn targets_energy(context: &ProfileContext) {
    let profile = parsed_profile(context);
    assert!((profile.target(UnitFeature::Energy) - 0.4).abs() < 1e-12);
}

#[then("the profile targets a tempo of 80 BPM")]
fn targets_tempo(context: &ProfileContext) {
    let profile = parsed_profile(context);
    assert!((profile.target_tempo_bpm() - 80.0).abs() < 1e-12);
}

#[then("parsing fails with a missing target_energy field")]
fn fails_with_missing_energy(context: &ProfileContext) {
    let parsed = context.parsed.borrow();
    let message = parsed
        .as_ref()
        .expect("profile should have been parsed")
        .as_ref()
        .expect_err("parsing should fail");
    assert!(
        message.contains("missing field `target_energy`"),
        "unexpected error: {message}"
    );
}

fn parsed_profile(context: &ProfileContext) -> UserProfile {
    context
        .parsed
        .borrow()
        .clone()
        .expect("profile should have been parsed")
        .expect("profile should be valid")
}

#[scenario(path = "tests/features/user_profile.feature", index = 0)]
fn complete_profile_is_accepted(context: ProfileContext) {
    let _ = context;
}

#[scenario(path = "tests/features/user_profile.feature", index = 1)]
fn missing_energy_is_rejected(context: ProfileContext) {
    let _ = context;
}

#[scenario(path = "tests/features/user_profile.feature", index = 2)]
fn legacy_tempo_key_is_accepted(context: ProfileContext) {
    let _ = context;
}
