#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for catalog ranking.

use std::cell::RefCell;

use cadence_core::test_support::{rock_profile, storm_runner, sunrise_city};
use cadence_core::{Catalog, Signal, UserProfile};
use cadence_scorer::{StrategyRegistry, recommend_catalog};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Owned view of one ranked song.
#[derive(Debug, Clone)]
struct Ranked {
    title: String,
    genre_points: Option<f64>,
}

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    registry: StrategyRegistry,
    catalog: RefCell<Catalog>,
    profile: RefCell<Option<UserProfile>>,
    applied: RefCell<Option<String>>,
    ranked: RefCell<Vec<Ranked>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        registry: StrategyRegistry::builtin(),
        catalog: RefCell::new(Catalog::empty()),
        profile: RefCell::new(None),
        applied: RefCell::new(None),
        ranked: RefCell::new(Vec::new()),
    }
}

#[given("a catalog with a pop track and a rock track")]
fn pop_and_rock(context: &TestContext) {
    let catalog = Catalog::new(vec![sunrise_city(), storm_runner()]).expect("valid catalog");
    *context.catalog.borrow_mut() = catalog;
}

#[given("an empty catalog")]
fn empty_catalog(context: &TestContext) {
    *context.catalog.borrow_mut() = Catalog::empty();
}

#[given("a listener who wants intense rock")]
fn rock_listener(context: &TestContext) {
    *context.profile.borrow_mut() = Some(rock_profile());
}

#[when("I request {count} recommendations with the {name:word} strategy")]
fn request_recommendations(count: usize, name: String, context: &TestContext) {
    let strategy = context.registry.resolve(name.trim_matches('"'));
    let profile_slot = context.profile.borrow();
    let profile = profile_slot.as_ref().expect("profile should be set");
    let catalog = context.catalog.borrow();
    let ranked = recommend_catalog(profile, &catalog, strategy, count)
        .into_iter()
        .map(|scored| Ranked {
            title: scored.song.title.clone(),
            genre_points: scored.breakdown.points(Signal::Genre),
        })
        .collect();
    *context.ranked.borrow_mut() = ranked;
    *context.applied.borrow_mut() = Some(strategy.name.clone());
}

#[then("the first recommendation is {title}")]
fn first_is(title: String, context: &TestContext) {
    let ranked = context.ranked.borrow();
    let first = ranked.first().expect("at least one recommendation");
    assert_eq!(first.title, title.trim_matches('"'));
}

#[then("the first recommendation explains a genre match")]
fn first_has_genre_reason(context: &TestContext) {
    let ranked = context.ranked.borrow();
    let first = ranked.first().expect("at least one recommendation");
    assert_eq!(first.genre_points, Some(2.0));
}

#[then("the strategy applied is balanced")]
fn applied_balanced(context: &TestContext) {
    assert_eq!(context.applied.borrow().as_deref(), Some("balanced"));
}

#[then("no recommendations are returned")]
fn none_returned(context: &TestContext) {
    assert!(context.ranked.borrow().is_empty());
}

#[then("{count} recommendations are returned")]
fn count_returned(count: usize, context: &TestContext) {
    assert_eq!(context.ranked.borrow().len(), count);
}

#[scenario(path = "tests/features/recommend.feature", index = 0)]
fn rock_listener_gets_rock_first(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommend.feature", index = 1)]
fn unknown_strategy_falls_back(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommend.feature", index = 2)]
fn empty_catalog_yields_nothing(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommend.feature", index = 3)]
fn oversized_request_returns_catalog(context: TestContext) {
    let _ = context;
}
