#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for loading catalogs from disk.

use std::cell::RefCell;

use cadence_catalog::{CatalogError, load_catalog};
use cadence_core::Catalog;
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

const THREE_SONGS: &str = "\
id,title,artist,genre,mood,energy,tempo_bpm,valence,danceability,acousticness
1,Sunrise City,Neon Echo,pop,happy,0.82,118,0.84,0.79,0.18
2,Midnight Coding,LoRoom,lofi,chill,0.42,78,0.56,0.62,0.71
3,Storm Runner,Voltline,rock,intense,0.91,152,0.48,0.66,0.10
";

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    temp_dir: TempDir,
    path: RefCell<Option<Utf8PathBuf>>,
    loaded: RefCell<Option<Result<Catalog, CatalogError>>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        temp_dir: TempDir::new().expect("create tempdir for scenario"),
        path: RefCell::new(None),
        loaded: RefCell::new(None),
    }
}

fn temp_path(context: &TestContext, name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(context.temp_dir.path().join(name)).expect("utf8 temp path")
}

#[given("a catalog file with 3 songs")]
fn three_song_file(context: &TestContext) {
    let path = temp_path(context, "songs.csv");
    std::fs::write(path.as_std_path(), THREE_SONGS).expect("write catalog fixture");
    *context.path.borrow_mut() = Some(path);
}

#[given("a catalog path that does not exist")]
fn missing_file(context: &TestContext) {
    *context.path.borrow_mut() = Some(temp_path(context, "absent.csv"));
}

#[given("the bundled demo catalog")]
fn demo_catalog(context: &TestContext) {
    let path = Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data/songs.csv");
    *context.path.borrow_mut() = Some(path);
}

#[when("I load the catalog")]
fn load(context: &TestContext) {
    let path = context.path.borrow().clone().expect("path should be set");
    *context.loaded.borrow_mut() = Some(load_catalog(&path));
}

#[then("the catalog holds {count} songs")]
fn holds(count: usize, context: &TestContext) {
    let loaded = context.loaded.borrow();
    let catalog = loaded
        .as_ref()
        .expect("catalog should have been loaded")
        .as_ref()
        .expect("catalog should be valid");
    assert_eq!(catalog.len(), count);
}

#[then("the catalog tempo spans {min} to {max} BPM")]
fn tempo_spans(min: f64, max: f64, context: &TestContext) {
    let loaded = context.loaded.borrow();
    let catalog = loaded
        .as_ref()
        .expect("catalog should have been loaded")
        .as_ref()
        .expect("catalog should be valid");
    let bounds = catalog.tempo_bounds().expect("non-empty catalog");
    assert!((bounds.min() - min).abs() < f64::EPSILON);
    assert!((bounds.max() - max).abs() < f64::EPSILON);
}

#[then("loading fails because the file cannot be opened")]
fn open_fails(context: &TestContext) {
    let loaded = context.loaded.borrow();
    let err = loaded
        .as_ref()
        .expect("catalog should have been loaded")
        .as_ref()
        .expect_err("loading should fail");
    assert!(
        matches!(err, CatalogError::OpenCatalog { path, .. } if path.as_str().ends_with("absent.csv")),
        "unexpected error: {err}"
    );
}

#[scenario(path = "tests/features/catalog.feature", index = 0)]
fn well_formed_catalog_loads(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/catalog.feature", index = 1)]
fn missing_catalog_is_reported(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/catalog.feature", index = 2)]
fn bundled_demo_catalog_is_valid(context: TestContext) {
    let _ = context;
}
