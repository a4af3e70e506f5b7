//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use itemview::{Catalog, Translator};

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Create a temporary directory with a copy of a fixture
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let fixture_content = load_fixture(name);
    let temp_path = temp_dir.path().join(name);
    fs::write(&temp_path, fixture_content).expect("Failed to write temp fixture");
    (temp_dir, temp_path)
}

/// The sample catalog with the default wear flag filter applied
pub fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::load(fixtures_dir().join("catalog.json"))
        .expect("Failed to load sample catalog");
    catalog.retain_wearable(2);
    catalog
}

pub fn translator() -> Translator {
    Translator::legacy().expect("Legacy table should compile")
}
