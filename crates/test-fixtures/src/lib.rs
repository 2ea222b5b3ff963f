//! Test fixture loader for Vintage golden scenarios and sample registries.
//!
//! Provides typed deserialization of fixture files and helpers for loading
//! them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the fixture files (this crate's directory).
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let content = load_fixture_text(relative_path);
    serde_json::from_str(&content).unwrap_or_else(|e| {
        panic!(
            "Failed to parse fixture {}: {}",
            fixture_path(relative_path).display(),
            e
        )
    })
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Load a fixture file as text (TOML registries, raw evidence).
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// The sample registry every crate's tests load.
pub fn sample_registry_toml() -> String {
    load_fixture_text("registry/sample_registry.toml")
}

/// A golden assessment scenario: one `assess` call and its expected verdict.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub input: GoldenInput,
    pub expected: GoldenExpected,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenInput {
    pub technology: String,
    pub claim: String,
    #[serde(default)]
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenExpected {
    pub confidence: String,
    pub response_pattern: String,
    /// `None` when no era is inferred (unknown or era-less technology).
    pub inferred_era: Option<String>,
    #[serde(default)]
    pub era_score: Option<f64>,
    /// Conflict kind ids, in order.
    #[serde(default)]
    pub conflicts: Vec<String>,
}

/// Load every golden scenario under `golden/`.
pub fn golden_scenarios() -> Vec<GoldenScenario> {
    list_fixtures("golden")
        .iter()
        .map(|path| {
            let name = path
                .strip_prefix(fixtures_root())
                .unwrap_or(path)
                .to_string_lossy()
                .into_owned();
            load_fixture(&name)
        })
        .collect()
}
