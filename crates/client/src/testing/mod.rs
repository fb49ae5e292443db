//! Testing utilities for Grafana client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use grafana_client::testing::load_fixture;
//!
//! let fixture = load_fixture("dashboards/sample_dashboard.json");
//! ```

use std::path::Path;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "search/dashboards.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Load a fixture and decode it into a model type.
///
/// # Panics
/// - If the fixture cannot be loaded
/// - If it does not decode into `T`
pub fn load_model<T: serde::de::DeserializeOwned>(fixture_path: &str) -> T {
    serde_json::from_value(load_fixture(fixture_path))
        .unwrap_or_else(|e| panic!("Fixture {fixture_path} does not decode: {e}"))
}
