//! Testing utilities for Zabbix client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use zabbix_client::testing::load_fixture;
//!
//! let fixture = load_fixture("templates/get_templates.json");
//! ```

use std::path::Path;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "templates/empty.json")
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
