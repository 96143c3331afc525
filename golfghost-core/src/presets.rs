//! Built-in course records for first-run catalogs.

use crate::storage::RawCatalog;

const PRESETS_JSON: &str = include_str!("../assets/presets.json");

/// Parse the embedded preset catalog, keyed by display name.
#[must_use]
pub fn preset_catalog() -> RawCatalog {
    serde_json::from_str(PRESETS_JSON).unwrap_or_else(|_| RawCatalog::new())
}
