//! Shared test utilities and fixtures.

#![allow(dead_code)]

use librero::{read_catalog, CatalogItem, RawItem};
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

// Re-export canonical test utilities from librero::testing
pub use librero::testing::{make_in_stock_catalog, make_row, make_row_from, make_row_simple};

// ============================================================================
// FIXTURES
// ============================================================================

/// Mixed-alias catalog with in-stock, sold-out, and malformed rows.
pub const CATALOG_FIXTURE: &str = "tests/fixtures/catalogo.json";

/// Upstream message payload asking about Borges.
pub const PAYLOAD_FIXTURE: &str = "tests/fixtures/payload.json";

static FIXTURE_CATALOG: LazyLock<Vec<RawItem>> = LazyLock::new(|| {
    read_catalog(Path::new(CATALOG_FIXTURE)).expect("Failed to read catalog fixture")
});

/// The fixture catalog (the malformed entry already skipped).
pub fn fixture_catalog() -> Vec<RawItem> {
    FIXTURE_CATALOG.clone()
}

// ============================================================================
// BUILDERS
// ============================================================================

/// Build rows from a JSON array literal.
pub fn rows(value: Value) -> Vec<RawItem> {
    value
        .as_array()
        .expect("rows() takes a JSON array")
        .iter()
        .cloned()
        .map(make_row_from)
        .collect()
}

/// Titles of the given items, in order.
pub fn titles(items: &[CatalogItem]) -> Vec<&str> {
    items.iter().map(|item| item.title.as_str()).collect()
}

// ============================================================================
// TEMP FILES
// ============================================================================

/// Write `value` as JSON into a fresh temp dir. Keep the TempDir alive.
pub fn write_temp_json(name: &str, value: &Value) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create temp file");
    file.write_all(value.to_string().as_bytes())
        .expect("Failed to write temp file");
    (dir, path)
}

// ============================================================================
// INVARIANT ASSERTIONS
// ============================================================================

/// Assert ranked items are available, scored, and best-first.
pub fn assert_ranked_well_formed(items: &[CatalogItem], limit: usize) {
    assert!(
        items.len() <= limit,
        "INVARIANT VIOLATED: {} ranked items exceed limit {}",
        items.len(),
        limit
    );
    for (i, item) in items.iter().enumerate() {
        assert!(item.available, "INVARIANT VIOLATED: items[{}] unavailable", i);
        assert!(
            item.relevance_score.unwrap_or(0) > 0,
            "INVARIANT VIOLATED: items[{}] ranked with no score",
            i
        );
    }
    for pair in items.windows(2) {
        assert!(
            pair[0].score() >= pair[1].score(),
            "INVARIANT VIOLATED: ranked output not sorted: {} < {}",
            pair[0].score(),
            pair[1].score()
        );
    }
}
