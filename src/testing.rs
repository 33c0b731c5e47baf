//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical builders for catalog rows and items so tests
//! don't each invent their own spreadsheet shapes.

#![doc(hidden)]

use serde_json::{json, Map, Value};

use crate::fields::{COUNTRY_PLACEHOLDER, PUBLISHER_PLACEHOLDER};
use crate::types::{CatalogItem, Price, RawItem};

/// Create a catalog row with the canonical Spanish headers.
pub fn make_row(title: &str, author: &str, publisher: &str, stock: &str) -> RawItem {
    make_row_from(json!({
        "Título": title,
        "Autor": author,
        "Editorial": publisher,
        "País": "Argentina",
        "Precio": "1500",
        "Stock": stock,
    }))
}

/// Create a catalog row with only a title and a stock cell.
pub fn make_row_simple(title: &str, stock: &str) -> RawItem {
    make_row_from(json!({ "Título": title, "Stock": stock }))
}

/// Create a row from arbitrary JSON. Non-objects become an empty row.
pub fn make_row_from(value: Value) -> RawItem {
    RawItem::from_value(value).unwrap_or_else(|| RawItem::new(Map::new()))
}

/// Create `count` in-stock rows titled "Libro 0", "Libro 1", ...
pub fn make_in_stock_catalog(count: usize) -> Vec<RawItem> {
    (0..count)
        .map(|i| make_row_simple(&format!("Libro {}", i), "1"))
        .collect()
}

/// Create a ranked item with the given score.
pub fn make_ranked_item(title: &str, score: u32) -> CatalogItem {
    CatalogItem {
        title: title.to_string(),
        author: format!("Autor de {}", title),
        publisher: PUBLISHER_PLACEHOLDER.to_string(),
        country: Some(COUNTRY_PLACEHOLDER.to_string()),
        price: Price::Ask,
        stock_text: "1".to_string(),
        available: true,
        relevance_score: Some(score),
    }
}

/// Create a fallback item (no country, no score).
pub fn make_fallback_item(title: &str, stock: &str) -> CatalogItem {
    CatalogItem {
        title: title.to_string(),
        author: format!("Autor de {}", title),
        publisher: PUBLISHER_PLACEHOLDER.to_string(),
        country: None,
        price: Price::Listed("1000".to_string()),
        stock_text: stock.to_string(),
        available: true,
        relevance_score: None,
    }
}
