//! Fallback selection when nothing ranks.

use super::common::{fixture_catalog, rows, titles};
use librero::{first_available, first_available_default, search_catalog, ResultSource};
use serde_json::json;

#[test]
fn test_fallback_respects_catalog_order_and_stock() {
    let catalog = fixture_catalog();
    let items = first_available_default(&catalog);
    assert_eq!(titles(&items), vec!["El Principito", "Rayuela", "El Aleph"]);
}

#[test]
fn test_fallback_shape() {
    let catalog = fixture_catalog();
    for item in first_available(&catalog, 3) {
        assert!(item.available);
        assert!(item.country.is_none());
        assert!(item.relevance_score.is_none());
    }
}

#[test]
fn test_fallback_only_when_ranking_is_empty() {
    let catalog = fixture_catalog();

    let envelope = search_catalog("rayuela", &catalog);
    assert_eq!(envelope.source, ResultSource::Ranked);
    assert_eq!(titles(&envelope.items), vec!["Rayuela"]);

    let envelope = search_catalog("recetas de cocina", &catalog);
    assert_eq!(envelope.source, ResultSource::Fallback);
    assert_eq!(envelope.result_count, 3);
}

#[test]
fn test_fallback_fewer_than_limit() {
    let catalog = rows(json!([
        {"Título": "Uno", "Stock": "no"},
        {"Título": "Dos", "stock": "1"}
    ]));
    let items = first_available(&catalog, 3);
    assert_eq!(titles(&items), vec!["Dos"]);
}

#[test]
fn test_query_without_significant_words_falls_back() {
    let catalog = fixture_catalog();
    let envelope = search_catalog("el y la", &catalog);
    assert_eq!(envelope.source, ResultSource::Fallback);
}
