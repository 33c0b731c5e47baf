//! Property tests for the stock gate.

use super::{catalog_strategy, query_strategy, stock_strategy};
use librero::{
    check_stock, first_available, is_available, is_positive_quantity, normalize_stock_text,
    rank, Blacklist, RawItem,
};
use proptest::prelude::*;
use serde_json::json;

fn row_with_stock(stock: serde_json::Value) -> RawItem {
    RawItem::from_value(json!({"Título": "Rayuela", "Stock": stock})).unwrap()
}

proptest! {
    /// An item is offered only if its row passes the stock gate.
    #[test]
    fn prop_ranked_items_are_in_stock(
        query in query_strategy(),
        catalog in catalog_strategy()
    ) {
        let available_rows = catalog.iter().filter(|row| is_available(row)).count();
        let ranked = rank(&query, &catalog, 5);
        prop_assert!(ranked.len() <= available_rows);
        for item in &ranked {
            prop_assert!(item.available);
            prop_assert!(is_positive_quantity(&item.stock_text));
        }
    }

    #[test]
    fn prop_fallback_items_are_in_stock(catalog in catalog_strategy()) {
        for item in first_available(&catalog, 3) {
            prop_assert!(item.available);
            prop_assert!(is_positive_quantity(&item.stock_text));
        }
    }

    /// With the numeric check in place both blacklists agree.
    #[test]
    fn prop_blacklists_agree(stock in stock_strategy()) {
        let row = row_with_stock(stock);
        prop_assert_eq!(
            check_stock(&row, Blacklist::Ranked).available,
            check_stock(&row, Blacklist::Fallback).available
        );
    }

    /// Any positive integer count passes, whether written as int, string or float.
    #[test]
    fn prop_positive_counts_pass(n in 1u32..100_000) {
        prop_assert!(is_available(&row_with_stock(json!(n))));
        prop_assert!(is_available(&row_with_stock(json!(n.to_string()))));
        let float_text = format!("{}.0", n);
        prop_assert!(is_available(&row_with_stock(json!(float_text))));
    }

    /// Normalization is stable once applied.
    #[test]
    fn prop_normalize_idempotent(text in "[ 0-9a-zA-Z.]{0,10}") {
        let once = normalize_stock_text(&text);
        let twice = normalize_stock_text(&once);
        // A second ".0" may be stripped ("1.0.0" -> "1.0" -> "1"); otherwise stable.
        if !once.ends_with(".0") {
            prop_assert_eq!(once, twice);
        }
    }
}
