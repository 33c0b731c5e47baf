// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared utilities for search modules.

use crate::fields::{display_text, field_text, Field};
use crate::stock::StockStatus;
use crate::types::{CatalogItem, Price, QueryContext, RawItem};

/// Parse a query string into its significant, lowercased words.
///
/// # Example
///
/// ```
/// use librero::parse_query;
///
/// let words = parse_query("Busco El Principito");
/// assert_eq!(words, vec!["busco", "principito"]);
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    QueryContext::parse(query).significant_words
}

/// Build the display item for an available row.
///
/// `ranked` carries the relevance score; ranked items also carry `country`,
/// fallback items carry neither.
pub(crate) fn build_item(raw: &RawItem, stock: StockStatus, ranked: Option<u32>) -> CatalogItem {
    CatalogItem {
        title: display_text(raw, Field::Title),
        author: display_text(raw, Field::Author),
        publisher: display_text(raw, Field::Publisher),
        country: ranked.map(|_| display_text(raw, Field::Country)),
        price: Price::from_text(field_text(raw, Field::Price)),
        stock_text: stock.stock_text,
        available: stock.available,
        relevance_score: ranked,
    }
}
