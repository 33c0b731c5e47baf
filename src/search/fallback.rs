// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fallback selector: the first few things in stock, in catalog order.
//!
//! Only consulted when the ranker found nothing. Uses the fallback blacklist
//! (see [`crate::stock`]) and emits items without `country` or score.

use tracing::debug;

use super::utils::build_item;
use super::DEFAULT_FALLBACK_LIMIT;
use crate::contracts::{check_all_available, check_fallback_shape, check_within_limit};
use crate::stock::{check_stock, Blacklist};
use crate::types::{CatalogItem, RawItem};

/// First `limit` available rows, in catalog order. Stops scanning once full.
pub fn first_available(catalog: &[RawItem], limit: usize) -> Vec<CatalogItem> {
    let items: Vec<CatalogItem> = catalog
        .iter()
        .filter_map(|raw| {
            let stock = check_stock(raw, Blacklist::Fallback);
            stock.available.then(|| build_item(raw, stock, None))
        })
        .take(limit)
        .collect();

    debug!(available = items.len(), limit, "selected fallback items");

    check_all_available(&items);
    check_fallback_shape(&items);
    check_within_limit(&items, limit);
    items
}

/// [`first_available`] with the default limit of three.
pub fn first_available_default(catalog: &[RawItem]) -> Vec<CatalogItem> {
    first_available(catalog, DEFAULT_FALLBACK_LIMIT)
}
