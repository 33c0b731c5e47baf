// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored items get sorted.
//!
//! Higher score first. There is no secondary key: equal scores keep catalog
//! order, which only holds because callers sort with a stable sort.

use crate::types::CatalogItem;
use std::cmp::Ordering;

/// Compare two ranked items, best first.
///
/// Returns `Equal` on tied scores so a stable sort preserves input order.
pub fn compare_results(a: &CatalogItem, b: &CatalogItem) -> Ordering {
    b.score().cmp(&a.score())
}

/// Sort best-first, stable on ties.
pub fn sort_ranked(items: &mut [CatalogItem]) {
    items.sort_by(compare_results);
}
