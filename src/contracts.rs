// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for search output.
//!
//! Debug-mode assertions for the properties every caller relies on. These
//! contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Fail loudly in tests the moment an invariant slips
//!
//! | Contract Function       | Property                                          |
//! |-------------------------|---------------------------------------------------|
//! | `check_all_available`   | No unavailable item ever leaves the search module |
//! | `check_ranked_sorted`   | Ranked output is best-first                       |
//! | `check_within_limit`    | Output never exceeds the requested limit          |
//! | `check_fallback_shape`  | Fallback items carry no country and no score      |
//! | `check_envelope`        | Envelope counts agree with its items              |

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Field weights must stay strictly ordered and positive.
const _: () = {
    use crate::scoring::{AUTHOR_WEIGHT, PUBLISHER_WEIGHT, TITLE_WEIGHT};
    assert!(TITLE_WEIGHT > AUTHOR_WEIGHT);
    assert!(AUTHOR_WEIGHT > PUBLISHER_WEIGHT);
    assert!(PUBLISHER_WEIGHT > 0);
};

use crate::types::{CatalogItem, ResultEnvelope};

// ============================================================================
// ITEM CONTRACTS
// ============================================================================

/// Check that every item is available.
///
/// # Panics (debug builds only)
/// Panics on the first item with `available == false`.
#[inline]
pub fn check_all_available(items: &[CatalogItem]) {
    for (i, item) in items.iter().enumerate() {
        debug_assert!(
            item.available,
            "Contract violation: items[{}] ('{}') is unavailable (stock '{}')",
            i,
            item.title,
            item.stock_text
        );
    }
}

/// Check that ranked items are in non-increasing score order.
#[inline]
pub fn check_ranked_sorted(items: &[CatalogItem]) {
    for i in 1..items.len() {
        debug_assert!(
            items[i - 1].score() >= items[i].score(),
            "Contract violation: ranked items[{}] score {} < items[{}] score {}",
            i - 1,
            items[i - 1].score(),
            i,
            items[i].score()
        );
    }
}

#[inline]
pub fn check_within_limit(items: &[CatalogItem], limit: usize) {
    debug_assert!(
        items.len() <= limit,
        "Contract violation: {} items exceed limit {}",
        items.len(),
        limit
    );
}

/// Check that fallback items have the reduced shape.
#[inline]
pub fn check_fallback_shape(items: &[CatalogItem]) {
    for (i, item) in items.iter().enumerate() {
        debug_assert!(
            item.country.is_none() && item.relevance_score.is_none(),
            "Contract violation: fallback items[{}] ('{}') carries ranked-only fields",
            i,
            item.title
        );
    }
}

// ============================================================================
// ENVELOPE CONTRACTS
// ============================================================================

/// Check that an envelope's derived fields agree with its items.
#[inline]
pub fn check_envelope(envelope: &ResultEnvelope) {
    debug_assert_eq!(
        envelope.result_count,
        envelope.items.len(),
        "Contract violation: result_count disagrees with items"
    );
    debug_assert_eq!(
        envelope.has_stock,
        !envelope.items.is_empty(),
        "Contract violation: has_stock disagrees with items"
    );
    check_all_available(&envelope.items);
}
