// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword ranker.
//!
//! For every row: gate on stock, score the survivors against the query's
//! significant words, drop zero scores, stable-sort best-first, truncate.
//! Output is empty exactly when no in-stock row had any keyword overlap, which
//! includes every query without a word of three or more characters.

use tracing::debug;

use super::utils::build_item;
use super::DEFAULT_RANK_LIMIT;
use crate::contracts::{check_all_available, check_ranked_sorted, check_within_limit};
use crate::scoring::ranking::sort_ranked;
use crate::scoring::{score_item, MatchFields};
use crate::stock::{check_stock, Blacklist};
use crate::types::{CatalogItem, QueryContext, RawItem};

/// Rank `catalog` against `query`, returning at most `limit` items.
pub fn rank(query: &str, catalog: &[RawItem], limit: usize) -> Vec<CatalogItem> {
    rank_with_context(&QueryContext::parse(query), catalog, limit)
}

/// [`rank`] with the default limit of five.
pub fn rank_default(query: &str, catalog: &[RawItem]) -> Vec<CatalogItem> {
    rank(query, catalog, DEFAULT_RANK_LIMIT)
}

/// Rank against an already-parsed query.
pub fn rank_with_context(
    query: &QueryContext,
    catalog: &[RawItem],
    limit: usize,
) -> Vec<CatalogItem> {
    if !query.has_significant_words() {
        debug!("no significant words in query, nothing to rank");
        return Vec::new();
    }

    let mut in_stock = 0usize;
    let mut results: Vec<CatalogItem> = catalog
        .iter()
        .filter_map(|raw| {
            let stock = check_stock(raw, Blacklist::Ranked);
            if !stock.available {
                return None;
            }
            in_stock += 1;

            let score = score_item(&query.significant_words, &MatchFields::from_raw(raw));
            (score > 0).then(|| build_item(raw, stock, Some(score)))
        })
        .collect();

    debug!(
        words = ?query.significant_words,
        in_stock,
        matched = results.len(),
        "ranked catalog"
    );

    sort_ranked(&mut results);
    results.truncate(limit);

    check_all_available(&results);
    check_ranked_sorted(&results);
    check_within_limit(&results, limit);
    results
}
