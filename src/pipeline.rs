// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One request, end to end.
//!
//! ```text
//! query + catalog ──▶ rank ──(empty)──▶ first_available ──▶ build_summary ──▶ ResultEnvelope
//!                       │                                         ▲
//!                       └──────────────(non-empty)────────────────┘
//! ```
//!
//! Synchronous, single pass, no shared state. The same query and catalog
//! always produce the same envelope.

use tracing::{debug, info, warn};

use crate::config::SearchConfig;
use crate::contracts::check_envelope;
use crate::search::{first_available, rank_with_context};
use crate::summary::build_summary;
use crate::topic::classify;
use crate::types::{QueryContext, RawItem, ResultEnvelope, ResultSource, DEFAULT_QUERY};

/// Catalog search with fixed limits.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogSearch {
    config: SearchConfig,
}

impl CatalogSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the full pipeline for one message against one catalog snapshot.
    ///
    /// An empty query is replaced by the generic default; a whitespace-only
    /// query is kept as is and ranks nothing. Catalogs longer than
    /// `max_catalog_items` are cut to that length.
    pub fn search(&self, query: &str, catalog: &[RawItem]) -> ResultEnvelope {
        let original_query = if query.is_empty() {
            DEFAULT_QUERY.to_string()
        } else {
            query.to_string()
        };

        let catalog = if catalog.len() > self.config.max_catalog_items {
            warn!(
                received = catalog.len(),
                kept = self.config.max_catalog_items,
                "catalog exceeds limit, truncating"
            );
            &catalog[..self.config.max_catalog_items]
        } else {
            catalog
        };
        debug!(catalog_size = catalog.len(), "catalog received");

        let ctx = QueryContext::parse(&original_query);
        debug!(words = ?ctx.significant_words, "query parsed");

        let ranked = rank_with_context(&ctx, catalog, self.config.rank_limit);
        let (items, source) = if ranked.is_empty() {
            let fallback = first_available(catalog, self.config.fallback_limit);
            let source = if fallback.is_empty() {
                ResultSource::Empty
            } else {
                ResultSource::Fallback
            };
            (fallback, source)
        } else {
            (ranked, ResultSource::Ranked)
        };

        let envelope = ResultEnvelope {
            summary: build_summary(&items),
            topic: classify(&ctx.text),
            result_count: items.len(),
            has_stock: !items.is_empty(),
            original_query,
            items,
            source,
        };

        info!(
            topic = %envelope.topic,
            source = ?envelope.source,
            found = envelope.result_count,
            has_stock = envelope.has_stock,
            "catalog search complete"
        );
        check_envelope(&envelope);
        envelope
    }
}

/// Run the pipeline with default limits.
pub fn search_catalog(query: &str, catalog: &[RawItem]) -> ResultEnvelope {
    CatalogSearch::default().search(query, catalog)
}
