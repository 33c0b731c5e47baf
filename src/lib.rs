// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stock-aware catalog search for grounding a text generator.
//!
//! Given a customer's message and an inventory snapshot, this crate returns the
//! in-stock items that best match the message, or, when nothing matches, a few
//! in-stock items to offer instead. Alongside the items it renders a tightly
//! worded summary that tells a downstream generator exactly what it may
//! recommend, so it cannot invent inventory.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  ingest.rs  │────▶│  search/     │────▶│  summary.rs  │
//! │ (payload,   │     │ (rank,       │     │ (grounding   │
//! │  catalog)   │     │  fallback)   │     │  text)       │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │  fields.rs · stock.rs · scoring/ · topic.rs          │
//! │  (alias lookup, stock gate, weights, topic tag)      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! `pipeline.rs` wires these together into one [`ResultEnvelope`] per request.
//!
//! # Usage
//!
//! ```
//! use librero::{search_catalog, RawItem};
//! use serde_json::json;
//!
//! let catalog = vec![
//!     RawItem::from_value(json!({"Título": "El Principito", "Stock": "5"})).unwrap(),
//! ];
//! let envelope = search_catalog("principito", &catalog);
//!
//! assert!(envelope.has_stock);
//! assert_eq!(envelope.items[0].relevance_score, Some(5));
//! ```

// Module declarations
pub mod config;
pub mod contracts;
pub mod fields;
pub mod ingest;
mod pipeline;
mod scoring;
mod search;
mod stock;
pub mod summary;
mod topic;
mod types;

pub mod testing;

// Re-exports for public API
pub use config::{ConfigError, SearchConfig, DEFAULT_MAX_CATALOG_ITEMS};
pub use fields::{
    Field, AUTHOR_PLACEHOLDER, COUNTRY_PLACEHOLDER, PRICE_PLACEHOLDER, PUBLISHER_PLACEHOLDER,
    STOCK_DEFAULT, TITLE_PLACEHOLDER,
};
pub use ingest::{decode_catalog, extract_query, read_catalog, read_query, IngestError};
pub use pipeline::{search_catalog, CatalogSearch};
pub use scoring::ranking::compare_results;
pub use scoring::{
    field_weight, score_item, word_score, MatchFields, AUTHOR_WEIGHT, MAX_WORD_SCORE,
    PUBLISHER_WEIGHT, TITLE_WEIGHT,
};
pub use search::utils::parse_query;
pub use search::{
    first_available, first_available_default, rank, rank_default, rank_with_context,
    DEFAULT_FALLBACK_LIMIT, DEFAULT_RANK_LIMIT,
};
pub use stock::{
    check_stock, is_available, is_positive_quantity, normalize_stock_text, Blacklist, StockStatus,
};
pub use summary::{build_summary, describe_record};
pub use topic::classify;
pub use types::{
    CatalogItem, Price, QueryContext, RawItem, ResultEnvelope, ResultSource, Topic,
    DEFAULT_QUERY, SIGNIFICANT_WORD_MIN_CHARS,
};
