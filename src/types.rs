// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a catalog search.
//!
//! Raw rows come in, normalized items and one envelope go out. Nothing here
//! outlives a single request: items are built fresh from rows, ordered, and
//! handed to the caller.
//!
//! | Type            | Role                                                    |
//! |-----------------|---------------------------------------------------------|
//! | `RawItem`       | One catalog row, untyped, inconsistently keyed          |
//! | `CatalogItem`   | Normalized, purchasable item (ranked or fallback shape) |
//! | `Price`         | Given price text, or "ask"                              |
//! | `QueryContext`  | Lowercased query plus its significant words             |
//! | `Topic`         | Coarse query category                                   |
//! | `ResultEnvelope`| The per-request output record                           |
//!
//! # Invariants
//!
//! - **CatalogItem**: `available` is always `true` for items that leave the
//!   search module. Unavailable rows are dropped, never emitted.
//! - **CatalogItem**: `relevance_score` and `country` are `Some` exactly for
//!   ranked items, `None` exactly for fallback items.
//! - **ResultEnvelope**: `result_count == items.len()` and
//!   `has_stock == !items.is_empty()`.
//!
//! Serialized names follow the downstream workflow (`titulo`, `userMessage`,
//! `hasStock`, ...), not the Rust field names.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

use crate::fields::PRICE_PLACEHOLDER;

// =============================================================================
// RAW INPUT
// =============================================================================

/// One catalog row as the spreadsheet reader produced it.
///
/// Keys are whatever the sheet's header row said; values may be strings,
/// numbers, or missing. Read through [`crate::fields`], never by key directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawItem(Map<String, Value>);

impl RawItem {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Wrap a JSON value, if it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for RawItem {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

// =============================================================================
// NORMALIZED OUTPUT
// =============================================================================

/// Price as listed, or the "ask" sentinel when the row had none.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Price {
    Listed(String),
    Ask,
}

impl Price {
    pub fn from_text(text: Option<String>) -> Self {
        match text {
            Some(text) => Price::Listed(text),
            None => Price::Ask,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Price::Listed(text) => text,
            Price::Ask => PRICE_PLACEHOLDER,
        }
    }

    /// Price as it reads in a summary line: `$1500`, or the bare sentinel.
    pub fn with_currency(&self) -> String {
        match self {
            Price::Listed(text) if text.starts_with('$') => text.clone(),
            Price::Listed(text) => format!("${}", text),
            Price::Ask => PRICE_PLACEHOLDER.to_string(),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A purchasable catalog item, normalized for display.
///
/// Built by the ranker (with `country` and `relevance_score`) or by the
/// fallback selector (without either). Display fields keep the row's casing;
/// absent fields hold the placeholder sentinels from [`crate::fields`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "editorial")]
    pub publisher: String,
    #[serde(rename = "pais", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(rename = "precio")]
    pub price: Price,
    /// Normalized stock quantity, digits as text (`"3"` for a `3.0` cell).
    #[serde(rename = "stock")]
    pub stock_text: String,
    #[serde(rename = "disponible")]
    pub available: bool,
    #[serde(rename = "relevanceScore", skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<u32>,
}

impl CatalogItem {
    /// Whether this item came out of the ranker.
    pub fn is_ranked(&self) -> bool {
        self.relevance_score.is_some()
    }

    /// Ranking score, 0 for fallback items.
    pub fn score(&self) -> u32 {
        self.relevance_score.unwrap_or(0)
    }
}

// =============================================================================
// QUERY
// =============================================================================

/// Words of this many characters or more take part in matching.
pub const SIGNIFICANT_WORD_MIN_CHARS: usize = 3;

/// Query used when the incoming message carries no text.
pub const DEFAULT_QUERY: &str = "consulta general";

/// The user's message, prepared for matching.
///
/// `significant_words` keeps query order and repeats: a word typed twice
/// counts twice toward every score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryContext {
    pub text: String,
    pub significant_words: Vec<String>,
}

impl QueryContext {
    /// Lowercase, trim, and split on whitespace, keeping words longer than two characters.
    pub fn parse(query: &str) -> Self {
        let text = query.to_lowercase().trim().to_string();
        let significant_words = text
            .split_whitespace()
            .filter(|word| word.chars().count() >= SIGNIFICANT_WORD_MIN_CHARS)
            .map(str::to_string)
            .collect();
        Self {
            text,
            significant_words,
        }
    }

    pub fn has_significant_words(&self) -> bool {
        !self.significant_words.is_empty()
    }
}

// =============================================================================
// TOPIC
// =============================================================================

/// Coarse category of the user's question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Precio,
    Stock,
    Autor,
    Recomendacion,
    General,
}

impl Topic {
    pub fn as_str(self) -> &'static str {
        match self {
            Topic::Precio => "precio",
            Topic::Stock => "stock",
            Topic::Autor => "autor",
            Topic::Recomendacion => "recomendacion",
            Topic::General => "general",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ENVELOPE
// =============================================================================

/// Which path produced the envelope's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultSource {
    /// Keyword matches, ordered by relevance.
    Ranked,
    /// No keyword match; first in-stock items in catalog order.
    Fallback,
    /// Nothing in stock at all.
    Empty,
}

/// Everything the response-assembly step needs for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultEnvelope {
    /// The message as received (not lowercased).
    #[serde(rename = "userMessage")]
    pub original_query: String,
    /// Grounding block for the downstream generator.
    #[serde(rename = "context")]
    pub summary: String,
    #[serde(rename = "queryType")]
    pub topic: Topic,
    #[serde(rename = "foundBooks")]
    pub result_count: usize,
    #[serde(rename = "books")]
    pub items: Vec<CatalogItem>,
    #[serde(rename = "hasStock")]
    pub has_stock: bool,
    #[serde(skip)]
    pub source: ResultSource,
}
