// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stock gate: is this row something a customer can buy right now?
//!
//! A row passes only if its stock cell, after normalization, is neither a
//! rejected literal nor anything other than a positive finite number.
//!
//! # Normalization
//!
//! 1. Take the first present `Stock`/`stock` cell, or `"0"` when there is none.
//! 2. Coerce to text and strip one trailing `".0"` (sheets export `3` as `3.0`).
//! 3. Trim, then lowercase.
//!
//! # Two blacklists
//!
//! The ranked path rejects `"0"`, `""`, `"no"`, `"agotado"`, `"sin stock"`.
//! The fallback path omits `"sin stock"`. The numeric check rejects that text
//! on both paths anyway, so the two gates agree on every input today; the
//! lists stay separate so a future change to either path is explicit.
//!
//! # Strictness
//!
//! `"5 unidades"` is *unavailable*: the numeric parse fails. This is the
//! current product rule, kept until someone confirms otherwise.

use crate::fields::{field_text, Field, STOCK_DEFAULT};
use crate::types::RawItem;

const RANKED_REJECTS: &[&str] = &["0", "", "no", "agotado", "sin stock"];
const FALLBACK_REJECTS: &[&str] = &["0", "", "no", "agotado"];

/// Which rejected-literal list a gate check uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Blacklist {
    /// Used by the ranker.
    Ranked,
    /// Used by the fallback selector (no `"sin stock"` literal).
    Fallback,
}

impl Blacklist {
    pub const fn literals(self) -> &'static [&'static str] {
        match self {
            Blacklist::Ranked => RANKED_REJECTS,
            Blacklist::Fallback => FALLBACK_REJECTS,
        }
    }

    pub fn rejects(self, stock_text: &str) -> bool {
        self.literals().contains(&stock_text)
    }
}

/// Gate verdict for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockStatus {
    pub available: bool,
    /// Normalized stock text, kept even when unavailable.
    pub stock_text: String,
}

/// Normalize a raw stock cell: trim, drop a trailing `.0`, lowercase.
///
/// Padding around the cell never hides the `.0` (`" 3.0 "` becomes `"3"`).
pub fn normalize_stock_text(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_suffix(".0")
        .unwrap_or(trimmed)
        .trim()
        .to_lowercase()
}

/// Whether normalized stock text parses as a positive, finite quantity.
pub fn is_positive_quantity(stock_text: &str) -> bool {
    stock_text
        .parse::<f64>()
        .map(|quantity| quantity.is_finite() && quantity > 0.0)
        .unwrap_or(false)
}

/// Run the gate over one row. Pure: the row is only read.
pub fn check_stock(raw: &RawItem, blacklist: Blacklist) -> StockStatus {
    let cell = field_text(raw, Field::Stock).unwrap_or_else(|| STOCK_DEFAULT.to_string());
    let stock_text = normalize_stock_text(&cell);
    let available = !blacklist.rejects(&stock_text) && is_positive_quantity(&stock_text);
    StockStatus {
        available,
        stock_text,
    }
}

/// Shorthand for the ranked-path verdict.
pub fn is_available(raw: &RawItem) -> bool {
    check_stock(raw, Blacklist::Ranked).available
}
