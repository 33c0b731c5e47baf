// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search algorithms: from a query and a catalog to items worth showing.
//!
//! Two strategies, tried in order. The ranker keeps in-stock rows whose
//! title, author, or publisher contains a query word and orders them by
//! relevance. If that yields nothing, the fallback selector offers the first
//! few in-stock rows regardless of relevance, so the customer still hears
//! about something that can actually be bought.
//!
//! Neither path ever emits an unavailable item.

mod fallback;
mod ranker;
pub mod utils;

pub use fallback::*;
pub use ranker::*;

/// Ranked results returned when no limit is given.
pub const DEFAULT_RANK_LIMIT: usize = 5;

/// Fallback items returned when no limit is given.
pub const DEFAULT_FALLBACK_LIMIT: usize = 3;
