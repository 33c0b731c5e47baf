// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how catalog matches get their numbers.
//!
//! A query word found in a title is worth more than one found in an author
//! name, which is worth more than one found in a publisher. Scores are summed
//! per word and only ever compared within one ranking call.

mod core;
pub mod ranking;

pub use self::core::*;
