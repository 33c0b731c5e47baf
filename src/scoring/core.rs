// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance.
//!
//! Each significant query word is tested against three fields by substring
//! containment, not word equality: "princip" hits "El Principito", and so does
//! "cipi". Partial hits are the point; customers type fragments.
//!
//! | Field     | Weight |
//! |-----------|--------|
//! | Title     | 5      |
//! | Author    | 3      |
//! | Publisher | 1      |
//!
//! A word can score in all three fields at once (9 points). A repeated word
//! scores again.

use crate::fields::{match_text, Field};
use crate::types::RawItem;

/// Points for a query word contained in the title.
pub const TITLE_WEIGHT: u32 = 5;

/// Points for a query word contained in the author.
pub const AUTHOR_WEIGHT: u32 = 3;

/// Points for a query word contained in the publisher.
pub const PUBLISHER_WEIGHT: u32 = 1;

/// Most points a single word can earn.
pub const MAX_WORD_SCORE: u32 = TITLE_WEIGHT + AUTHOR_WEIGHT + PUBLISHER_WEIGHT;

/// Weight for a match in `field`. Fields that don't take part in matching weigh 0.
pub fn field_weight(field: Field) -> u32 {
    match field {
        Field::Title => TITLE_WEIGHT,
        Field::Author => AUTHOR_WEIGHT,
        Field::Publisher => PUBLISHER_WEIGHT,
        Field::Country | Field::Price | Field::Stock => 0,
    }
}

/// Lowercased text of the fields a query is matched against.
///
/// Absent fields are empty strings, so placeholders never match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchFields {
    pub title: String,
    pub author: String,
    pub publisher: String,
}

impl MatchFields {
    pub fn from_raw(raw: &RawItem) -> Self {
        Self {
            title: match_text(raw, Field::Title),
            author: match_text(raw, Field::Author),
            publisher: match_text(raw, Field::Publisher),
        }
    }
}

/// Points one (already lowercased) word earns against an item's fields.
pub fn word_score(word: &str, fields: &MatchFields) -> u32 {
    let mut score = 0;
    if fields.title.contains(word) {
        score += TITLE_WEIGHT;
    }
    if fields.author.contains(word) {
        score += AUTHOR_WEIGHT;
    }
    if fields.publisher.contains(word) {
        score += PUBLISHER_WEIGHT;
    }
    score
}

/// Total relevance of an item for a list of significant words.
pub fn score_item<S: AsRef<str>>(words: &[S], fields: &MatchFields) -> u32 {
    words
        .iter()
        .map(|word| word_score(word.as_ref(), fields))
        .sum()
}
