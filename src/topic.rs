// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Coarse topic tag for a query: first matching rule wins.

use crate::types::Topic;

/// Rules in priority order. Each fires on substring containment of any term.
const TOPIC_RULES: &[(Topic, &[&str])] = &[
    (Topic::Precio, &["precio", "cuesta"]),
    (Topic::Stock, &["stock", "disponible"]),
    (Topic::Autor, &["autor"]),
    (Topic::Recomendacion, &["recomend"]),
];

/// Classify a query. Case-insensitive; falls back to [`Topic::General`].
pub fn classify(query: &str) -> Topic {
    let query = query.to_lowercase();
    TOPIC_RULES
        .iter()
        .find(|(_, terms)| terms.iter().any(|term| query.contains(term)))
        .map_or(Topic::General, |(topic, _)| *topic)
}
