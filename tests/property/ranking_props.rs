//! Property tests for ranking against a direct oracle.

use super::{catalog_strategy, query_strategy};
use librero::{is_available, rank, RawItem, AUTHOR_WEIGHT, PUBLISHER_WEIGHT, TITLE_WEIGHT};
use proptest::prelude::*;

// =============================================================================
// ORACLE
// =============================================================================

fn cell(row: &RawItem, key: &str) -> String {
    row.get(key)
        .and_then(|value| value.as_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Reference score: weights summed over every (word, field) containment hit.
fn oracle_score(query: &str, row: &RawItem) -> u32 {
    let title = cell(row, "Título");
    let author = cell(row, "Autor");
    let publisher = cell(row, "Editorial");

    query
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() > 2)
        .map(|word| {
            let mut score = 0;
            if title.contains(word) {
                score += TITLE_WEIGHT;
            }
            if author.contains(word) {
                score += AUTHOR_WEIGHT;
            }
            if publisher.contains(word) {
                score += PUBLISHER_WEIGHT;
            }
            score
        })
        .sum()
}

/// Reference ranking: filter, score, stable sort, cut.
fn oracle_rank(query: &str, catalog: &[RawItem], limit: usize) -> Vec<(usize, u32)> {
    let mut scored: Vec<(usize, u32)> = catalog
        .iter()
        .enumerate()
        .filter(|(_, row)| is_available(row))
        .map(|(i, row)| (i, oracle_score(query, row)))
        .filter(|(_, score)| *score > 0)
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(limit);
    scored
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    /// Ranking agrees with the oracle on scores, order, and length.
    #[test]
    fn prop_rank_matches_oracle(
        query in query_strategy(),
        catalog in catalog_strategy(),
        limit in 1usize..8
    ) {
        let ranked = rank(&query, &catalog, limit);
        let expected = oracle_rank(&query, &catalog, limit);

        prop_assert_eq!(ranked.len(), expected.len());
        for (item, (index, score)) in ranked.iter().zip(&expected) {
            prop_assert_eq!(item.relevance_score, Some(*score));
            prop_assert_eq!(&item.title, catalog[*index].get("Título").unwrap().as_str().unwrap());
        }
    }

    /// Scores never increase down the list.
    #[test]
    fn prop_rank_sorted_descending(query in query_strategy(), catalog in catalog_strategy()) {
        let ranked = rank(&query, &catalog, 5);
        prop_assert!(ranked.len() <= 5);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score() >= pair[1].score());
        }
    }

    /// Queries made only of short words never rank anything.
    #[test]
    fn prop_short_words_rank_nothing(
        words in prop::collection::vec("[a-z]{1,2}", 0..6),
        catalog in catalog_strategy()
    ) {
        let query = words.join(" ");
        prop_assert!(rank(&query, &catalog, 5).is_empty());
    }

    /// Repeating a word doubles its contribution.
    #[test]
    fn prop_repeated_word_counts_twice(catalog in catalog_strategy()) {
        let once = rank("borges", &catalog, usize::MAX);
        let twice = rank("borges borges", &catalog, usize::MAX);
        prop_assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(&twice) {
            prop_assert_eq!(a.score() * 2, b.score());
        }
    }

    /// Case of the query does not matter.
    #[test]
    fn prop_query_case_insensitive(query in query_strategy(), catalog in catalog_strategy()) {
        let lower = rank(&query.to_lowercase(), &catalog, 5);
        let upper = rank(&query.to_uppercase(), &catalog, 5);
        prop_assert_eq!(lower, upper);
    }
}
