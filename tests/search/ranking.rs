//! Ranking: weights, containment semantics, ordering, limits.

use super::common::{assert_ranked_well_formed, fixture_catalog, make_row, rows, titles};
use librero::{rank, rank_default, DEFAULT_RANK_LIMIT};
use serde_json::json;

// ============================================================================
// WEIGHTS
// ============================================================================

#[test]
fn test_field_weights_sum_per_word() {
    let catalog = vec![make_row(
        "Borges esencial",
        "Jorge Luis Borges",
        "Borges Ediciones",
        "1",
    )];
    let ranked = rank("borges", &catalog, 5);
    assert_eq!(ranked[0].relevance_score, Some(9));
}

#[test]
fn test_scores_sum_over_words() {
    let catalog = vec![make_row("Rayuela", "Julio Cortázar", "Alfaguara", "2")];
    let ranked = rank("rayuela cortázar alfaguara", &catalog, 5);
    assert_eq!(ranked[0].relevance_score, Some(5 + 3 + 1));
}

#[test]
fn test_country_and_price_do_not_score() {
    let catalog = rows(json!([
        {"Título": "Rayuela", "País": "Argentina", "Precio": "argentina", "Stock": "1"}
    ]));
    assert!(rank("argentina", &catalog, 5).is_empty());
}

// ============================================================================
// CONTAINMENT
// ============================================================================

#[test]
fn test_partial_word_matches() {
    let catalog = vec![make_row("El Principito", "Saint-Exupéry", "Salamandra", "1")];
    assert_eq!(rank("princi", &catalog, 5).len(), 1);
    assert_eq!(rank("exup", &catalog, 5)[0].relevance_score, Some(3));
}

#[test]
fn test_punctuation_stays_in_words() {
    // "borges?" is not contained in "jorge luis borges".
    let catalog = vec![make_row("Antología", "Jorge Luis Borges", "Emecé", "1")];
    assert!(rank("¿borges?", &catalog, 5).is_empty());
    assert_eq!(rank("¿algo de borges ?", &catalog, 5).len(), 1);
}

#[test]
fn test_matching_is_case_insensitive() {
    let catalog = vec![make_row("CIEN AÑOS DE SOLEDAD", "García Márquez", "x", "1")];
    assert_eq!(rank("Años", &catalog, 5).len(), 1);
}

#[test]
fn test_placeholder_text_never_matches() {
    let catalog = rows(json!([{"Stock": "4"}]));
    assert!(rank("sin título", &catalog, 5).is_empty());
    assert!(rank("autor", &catalog, 5).is_empty());
}

// ============================================================================
// ORDERING AND LIMITS
// ============================================================================

#[test]
fn test_best_first_with_stable_ties() {
    let catalog = rows(json!([
        {"Título": "Poesía reunida", "Autor": "Idea Vilariño", "Stock": "1"},
        {"Título": "Antología", "Autor": "Poesía Varios", "Stock": "1"},
        {"Título": "Poesía completa", "Autor": "Alfonsina Storni", "Stock": "1"},
        {"Título": "Poesía y poesía", "Autor": "Poesía", "Stock": "1"}
    ]));
    let ranked = rank("poesía", &catalog, 5);
    assert_eq!(
        titles(&ranked),
        vec!["Poesía y poesía", "Poesía reunida", "Poesía completa", "Antología"]
    );
    assert_ranked_well_formed(&ranked, 5);
}

#[test]
fn test_default_limit_is_five() {
    let catalog: Vec<_> = (0..12)
        .map(|i| make_row(&format!("Novela {}", i), "x", "y", "3"))
        .collect();
    let ranked = rank_default("novela", &catalog);
    assert_eq!(ranked.len(), DEFAULT_RANK_LIMIT);
    assert_eq!(ranked[0].title, "Novela 0");
    assert_eq!(ranked[4].title, "Novela 4");
}

#[test]
fn test_fixture_catalog_borges() {
    let catalog = fixture_catalog();
    let ranked = rank("borges", &catalog, 5);

    // Ficciones is sold out; the two in-stock Borges rows remain.
    assert_eq!(titles(&ranked), vec!["Borges esencial", "El Aleph"]);
    assert_eq!(ranked[0].relevance_score, Some(8));
    assert_eq!(ranked[1].relevance_score, Some(3));
    assert_ranked_well_formed(&ranked, 5);
}

#[test]
fn test_fixture_catalog_alias_variants() {
    let catalog = fixture_catalog();

    // Lowercase aliases (titulo/autor/...) resolve like the canonical ones.
    let aleph = &rank("aleph", &catalog, 5)[0];
    assert_eq!(aleph.author, "Jorge Luis Borges");
    assert_eq!(aleph.publisher, "Debolsillo");
    assert_eq!(aleph.country.as_deref(), Some("Argentina"));
    assert_eq!(aleph.price.as_str(), "1750");

    // Numeric cells are rendered as text.
    let principito = &rank("principito", &catalog, 5)[0];
    assert_eq!(principito.price.as_str(), "1200");
    assert_eq!(principito.stock_text, "5");
}
