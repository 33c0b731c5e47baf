// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Grounding text for the downstream generator.
//!
//! The summary is a prompt fragment, not customer-facing prose. The generator
//! reads it as free text, so its wording carries the contract: the header,
//! the per-item field order (title, author, price, stock, status) and the
//! closing instructions that forbid inventing titles must stay as they are.
//!
//! [`describe_record`] renders a single row as the knowledge text used when
//! seeding a retrieval store from the catalog.

use crate::fields::{display_text, field_text, Field};
use crate::stock::{check_stock, Blacklist};
use crate::types::{CatalogItem, Price, RawItem};

/// Header above a non-empty item list.
pub const AVAILABLE_HEADER: &str = "LIBROS DISPONIBLES EN NUESTRO CATÁLOGO (STOCK CONFIRMADO):";

/// Behavioral rules appended after the item list.
pub const AVAILABLE_INSTRUCTIONS: &[&str] = &[
    "- SOLO recomienda libros de esta lista exacta",
    "- NUNCA inventes títulos o autores",
    "- Si no hay libros específicos para la consulta, ofrece los disponibles",
    "- SIEMPRE menciona que verificaste el stock en tiempo real",
];

/// Header when nothing can be offered.
pub const NO_STOCK_HEADER: &str = "ESTADO ACTUAL DEL CATÁLOGO:";

pub const NO_STOCK_NOTICE: &str =
    "❌ No hay libros disponibles en stock en este momento para la consulta específica.";

pub const CONTACT_SUGGESTION: &str =
    "📞 Recomendamos contactar directamente para consultar próximas llegadas.";

pub const NO_STOCK_INSTRUCTION: &str =
    "INSTRUCCIÓN: Informa que no hay stock disponible y sugiere contactar para más información.";

/// Render the grounding block for `items`, in the order given.
pub fn build_summary(items: &[CatalogItem]) -> String {
    if items.is_empty() {
        return no_stock_summary();
    }

    let mut out = String::new();
    out.push_str(AVAILABLE_HEADER);
    out.push_str("\n\n");

    for (i, item) in items.iter().enumerate() {
        out.push_str(&render_item(i + 1, item));
    }

    out.push_str("INSTRUCCIONES IMPORTANTES:\n");
    for line in AVAILABLE_INSTRUCTIONS {
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn render_item(position: usize, item: &CatalogItem) -> String {
    format!(
        "{}. 📚 TÍTULO: {}\n   \
         👤 AUTOR: {}\n   \
         💰 PRECIO: {}\n   \
         📦 STOCK DISPONIBLE: {} unidades\n   \
         ✅ ESTADO: DISPONIBLE PARA COMPRA\n\n",
        position,
        item.title,
        item.author,
        item.price.with_currency(),
        item.stock_text,
    )
}

fn no_stock_summary() -> String {
    format!(
        "{}\n\n{}\n{}\n\n{}\n",
        NO_STOCK_HEADER, NO_STOCK_NOTICE, CONTACT_SUGGESTION, NO_STOCK_INSTRUCTION
    )
}

/// Availability word used in record descriptions.
pub fn availability_label(raw: &RawItem) -> &'static str {
    if check_stock(raw, Blacklist::Ranked).available {
        "disponible"
    } else {
        "sin stock"
    }
}

/// Knowledge text for one catalog row.
pub fn describe_record(raw: &RawItem) -> String {
    let price = Price::from_text(field_text(raw, Field::Price));
    format!(
        "Libro: {}\nAutor: {}\nEditorial: {}\nPaís: {}\nPrecio: {}\nEstado: {}\nTipo: Información de catálogo de libro",
        display_text(raw, Field::Title),
        display_text(raw, Field::Author),
        display_text(raw, Field::Publisher),
        display_text(raw, Field::Country),
        price.with_currency(),
        availability_label(raw),
    )
}
