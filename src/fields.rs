// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field aliasing: how a loosely-typed spreadsheet row becomes named fields.
//!
//! Upstream rows arrive with whatever column headers the sheet happened to use
//! ("Título", "titulo", "Title", ...). Each logical field owns an ordered list
//! of accepted keys and the first *present* one wins. Keys are literal and
//! case-sensitive; nothing here guesses at new spellings.
//!
//! # Presence
//!
//! A key only counts as present when its value carries something: `null`,
//! `false`, `""` and the number `0` all fall through to the next alias, then to
//! the field's placeholder. Upstream rows were resolved with a truthiness chain,
//! so an empty "Stock" cell next to a filled "stock" cell resolves to the latter.
//!
//! # Placeholders
//!
//! | Field     | Aliases (in order)              | Placeholder     |
//! |-----------|---------------------------------|-----------------|
//! | Title     | `Título`, `titulo`, `Title`     | `Sin título`    |
//! | Author    | `Autor`, `autor`, `Author`      | `Sin autor`     |
//! | Publisher | `Editorial`, `editorial`        | `Sin editorial` |
//! | Country   | `País`, `Pais`, `pais`          | `Sin país`      |
//! | Price     | `Precio`, `precio`              | `Consultar`     |
//! | Stock     | `Stock`, `stock`                | `0`             |

use serde_json::Value;

use crate::types::RawItem;

/// Shown when a record has no title.
pub const TITLE_PLACEHOLDER: &str = "Sin título";

/// Shown when a record has no author.
pub const AUTHOR_PLACEHOLDER: &str = "Sin autor";

/// Shown when a record has no publisher.
pub const PUBLISHER_PLACEHOLDER: &str = "Sin editorial";

/// Shown when a record has no country.
pub const COUNTRY_PLACEHOLDER: &str = "Sin país";

/// Price sentinel meaning "ask the shop".
pub const PRICE_PLACEHOLDER: &str = "Consultar";

/// Stock text assumed when no stock column is present.
pub const STOCK_DEFAULT: &str = "0";

const TITLE_ALIASES: &[&str] = &["Título", "titulo", "Title"];
const AUTHOR_ALIASES: &[&str] = &["Autor", "autor", "Author"];
const PUBLISHER_ALIASES: &[&str] = &["Editorial", "editorial"];
const COUNTRY_ALIASES: &[&str] = &["País", "Pais", "pais"];
const PRICE_ALIASES: &[&str] = &["Precio", "precio"];
const STOCK_ALIASES: &[&str] = &["Stock", "stock"];

/// A logical catalog column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Author,
    Publisher,
    Country,
    Price,
    Stock,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Title,
        Field::Author,
        Field::Publisher,
        Field::Country,
        Field::Price,
        Field::Stock,
    ];

    /// Accepted keys, in lookup order.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Title => TITLE_ALIASES,
            Field::Author => AUTHOR_ALIASES,
            Field::Publisher => PUBLISHER_ALIASES,
            Field::Country => COUNTRY_ALIASES,
            Field::Price => PRICE_ALIASES,
            Field::Stock => STOCK_ALIASES,
        }
    }

    /// Display value used when no alias is present.
    pub const fn placeholder(self) -> &'static str {
        match self {
            Field::Title => TITLE_PLACEHOLDER,
            Field::Author => AUTHOR_PLACEHOLDER,
            Field::Publisher => PUBLISHER_PLACEHOLDER,
            Field::Country => COUNTRY_PLACEHOLDER,
            Field::Price => PRICE_PLACEHOLDER,
            Field::Stock => STOCK_DEFAULT,
        }
    }
}

/// Whether a cell value counts as filled in.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// First present value among the field's aliases.
pub fn resolve(raw: &RawItem, field: Field) -> Option<&Value> {
    field
        .aliases()
        .iter()
        .filter_map(|key| raw.get(key))
        .find(|value| is_present(value))
}

/// Coerce a cell to text the way a spreadsheet export reads back.
///
/// Integral floats print without a fractional part (`3.0` → `"3"`), so numeric
/// cells and their string renderings agree.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
                    Some(f) => f.to_string(),
                    None => n.to_string(),
                }
            }
        }
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Resolved field as text, if any alias is present.
pub fn field_text(raw: &RawItem, field: Field) -> Option<String> {
    resolve(raw, field).map(value_to_text)
}

/// Resolved field as text, falling back to the field's placeholder.
pub fn display_text(raw: &RawItem, field: Field) -> String {
    field_text(raw, field).unwrap_or_else(|| field.placeholder().to_string())
}

/// Lowercased field text for matching. Absent fields match nothing.
///
/// Placeholders are excluded: a query for "sin" must not hit
/// every untitled record.
pub fn match_text(raw: &RawItem, field: Field) -> String {
    field_text(raw, field)
        .map(|text| text.to_lowercase())
        .unwrap_or_default()
}
