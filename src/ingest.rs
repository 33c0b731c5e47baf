// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning upstream JSON into a query and a catalog.
//!
//! The message payload and the catalog rows come from other workflow steps.
//! Only the shape matters here:
//!
//! - the query lives at `body.message.text` or `message.text`;
//! - the catalog is an array of rows, each either wrapped as
//!   `{"json": {...}}` or a bare object.
//!
//! A row without an object body is skipped with a warning. One bad row never
//! fails the batch.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{trace, warn};

use crate::types::{RawItem, DEFAULT_QUERY};

/// Errors reading upstream input.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog must be a JSON array, found {found}")]
    NotAnArray { found: &'static str },
}

const QUERY_PATHS: &[&[&str]] = &[&["body", "message", "text"], &["message", "text"]];

/// The user's message from an upstream payload, or the generic default.
///
/// Returned as received: lowercasing happens when the query is parsed.
pub fn extract_query(payload: &Value) -> String {
    QUERY_PATHS
        .iter()
        .find_map(|path| {
            path.iter()
                .try_fold(payload, |node, key| node.get(key))
                .and_then(Value::as_str)
                .filter(|text| !text.is_empty())
        })
        .unwrap_or(DEFAULT_QUERY)
        .to_string()
}

/// Decode a catalog array into rows, skipping entries with no object body.
pub fn decode_catalog(value: &Value) -> Result<Vec<RawItem>, IngestError> {
    let entries = value.as_array().ok_or(IngestError::NotAnArray {
        found: json_kind(value),
    })?;

    let mut rows = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match entry_body(entry) {
            Some(row) => {
                if index < 3 {
                    let preview = serde_json::Value::Object(row.as_map().clone());
                    trace!(index, row = %preview, "catalog row");
                }
                rows.push(row);
            }
            None => warn!(index, kind = json_kind(entry), "catalog entry has no JSON body, skipping"),
        }
    }
    Ok(rows)
}

fn entry_body(entry: &Value) -> Option<RawItem> {
    let object = entry.as_object()?;
    match object.get("json") {
        Some(body) => RawItem::from_value(body.clone()),
        None => Some(RawItem::new(object.clone())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse a JSON document from a file.
pub fn read_json(path: &Path) -> Result<Value, IngestError> {
    let content = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Read and decode a catalog file.
pub fn read_catalog(path: &Path) -> Result<Vec<RawItem>, IngestError> {
    decode_catalog(&read_json(path)?)
}

/// Read a payload file and extract its query.
pub fn read_query(path: &Path) -> Result<String, IngestError> {
    Ok(extract_query(&read_json(path)?))
}
