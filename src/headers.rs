//! Column resolution and row projection.
//!
//! When the caller supplies explicit headers they are authoritative and used
//! verbatim. Otherwise the column order is inferred from the dataset: the
//! union of all row keys in first-seen order. First-seen order is the
//! normative contract here, not later-row overrides — the first row
//! contributes its keys first, and each subsequent row appends only the keys
//! not already seen.

use std::collections::HashSet;

use crate::error::ExportError;
use crate::row::{render_cell, Row};

/// Resolve the column order for a dataset.
pub fn resolve_columns(rows: &[Row], explicit: Option<&[String]>) -> Vec<String> {
    if let Some(headers) = explicit {
        return headers.to_vec();
    }
    let mut seen = HashSet::new();
    let mut columns = Vec::new();
    for row in rows {
        for key in row.keys() {
            if seen.insert(key.clone()) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

/// Project a row onto the resolved column order.
///
/// Produces exactly one rendered cell per column; a key missing from the row
/// yields an empty cell. Keys present in the row but absent from the column
/// order are dropped.
pub fn project_row(row: &Row, columns: &[String]) -> Result<Vec<String>, ExportError> {
    columns
        .iter()
        .map(|column| match row.get(column) {
            Some(value) => render_cell(value),
            None => Ok(String::new()),
        })
        .collect()
}
