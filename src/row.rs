//! Row and cell types for export datasets.
//!
//! A dataset is a slice of rows; a row is an ordered mapping from column key
//! to cell value. `serde_json`'s map type (with the `preserve_order` feature)
//! backs rows so that a row's iteration order is its insertion order, which
//! header inference relies on. Rows in one dataset need not share identical
//! key sets.

use serde_json::Value;

use crate::error::ExportError;

/// One record to export: an ordered mapping from column key to cell value.
pub type Row = serde_json::Map<String, Value>;

/// Render a cell value to its output string form.
///
/// Scalars map directly: null becomes an empty cell, booleans render as
/// `true`/`false`, numbers use their JSON display form (no locale, no
/// grouping), strings pass through. Nested arrays and objects are serialized
/// to compact JSON.
pub fn render_cell(value: &Value) -> Result<String, ExportError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s.clone()),
        nested => Ok(serde_json::to_string(nested)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_rendering() {
        assert_eq!(render_cell(&Value::Null).unwrap(), "");
        assert_eq!(render_cell(&json!(true)).unwrap(), "true");
        assert_eq!(render_cell(&json!(false)).unwrap(), "false");
        assert_eq!(render_cell(&json!(42)).unwrap(), "42");
        assert_eq!(render_cell(&json!(-7.5)).unwrap(), "-7.5");
        assert_eq!(render_cell(&json!("hello")).unwrap(), "hello");
    }

    #[test]
    fn test_nested_values_render_as_compact_json() {
        assert_eq!(render_cell(&json!([1, 2, 3])).unwrap(), "[1,2,3]");
        assert_eq!(
            render_cell(&json!({"id": 9, "tags": ["a", "b"]})).unwrap(),
            r#"{"id":9,"tags":["a","b"]}"#
        );
    }

    #[test]
    fn test_row_preserves_insertion_order() {
        let mut row = Row::new();
        row.insert("z".to_string(), json!(1));
        row.insert("a".to_string(), json!(2));
        row.insert("m".to_string(), json!(3));
        let keys: Vec<&String> = row.keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }
}
