//! Formula-injection guard for spreadsheet-bound cells.
//!
//! Spreadsheet applications interpret cells starting with certain characters
//! as formulas, which turns an exported dataset into an attack vector when a
//! row value is attacker-controlled (CSV injection). Prefixing such cells
//! with a tab defuses the interpretation while keeping the value readable.

use std::borrow::Cow;

/// Leading characters that spreadsheet applications treat as formula triggers.
const FORMULA_TRIGGERS: [char; 4] = ['=', '-', '+', '@'];

/// Prefix the cell with a single tab if its first character would trigger
/// formula evaluation in a spreadsheet application. Safe cells are returned
/// borrowed, unchanged.
pub fn guard_formula(cell: &str) -> Cow<'_, str> {
    match cell.chars().next() {
        Some(first) if FORMULA_TRIGGERS.contains(&first) => Cow::Owned(format!("\t{cell}")),
        _ => Cow::Borrowed(cell),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_characters_get_tab_prefix() {
        assert_eq!(guard_formula("=SUM(A1:A9)"), "\t=SUM(A1:A9)");
        assert_eq!(guard_formula("-1+2"), "\t-1+2");
        assert_eq!(guard_formula("+cmd"), "\t+cmd");
        assert_eq!(guard_formula("@alias"), "\t@alias");
    }

    #[test]
    fn test_safe_cells_pass_through_borrowed() {
        for cell in ["plain", "1-2", "", "a=b", " =x"] {
            let guarded = guard_formula(cell);
            assert_eq!(guarded, cell);
            assert!(matches!(guarded, Cow::Borrowed(_)));
        }
    }

    #[test]
    fn test_guarded_value_is_otherwise_unchanged() {
        let guarded = guard_formula("=HYPERLINK(\"http://x\")");
        assert_eq!(&guarded[1..], "=HYPERLINK(\"http://x\")");
    }
}
