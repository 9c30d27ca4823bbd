//! # tabex - Deterministic Tabular Export Formatting
//!
//! `tabex` converts an in-memory sequence of structured rows into a
//! downloadable tabular file — delimited text, an XLSX workbook, or a YAML
//! dump — returning the complete byte content plus the content-type to
//! declare when serving it as an HTTP response body.
//!
//! ## Key Features
//!
//! - **Deterministic output**: identical input always yields byte-identical
//!   output. No timestamps, random ordering, or locale-dependent formatting
//!   anywhere in the body — the workbook writer pins its ZIP entry
//!   timestamps for exactly this reason.
//!
//! - **Header inference**: when no explicit headers are given, the column
//!   order is the union of all row keys in first-seen order, and every data
//!   row is re-projected onto it (missing keys become empty cells).
//!
//! - **Formula-injection guard**: cells whose first character is `=`, `-`,
//!   `+`, or `@` are prefixed with a tab before reaching a spreadsheet-bound
//!   format, defusing formula-injection attacks in downstream applications.
//!
//! - **Strategy-based writers**: one pipeline drives any [`RowWriter`];
//!   picking a writer picks the wire format.
//!
//! - **No partial output**: a failed write surfaces the underlying cause and
//!   discards the partial buffer; the transient temp file backing workbook
//!   assembly is released on every exit path.
//!
//! ## Quick Start
//!
//! ```rust
//! use tabex::{to_csv, FormatOptions, Row};
//! use serde_json::json;
//!
//! let mut alice = Row::new();
//! alice.insert("name".to_string(), json!("Alice"));
//! alice.insert("score".to_string(), json!(10));
//!
//! let mut bob = Row::new();
//! bob.insert("name".to_string(), json!("Bob"));
//! bob.insert("team".to_string(), json!("blue"));
//!
//! let result = to_csv(&[alice, bob], &FormatOptions::default())?;
//! assert_eq!(result.content_type, "text/csv");
//! assert_eq!(
//!     String::from_utf8(result.content)?,
//!     "name,score,team\nAlice,10,\nBob,,blue\n"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - [`row`]: row and cell types, cell-to-string rendering
//! - [`options`]: export options and their validation
//! - [`headers`]: column resolution and row projection
//! - [`escape`]: the formula-injection guard
//! - [`export`]: the formatting pipeline and convenience entry points
//! - [`writer`]: the [`RowWriter`] strategy trait and the delimited-text,
//!   workbook, and YAML implementations
//! - [`error`]: the error taxonomy (configuration vs. serialization)

pub mod error;
pub mod escape;
pub mod export;
pub mod headers;
pub mod options;
pub mod row;
pub mod writer;

pub use error::ExportError;
pub use export::{format, to_csv, to_xlsx, to_yaml, ExportResult};
pub use options::FormatOptions;
pub use row::Row;
pub use writer::{DelimitedTextWriter, RowWriter, WorkbookWriter, YamlDumpWriter};
