//! # Row writers
//!
//! Serialization strategies for the export pipeline.
//!
//! ## Design Principles
//!
//! 1. **Strategy over inheritance**: the pipeline in [`crate::export`] owns
//!    header resolution, row projection, and cell rendering; a [`RowWriter`]
//!    only turns pre-stringified cells into bytes. Picking a writer picks the
//!    wire format.
//!
//! 2. **Fully materialized output**: every writer buffers internally and
//!    hands back the complete byte content from [`RowWriter::finish`]. A
//!    failed write never yields a truncated success — the partial buffer is
//!    simply dropped.
//!
//! 3. **Scoped resources**: the workbook writer stages its ZIP container on
//!    an anonymous temp file that is released on every exit path, including
//!    errors mid-write. No writer holds state between export calls.

mod delimited;
mod workbook;
mod yaml;

pub use delimited::DelimitedTextWriter;
pub use workbook::WorkbookWriter;
pub use yaml::YamlDumpWriter;

use crate::error::ExportError;

/// A serialization strategy for one export call.
///
/// The pipeline drives a writer through a fixed lifecycle: `begin` exactly
/// once with the resolved column order, `write_header` at most once when a
/// header row was requested, `write_row` once per data row with cells
/// aligned to the column order, then `finish` to obtain the bytes.
pub trait RowWriter {
    /// The content-type the caller should declare for this writer's output.
    fn content_type(&self) -> &'static str;

    /// Called once, before any row, with the resolved column order.
    fn begin(&mut self, columns: &[String]) -> Result<(), ExportError>;

    /// Emit the header row. Called at most once, after `begin`.
    fn write_header(&mut self) -> Result<(), ExportError>;

    /// Emit one data row. `cells` has exactly one entry per column.
    fn write_row(&mut self, cells: &[String]) -> Result<(), ExportError>;

    /// Finalize the output and return the materialized bytes.
    fn finish(&mut self) -> Result<Vec<u8>, ExportError>;
}
