//! The formatting pipeline.
//!
//! One operation: take a dataset and options, drive a [`RowWriter`], return
//! the materialized bytes with their content-type. The pipeline owns what is
//! common to every format — option validation, column resolution, row
//! projection, cell rendering — and the writer owns only the serialization
//! step.

use log::debug;

use crate::error::ExportError;
use crate::headers::{project_row, resolve_columns};
use crate::options::FormatOptions;
use crate::row::Row;
use crate::writer::{DelimitedTextWriter, RowWriter, WorkbookWriter, YamlDumpWriter};

/// The outcome of one export call: the complete output bytes and the
/// content-type the caller should declare when serving them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    pub content: Vec<u8>,
    pub content_type: &'static str,
}

impl ExportResult {
    fn empty(content_type: &'static str) -> Self {
        Self {
            content: Vec::new(),
            content_type,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Format a dataset through the given writer strategy.
///
/// Options are validated before any row is touched. Output is deterministic:
/// identical `(rows, options)` input yields byte-identical content. An empty
/// dataset with no explicit headers produces an empty body — there is
/// nothing to export and no file is generated.
///
/// # Errors
///
/// [`ExportError::Configuration`] for invalid options, raised synchronously
/// before any row is processed. Serialization failures from the underlying
/// writer propagate with their cause; partial output is never returned.
pub fn format<W: RowWriter + ?Sized>(
    rows: &[Row],
    options: &FormatOptions,
    writer: &mut W,
) -> Result<ExportResult, ExportError> {
    options.validate()?;

    let columns = resolve_columns(rows, options.headers.as_deref());
    if columns.is_empty() {
        debug!("no columns to export; returning empty body");
        return Ok(ExportResult::empty(writer.content_type()));
    }
    debug!(
        "formatting {} rows into {} columns as {}",
        rows.len(),
        columns.len(),
        writer.content_type()
    );

    writer.begin(&columns)?;
    if options.include_header_row {
        writer.write_header()?;
    }
    for row in rows {
        let cells = project_row(row, &columns)?;
        writer.write_row(&cells)?;
    }
    let content = writer.finish()?;
    debug!("export complete: {} bytes", content.len());

    Ok(ExportResult {
        content,
        content_type: writer.content_type(),
    })
}

/// Format a dataset as delimited text (`text/csv`).
pub fn to_csv(rows: &[Row], options: &FormatOptions) -> Result<ExportResult, ExportError> {
    let mut writer = DelimitedTextWriter::from_options(options)?;
    format(rows, options, &mut writer)
}

/// Format a dataset as an XLSX workbook
/// (`application/vnd.openxmlformats-officedocument.spreadsheetml.sheet`).
pub fn to_xlsx(rows: &[Row], options: &FormatOptions) -> Result<ExportResult, ExportError> {
    options.validate()?;
    let mut writer = WorkbookWriter::new()?;
    format(rows, options, &mut writer)
}

/// Format a dataset as a YAML dump (`application/x-yaml`).
pub fn to_yaml(rows: &[Row], options: &FormatOptions) -> Result<ExportResult, ExportError> {
    let mut writer = YamlDumpWriter::new();
    format(rows, options, &mut writer)
}
