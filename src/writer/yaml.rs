//! YAML dump writer.

use serde_yaml::{Mapping, Value};

use crate::error::ExportError;
use crate::writer::RowWriter;

/// Writes rows as a YAML sequence of mappings keyed by the column order.
///
/// YAML output is not opened by spreadsheet applications, so the
/// formula-injection guard does not apply here. A header row makes no sense
/// for this shape either — the mapping keys already carry the column labels
/// on every row — so `write_header` is a no-op.
#[derive(Default)]
pub struct YamlDumpWriter {
    columns: Vec<String>,
    rows: Vec<Mapping>,
    finished: bool,
}

impl YamlDumpWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RowWriter for YamlDumpWriter {
    fn content_type(&self) -> &'static str {
        "application/x-yaml"
    }

    fn begin(&mut self, columns: &[String]) -> Result<(), ExportError> {
        self.columns = columns.to_vec();
        Ok(())
    }

    fn write_header(&mut self) -> Result<(), ExportError> {
        Ok(())
    }

    fn write_row(&mut self, cells: &[String]) -> Result<(), ExportError> {
        let mut mapping = Mapping::with_capacity(self.columns.len());
        for (column, cell) in self.columns.iter().zip(cells) {
            mapping.insert(
                Value::String(column.clone()),
                Value::String(cell.clone()),
            );
        }
        self.rows.push(mapping);
        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<u8>, ExportError> {
        if self.finished {
            return Err(ExportError::Finished);
        }
        self.finished = true;
        let rows = std::mem::take(&mut self.rows);
        Ok(serde_yaml::to_string(&rows)?.into_bytes())
    }
}
