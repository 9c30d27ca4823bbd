//! Delimited-text writer (CSV, TSV, or any single-byte delimiter).

use crate::error::ExportError;
use crate::escape::guard_formula;
use crate::options::FormatOptions;
use crate::writer::RowWriter;

/// Writes rows as delimited text with minimal quoting.
///
/// The delimiter and quote character come from [`FormatOptions`] and must
/// each be a single ASCII byte. Header and data cells both pass through the
/// formula-injection guard.
pub struct DelimitedTextWriter {
    writer: Option<csv::Writer<Vec<u8>>>,
    columns: Vec<String>,
}

impl DelimitedTextWriter {
    /// Build a writer from export options, validating delimiter and quote.
    pub fn from_options(options: &FormatOptions) -> Result<Self, ExportError> {
        let writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter_byte()?)
            .quote(options.quote_byte()?)
            .from_writer(Vec::new());
        Ok(Self {
            writer: Some(writer),
            columns: Vec::new(),
        })
    }

    fn write_record(&mut self, cells: &[String]) -> Result<(), ExportError> {
        let writer = self.writer.as_mut().ok_or(ExportError::Finished)?;
        let guarded: Vec<_> = cells.iter().map(|cell| guard_formula(cell)).collect();
        writer.write_record(guarded.iter().map(|cell| cell.as_bytes()))?;
        Ok(())
    }
}

impl RowWriter for DelimitedTextWriter {
    fn content_type(&self) -> &'static str {
        "text/csv"
    }

    fn begin(&mut self, columns: &[String]) -> Result<(), ExportError> {
        self.columns = columns.to_vec();
        Ok(())
    }

    fn write_header(&mut self) -> Result<(), ExportError> {
        let columns = std::mem::take(&mut self.columns);
        let result = self.write_record(&columns);
        self.columns = columns;
        result
    }

    fn write_row(&mut self, cells: &[String]) -> Result<(), ExportError> {
        self.write_record(cells)
    }

    fn finish(&mut self) -> Result<Vec<u8>, ExportError> {
        let writer = self.writer.take().ok_or(ExportError::Finished)?;
        writer
            .into_inner()
            .map_err(|e| ExportError::Io(e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(options: &FormatOptions, rows: &[&[&str]], header: bool) -> String {
        let mut writer = DelimitedTextWriter::from_options(options).unwrap();
        let columns: Vec<String> = rows[0].iter().map(|s| s.to_string()).collect();
        writer.begin(&columns).unwrap();
        if header {
            writer.write_header().unwrap();
        }
        for row in &rows[1..] {
            let cells: Vec<String> = row.iter().map(|s| s.to_string()).collect();
            writer.write_row(&cells).unwrap();
        }
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_basic_csv_output() {
        let out = run(
            &FormatOptions::default(),
            &[&["name", "score"], &["Ada", "10"]],
            true,
        );
        assert_eq!(out, "name,score\nAda,10\n");
    }

    #[test]
    fn test_custom_delimiter() {
        let options = FormatOptions {
            delimiter: ";".to_string(),
            ..FormatOptions::default()
        };
        let out = run(&options, &[&["a", "b"], &["1", "2"]], true);
        assert_eq!(out, "a;b\n1;2\n");
    }

    #[test]
    fn test_cells_containing_delimiter_are_quoted() {
        let out = run(&FormatOptions::default(), &[&["a"], &["x,y"]], false);
        assert_eq!(out, "\"x,y\"\n");
    }

    #[test]
    fn test_formula_cells_are_tab_prefixed() {
        let out = run(&FormatOptions::default(), &[&["a"], &["=SUM(A1)"]], false);
        assert_eq!(out, "\t=SUM(A1)\n");
    }

    #[test]
    fn test_header_cells_are_guarded_too() {
        let out = run(&FormatOptions::default(), &[&["=evil", "b"]], true);
        assert_eq!(out, "\t=evil,b\n");
    }

    #[test]
    fn test_finish_twice_is_an_error() {
        let mut writer = DelimitedTextWriter::from_options(&FormatOptions::default()).unwrap();
        writer.begin(&["a".to_string()]).unwrap();
        writer.finish().unwrap();
        assert!(matches!(writer.finish(), Err(ExportError::Finished)));
    }
}
