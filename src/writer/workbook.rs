//! XLSX workbook writer.
//!
//! Produces a minimal single-sheet OOXML package: the static parts
//! (`[Content_Types].xml`, the relationship files, `xl/workbook.xml`) are
//! fixed byte constants, and `xl/worksheets/sheet1.xml` is streamed row by
//! row with inline strings. The ZIP container is assembled on an anonymous
//! temp file that the OS reclaims when the writer is dropped, so no partial
//! output survives an error on any exit path.
//!
//! Output is byte-deterministic: entry order is fixed and every entry
//! carries the same pinned timestamp.

use std::fs::File;
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer as XmlWriter;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::ExportError;
use crate::escape::guard_formula;
use crate::writer::RowWriter;

const SPREADSHEET_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";

const CONTENT_TYPES: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
    r#"<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
    r#"</Types>"#,
);

const ROOT_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>"#,
    r#"</Relationships>"#,
);

const WORKBOOK_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
    r#"<sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets>"#,
    r#"</workbook>"#,
);

const WORKBOOK_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>"#,
    r#"</Relationships>"#,
);

/// Writes rows as a single-sheet XLSX workbook with inline strings.
///
/// Header and data cells both pass through the formula-injection guard;
/// guarded cells carry `xml:space="preserve"` so spreadsheet applications
/// keep the defusing leading tab.
pub struct WorkbookWriter {
    zip: Option<ZipWriter<BufWriter<File>>>,
    columns: Vec<String>,
    next_row: u32,
}

impl WorkbookWriter {
    /// Create a writer backed by a fresh anonymous temp file.
    pub fn new() -> Result<Self, ExportError> {
        let backing = tempfile::tempfile()?;
        let zip = ZipWriter::new(BufWriter::new(backing));
        Ok(Self {
            zip: Some(zip),
            columns: Vec::new(),
            next_row: 1,
        })
    }

    fn zip_mut(&mut self) -> Result<&mut ZipWriter<BufWriter<File>>, ExportError> {
        self.zip.as_mut().ok_or(ExportError::Finished)
    }

    /// Entry options with a pinned timestamp so identical input produces
    /// byte-identical containers.
    fn entry_options() -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default())
            .unix_permissions(0o644)
    }

    fn write_sheet_row(&mut self, cells: &[String]) -> Result<(), ExportError> {
        let row_index = self.next_row;
        self.next_row += 1;

        let zip = self.zip_mut()?;
        let mut xml = XmlWriter::new(zip);

        let mut row = BytesStart::new("row");
        row.push_attribute(("r", row_index.to_string().as_str()));
        xml.write_event(Event::Start(row))?;

        for (column_index, cell) in cells.iter().enumerate() {
            let value = guard_formula(cell);
            let cell_ref = format!("{}{}", column_letters(column_index), row_index);

            let mut c = BytesStart::new("c");
            c.push_attribute(("r", cell_ref.as_str()));
            c.push_attribute(("t", "inlineStr"));
            xml.write_event(Event::Start(c))?;
            xml.write_event(Event::Start(BytesStart::new("is")))?;

            let mut t = BytesStart::new("t");
            if needs_space_preserve(&value) {
                t.push_attribute(("xml:space", "preserve"));
            }
            xml.write_event(Event::Start(t))?;
            xml.write_event(Event::Text(BytesText::new(&value)))?;
            xml.write_event(Event::End(BytesEnd::new("t")))?;

            xml.write_event(Event::End(BytesEnd::new("is")))?;
            xml.write_event(Event::End(BytesEnd::new("c")))?;
        }

        xml.write_event(Event::End(BytesEnd::new("row")))?;
        Ok(())
    }
}

impl RowWriter for WorkbookWriter {
    fn content_type(&self) -> &'static str {
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    }

    fn begin(&mut self, columns: &[String]) -> Result<(), ExportError> {
        self.columns = columns.to_vec();

        let zip = self.zip_mut()?;
        zip.start_file("[Content_Types].xml", Self::entry_options())?;
        zip.write_all(CONTENT_TYPES.as_bytes())?;
        zip.start_file("_rels/.rels", Self::entry_options())?;
        zip.write_all(ROOT_RELS.as_bytes())?;
        zip.start_file("xl/workbook.xml", Self::entry_options())?;
        zip.write_all(WORKBOOK_XML.as_bytes())?;
        zip.start_file("xl/_rels/workbook.xml.rels", Self::entry_options())?;
        zip.write_all(WORKBOOK_RELS.as_bytes())?;

        // The worksheet is the last entry; rows stream straight into it.
        zip.start_file("xl/worksheets/sheet1.xml", Self::entry_options())?;
        let mut xml = XmlWriter::new(zip);
        xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        let mut worksheet = BytesStart::new("worksheet");
        worksheet.push_attribute(("xmlns", SPREADSHEET_NS));
        xml.write_event(Event::Start(worksheet))?;
        xml.write_event(Event::Start(BytesStart::new("sheetData")))?;
        Ok(())
    }

    fn write_header(&mut self) -> Result<(), ExportError> {
        let columns = std::mem::take(&mut self.columns);
        let result = self.write_sheet_row(&columns);
        self.columns = columns;
        result
    }

    fn write_row(&mut self, cells: &[String]) -> Result<(), ExportError> {
        self.write_sheet_row(cells)
    }

    fn finish(&mut self) -> Result<Vec<u8>, ExportError> {
        let mut zip = self.zip.take().ok_or(ExportError::Finished)?;
        {
            let mut xml = XmlWriter::new(&mut zip);
            xml.write_event(Event::End(BytesEnd::new("sheetData")))?;
            xml.write_event(Event::End(BytesEnd::new("worksheet")))?;
        }
        let writer = zip.finish()?;
        let mut backing = writer
            .into_inner()
            .map_err(|e| ExportError::Io(e.into_error()))?;
        backing.seek(SeekFrom::Start(0))?;
        let mut content = Vec::new();
        backing.read_to_end(&mut content)?;
        Ok(content)
    }
}

/// A1-style column letters for a zero-based column index.
fn column_letters(index: usize) -> String {
    let mut index = index;
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

/// Leading or trailing whitespace must survive XML whitespace handling;
/// the injection guard relies on a leading tab staying in place.
fn needs_space_preserve(value: &str) -> bool {
    matches!(value.chars().next(), Some(' ' | '\t'))
        || matches!(value.chars().last(), Some(' ' | '\t'))
}
