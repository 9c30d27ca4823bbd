//! Export options.

use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// Configuration for a single export call.
///
/// Options typically arrive from an external configuration layer, so the
/// delimiter and quote are carried as strings and validated before any row
/// is processed. Both must be exactly one ASCII character; violating this is
/// a configuration error, not a data error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatOptions {
    /// Whether to emit a header row before the data rows
    pub include_header_row: bool,

    /// Explicit ordered column labels. When set, these are authoritative and
    /// used verbatim; when unset, columns are inferred from the dataset in
    /// first-seen key order.
    pub headers: Option<Vec<String>>,

    /// Field delimiter for delimited-text output (default `,`)
    pub delimiter: String,

    /// Quote character for delimited-text output (default `"`)
    pub quote_char: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            include_header_row: true,
            headers: None,
            delimiter: ",".to_string(),
            quote_char: "\"".to_string(),
        }
    }
}

impl FormatOptions {
    /// Options for tab-separated output.
    pub fn tsv() -> Self {
        Self {
            delimiter: "\t".to_string(),
            ..Self::default()
        }
    }

    /// Options with explicit headers.
    pub fn with_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: Some(headers.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Validate the options. Fails fast, before any row is touched.
    pub fn validate(&self) -> Result<(), ExportError> {
        self.delimiter_byte()?;
        self.quote_byte()?;
        Ok(())
    }

    pub(crate) fn delimiter_byte(&self) -> Result<u8, ExportError> {
        single_ascii_byte("delimiter", &self.delimiter)
    }

    pub(crate) fn quote_byte(&self) -> Result<u8, ExportError> {
        single_ascii_byte("quoteChar", &self.quote_char)
    }
}

fn single_ascii_byte(field: &str, value: &str) -> Result<u8, ExportError> {
    // A single byte of valid UTF-8 is necessarily ASCII, so a one-byte
    // match covers both the "one character" and "ASCII" requirements.
    match value.as_bytes() {
        [b] => Ok(*b),
        _ => Err(ExportError::Configuration(format!(
            "{field} must be exactly one ASCII character, got {value:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = FormatOptions::default();
        assert!(options.include_header_row);
        assert!(options.headers.is_none());
        assert_eq!(options.delimiter_byte().unwrap(), b',');
        assert_eq!(options.quote_byte().unwrap(), b'"');
    }

    #[test]
    fn test_multi_character_delimiter_is_a_configuration_error() {
        let options = FormatOptions {
            delimiter: ",,".to_string(),
            ..FormatOptions::default()
        };
        let err = options.validate().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_empty_and_non_ascii_delimiters_rejected() {
        for delimiter in ["", "é", "💾"] {
            let options = FormatOptions {
                delimiter: delimiter.to_string(),
                ..FormatOptions::default()
            };
            assert!(options.validate().unwrap_err().is_configuration());
        }
    }

    #[test]
    fn test_deserializes_from_camel_case_config() {
        let options: FormatOptions = serde_json::from_str(
            r#"{"includeHeaderRow": false, "delimiter": ";", "headers": ["a", "b"]}"#,
        )
        .unwrap();
        assert!(!options.include_header_row);
        assert_eq!(options.delimiter_byte().unwrap(), b';');
        assert_eq!(options.quote_byte().unwrap(), b'"');
        assert_eq!(options.headers.as_deref().unwrap(), ["a", "b"]);
    }
}
