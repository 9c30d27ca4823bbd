/// Errors that can occur while formatting an export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Invalid export options (e.g. multi-character delimiter).
    /// Raised before any row is processed.
    #[error("invalid export options: {0}")]
    Configuration(String),

    /// I/O error while assembling the output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the CSV library during delimited-text writing
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error from the ZIP library during workbook assembly
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Error serializing the YAML dump
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Error serializing a nested cell value to JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A writer was used after finish()
    #[error("writer already finished")]
    Finished,
}

impl ExportError {
    /// Whether this error is a caller configuration problem rather than a
    /// serialization failure. Configuration errors are never worth retrying.
    pub fn is_configuration(&self) -> bool {
        matches!(self, ExportError::Configuration(_))
    }
}
