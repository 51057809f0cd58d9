//! Export error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the export pipeline.
///
/// The missing-converter precondition is distinct from conversion-time
/// failures so callers can surface an actionable message for the former.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The external converter binary does not exist at the configured path.
    /// Raised before any conversion is attempted.
    #[error("document converter not found at {}", .0.display())]
    ConverterMissing(PathBuf),

    /// Conversion or rendering failed after it was attempted.
    #[error("export generation failed: {0}")]
    Generation(String),

    /// Spreadsheet assembly failed.
    #[error("workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}
