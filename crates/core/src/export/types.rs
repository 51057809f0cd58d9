//! Export payload types.

use chrono::NaiveDate;

/// Content type of the spreadsheet export.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Content type of the print-document export.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// A finished export: named binary payload plus its content type.
#[derive(Debug, Clone)]
pub struct ExportFile {
    /// Download filename, e.g. `Report-20260830.xlsx`.
    pub file_name: String,
    /// MIME content type.
    pub content_type: &'static str,
    /// The document bytes. Never partial: renderers fail whole.
    pub bytes: Vec<u8>,
}

/// Builds the templated export filename for the given date.
pub(crate) fn export_file_name(extension: &str, today: NaiveDate) -> String {
    format!("Report-{}.{extension}", today.format("%Y%m%d"))
}
