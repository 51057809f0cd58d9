//! Export pipeline: two independent renderers over one result set.
//!
//! Both renderers consume an ordered, already filtered and sorted record
//! sequence and are pure functions of that input plus the current date
//! (used only for filename construction). No state is shared between them.

pub mod error;
pub mod excel;
pub mod pdf;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ExportError;
pub use excel::render_xlsx;
pub use pdf::{DocumentConverter, WkhtmltopdfConverter, render_pdf};
pub use types::{ExportFile, PDF_CONTENT_TYPE, XLSX_CONTENT_TYPE};
