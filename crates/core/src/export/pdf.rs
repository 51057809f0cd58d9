//! Print-document renderer: HTML template plus an external converter.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use reportd_shared::types::ReportRecord;

use super::error::ExportError;
use super::types::{ExportFile, PDF_CONTENT_TYPE, export_file_name};

/// Capability seam for the external document converter.
///
/// The core never assumes process-spawning semantics of any platform; it
/// only requires an availability precondition and a whole-document
/// conversion.
#[async_trait]
pub trait DocumentConverter: Send + Sync {
    /// Whether the converter can run at all.
    fn available(&self) -> bool;

    /// Converts an HTML document into print-ready bytes.
    async fn convert(&self, html: &str) -> Result<Vec<u8>, ExportError>;
}

/// wkhtmltopdf invoked as a child process over stdin/stdout.
#[derive(Debug, Clone)]
pub struct WkhtmltopdfConverter {
    binary: PathBuf,
    timeout: Duration,
}

impl WkhtmltopdfConverter {
    /// Creates a converter for the binary at `binary`, bounding each
    /// conversion by `timeout`.
    pub fn new(binary: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }

    /// The configured binary path.
    #[must_use]
    pub fn binary_path(&self) -> &std::path::Path {
        &self.binary
    }
}

#[async_trait]
impl DocumentConverter for WkhtmltopdfConverter {
    fn available(&self) -> bool {
        self.binary.is_file()
    }

    async fn convert(&self, html: &str) -> Result<Vec<u8>, ExportError> {
        if !self.available() {
            return Err(ExportError::ConverterMissing(self.binary.clone()));
        }

        debug!(binary = %self.binary.display(), "spawning document converter");
        let mut child = Command::new(&self.binary)
            .args([
                "--page-size",
                "A4",
                "--orientation",
                "Portrait",
                "--page-offset",
                "0",
                "--footer-center",
                "[page]",
                "--footer-font-size",
                "8",
                "--quiet",
                "-",
                "-",
            ])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ExportError::Generation(format!("failed to spawn converter: {e}")))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| ExportError::Generation("converter stdin unavailable".to_string()))?;
        stdin
            .write_all(html.as_bytes())
            .await
            .map_err(|e| ExportError::Generation(format!("failed to write document: {e}")))?;
        drop(stdin);

        // kill_on_drop reaps the child if the timeout wins the race.
        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| {
                ExportError::Generation(format!(
                    "conversion timed out after {}s",
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| ExportError::Generation(format!("converter failed: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExportError::Generation(format!(
                "converter exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        if output.stdout.is_empty() {
            return Err(ExportError::Generation(
                "converter produced no output".to_string(),
            ));
        }

        Ok(output.stdout)
    }
}

/// Renders the record sequence as a fixed-layout A4 portrait document.
///
/// The converter's availability is checked before any conversion attempt;
/// absence surfaces as [`ExportError::ConverterMissing`], everything else
/// as [`ExportError::Generation`]. No partial payload is ever returned.
///
/// # Errors
///
/// Returns an error if the converter is missing or conversion fails.
pub async fn render_pdf<C>(
    records: &[ReportRecord],
    today: NaiveDate,
    converter: &C,
) -> Result<ExportFile, ExportError>
where
    C: DocumentConverter + ?Sized,
{
    let html = build_report_html(records);
    let bytes = converter.convert(&html).await?;

    Ok(ExportFile {
        file_name: export_file_name("pdf", today),
        content_type: PDF_CONTENT_TYPE,
        bytes,
    })
}

/// Builds the fixed print template around the record rows.
pub(crate) fn build_report_html(records: &[ReportRecord]) -> String {
    let mut rows = String::new();
    for record in records {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td>\
             <td class=\"amount\">{}</td><td>{}</td></tr>\n",
            record.id,
            escape_html(&record.name),
            escape_html(&record.description),
            format_amount(record.amount),
            record.date.format("%Y-%m-%d"),
        ));
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <style>\n\
         body {{ font-family: sans-serif; font-size: 11px; }}\n\
         h1 {{ text-align: center; }}\n\
         table {{ width: 100%; border-collapse: collapse; }}\n\
         th, td {{ border: 1px solid #999; padding: 4px 6px; }}\n\
         th {{ background: #d3d3d3; text-align: center; }}\n\
         td.amount {{ text-align: right; }}\n\
         </style>\n</head>\n<body>\n<h1>Report</h1>\n\
         <table>\n<thead><tr>\
         <th>ID</th><th>Name</th><th>Description</th><th>Amount</th><th>Date</th>\
         </tr></thead>\n<tbody>\n{rows}</tbody>\n</table>\n</body>\n</html>\n"
    )
}

/// Formats a currency cell with the sign ahead of the symbol, matching the
/// spreadsheet renderer's number format.
fn format_amount(amount: rust_decimal::Decimal) -> String {
    if amount.is_sign_negative() {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${amount:.2}")
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
