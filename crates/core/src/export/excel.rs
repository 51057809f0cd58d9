//! Spreadsheet renderer: one styled "Report" sheet per export.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook};

use reportd_shared::types::ReportRecord;

use super::error::ExportError;
use super::types::{ExportFile, XLSX_CONTENT_TYPE, export_file_name};

/// Fixed header row. Column order is part of the export contract and does
/// not vary with locale.
pub const REPORT_HEADERS: [&str; 5] = ["ID", "Name", "Description", "Amount", "Date"];

const HEADER_FILL: Color = Color::RGB(0x00D3_D3D3); // light gray

/// Renders the record sequence as a styled xlsx workbook.
///
/// Input order is preserved, one data row per record below the header.
/// `today` is used only for the filename.
///
/// # Errors
///
/// Returns an error if workbook assembly fails.
#[allow(clippy::cast_possible_truncation)]
pub fn render_xlsx(records: &[ReportRecord], today: NaiveDate) -> Result<ExportFile, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Report")?;

    let header_format = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_background_color(HEADER_FILL);
    let money_format = Format::new().set_num_format("$#,##0.00");
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    for (col, header) in REPORT_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = index as u32 + 1;
        worksheet.write_number(row, 0, f64::from(record.id))?;
        worksheet.write_string(row, 1, &record.name)?;
        worksheet.write_string(row, 2, &record.description)?;
        // The cell value is f64 by format; display precision comes from
        // the currency number format.
        worksheet.write_number_with_format(
            row,
            3,
            record.amount.to_f64().unwrap_or_default(),
            &money_format,
        )?;
        worksheet.write_datetime_with_format(row, 4, &record.date, &date_format)?;
    }

    worksheet.autofit();

    let bytes = workbook.save_to_buffer()?;
    Ok(ExportFile {
        file_name: export_file_name("xlsx", today),
        content_type: XLSX_CONTENT_TYPE,
        bytes,
    })
}
