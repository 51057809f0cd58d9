//! Export pipeline tests.

use std::time::Duration;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use reportd_shared::types::ReportRecord;

use super::error::ExportError;
use super::excel::{REPORT_HEADERS, render_xlsx};
use super::pdf::{DocumentConverter, WkhtmltopdfConverter, build_report_html, render_pdf};
use super::types::{PDF_CONTENT_TYPE, XLSX_CONTENT_TYPE, export_file_name};

fn sample_records(count: usize) -> Vec<ReportRecord> {
    (0..count)
        .map(|i| ReportRecord {
            id: i32::try_from(i).unwrap() + 1,
            name: format!("Item {i}"),
            description: format!("Description {i}"),
            amount: dec!(10.50) * rust_decimal::Decimal::from(i + 1),
            date: NaiveDate::from_ymd_opt(2026, 3, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        })
        .collect()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
}

#[test]
fn test_export_file_name_template() {
    assert_eq!(export_file_name("xlsx", today()), "Report-20260830.xlsx");
    assert_eq!(export_file_name("pdf", today()), "Report-20260830.pdf");
}

#[test]
fn test_render_xlsx_produces_zip_payload() {
    let file = render_xlsx(&sample_records(3), today()).unwrap();

    assert_eq!(file.file_name, "Report-20260830.xlsx");
    assert_eq!(file.content_type, XLSX_CONTENT_TYPE);
    // xlsx is a zip container.
    assert_eq!(&file.bytes[..2], b"PK");
}

#[test]
fn test_render_xlsx_empty_input() {
    let file = render_xlsx(&[], today()).unwrap();
    assert_eq!(&file.bytes[..2], b"PK");
    assert_eq!(worksheet_row_count(file.bytes), 1);
}

#[test]
fn test_render_xlsx_one_row_per_record_plus_header() {
    let file = render_xlsx(&sample_records(4), today()).unwrap();
    assert_eq!(worksheet_row_count(file.bytes), 5);
}

/// Opens the xlsx container and counts the rows in the report sheet.
fn worksheet_row_count(bytes: Vec<u8>) -> usize {
    use std::io::Read;

    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    let mut sheet = String::new();
    archive
        .by_name("xl/worksheets/sheet1.xml")
        .unwrap()
        .read_to_string(&mut sheet)
        .unwrap();
    sheet.matches("<row ").count()
}

#[test]
fn test_render_xlsx_does_not_mutate_input() {
    let records = sample_records(2);
    let before = records.clone();
    render_xlsx(&records, today()).unwrap();
    assert_eq!(records, before);
}

#[test]
fn test_header_column_order() {
    assert_eq!(
        REPORT_HEADERS,
        ["ID", "Name", "Description", "Amount", "Date"]
    );
}

#[test]
fn test_report_html_has_one_row_per_record() {
    let html = build_report_html(&sample_records(5));
    assert_eq!(html.matches("<tr><td>").count(), 5);
    assert!(html.contains("<th>Amount</th>"));
    assert!(html.contains("$10.50"));
    assert!(html.contains("2026-03-01"));
}

#[test]
fn test_report_html_negative_amount_sign_precedes_symbol() {
    let mut records = sample_records(1);
    records[0].amount = dec!(-5.00);

    let html = build_report_html(&records);
    assert!(html.contains("-$5.00"));
    assert!(!html.contains("$-"));
}

#[test]
fn test_report_html_escapes_markup() {
    let mut records = sample_records(1);
    records[0].name = "<script>alert('x')</script>".to_string();
    records[0].description = "Tom & \"Jerry\"".to_string();

    let html = build_report_html(&records);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("Tom &amp; &quot;Jerry&quot;"));
}

#[tokio::test]
async fn test_missing_converter_is_a_distinct_condition() {
    let converter = WkhtmltopdfConverter::new(
        "/nonexistent/path/to/wkhtmltopdf",
        Duration::from_secs(1),
    );
    assert!(!converter.available());

    let err = render_pdf(&sample_records(1), today(), &converter)
        .await
        .unwrap_err();
    assert!(matches!(err, ExportError::ConverterMissing(_)));
}

#[tokio::test]
async fn test_pdf_file_name_and_content_type() {
    // A converter stub keeps the renderer itself under test without the
    // external binary.
    struct StubConverter;

    #[async_trait::async_trait]
    impl DocumentConverter for StubConverter {
        fn available(&self) -> bool {
            true
        }

        async fn convert(&self, html: &str) -> Result<Vec<u8>, ExportError> {
            assert!(html.contains("<table>"));
            Ok(b"%PDF-1.7 stub".to_vec())
        }
    }

    let file = render_pdf(&sample_records(2), today(), &StubConverter)
        .await
        .unwrap();
    assert_eq!(file.file_name, "Report-20260830.pdf");
    assert_eq!(file.content_type, PDF_CONTENT_TYPE);
    assert!(file.bytes.starts_with(b"%PDF"));
}
