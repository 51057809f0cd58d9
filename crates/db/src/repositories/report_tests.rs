use reportd_shared::types::{ReportQuery, SortColumn, SortDirection};

use super::*;

#[test]
fn test_list_params_order_matches_procedure_contract() {
    let query = ReportQuery {
        page: 2,
        page_size: 25,
        sort_column: SortColumn::Amount,
        sort_direction: SortDirection::Asc,
        search_term: Some("mouse".to_string()),
        ..ReportQuery::default()
    }
    .normalize();

    let params = list_params(&query);
    assert_eq!(params.len(), 9);

    assert!(matches!(params[0], ProcParam::Int(2)));
    assert!(matches!(params[1], ProcParam::Int(25)));
    assert!(matches!(&params[2], ProcParam::Text(Some(column)) if column == "Amount"));
    assert!(matches!(&params[3], ProcParam::Text(Some(direction)) if direction == "ASC"));
    assert!(matches!(&params[4], ProcParam::Text(Some(term)) if term == "mouse"));
    assert!(matches!(params[5], ProcParam::Amount(None)));
    assert!(matches!(params[6], ProcParam::Amount(None)));
    assert!(matches!(params[7], ProcParam::DateTime(None)));
    assert!(matches!(params[8], ProcParam::DateTime(None)));
}

#[test]
fn test_date_range_params_lead_with_the_range() {
    let start = chrono::NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let end = chrono::NaiveDate::from_ymd_opt(2026, 1, 31)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();

    let params = date_range_params(start, end, &ReportQuery::default().normalize());
    assert_eq!(params.len(), 9);
    assert!(matches!(params[0], ProcParam::DateTime(Some(d)) if d == start));
    assert!(matches!(params[1], ProcParam::DateTime(Some(d)) if d == end));
    assert!(matches!(params[2], ProcParam::Int(1)));
}

#[test]
fn test_procedure_names() {
    assert_eq!(PROC_GET_ALL_REPORTS, "usp_get_all_reports");
    assert_eq!(PROC_GET_REPORTS_BY_DATE_RANGE, "usp_get_reports_by_date_range");
    assert_eq!(PROC_GET_REPORT_BY_ID, "usp_get_report_by_id");
}
