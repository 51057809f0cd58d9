//! Report listing, lookup, and export routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use reportd_core::export::{self, ExportError, ExportFile};
use reportd_shared::types::{ReportQuery, SortColumn, SortDirection};

use crate::AppState;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports", get(list_reports))
        .route("/reports/date-range", get(list_reports_by_date_range))
        .route("/reports/export/excel", get(export_excel))
        .route("/reports/export/pdf", get(export_pdf))
        .route("/reports/{id}", get(get_report))
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Free-form query parameters accepted by the report surfaces.
///
/// Sort values arrive as plain strings and are folded through the column
/// whitelist; everything else is normalized by the query engine. Malformed
/// values fall back rather than erroring.
#[derive(Debug, Default, Deserialize)]
pub struct ReportParams {
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Items per page.
    pub page_size: Option<u32>,
    /// Sort column name.
    pub sort_column: Option<String>,
    /// Sort direction (ASC|DESC).
    pub sort_direction: Option<String>,
    /// Substring search against name/description.
    pub search_term: Option<String>,
    /// Inclusive lower amount bound.
    pub min_amount: Option<Decimal>,
    /// Inclusive upper amount bound.
    pub max_amount: Option<Decimal>,
    /// Inclusive start of the date range.
    pub start_date: Option<NaiveDateTime>,
    /// Inclusive end of the date range.
    pub end_date: Option<NaiveDateTime>,
}

impl ReportParams {
    /// Builds the validated, normalized query request.
    fn into_query(self) -> ReportQuery {
        ReportQuery {
            page: self.page.unwrap_or(1),
            page_size: self.page_size.unwrap_or(10),
            sort_column: self
                .sort_column
                .as_deref()
                .map(SortColumn::parse)
                .unwrap_or_default(),
            sort_direction: self
                .sort_direction
                .as_deref()
                .map(SortDirection::parse)
                .unwrap_or_default(),
            search_term: self.search_term,
            min_amount: self.min_amount,
            max_amount: self.max_amount,
            start_date: self.start_date,
            end_date: self.end_date,
        }
        .normalize()
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /reports
///
/// Paginated, filtered, sorted report listing.
async fn list_reports(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> impl IntoResponse {
    let query = params.into_query();
    Json(state.service.fetch_page(&query).await)
}

/// GET /reports/date-range
///
/// Date-bounded listing variant; both bounds are required.
async fn list_reports_by_date_range(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> Response {
    let (Some(start), Some(end)) = (params.start_date, params.end_date) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_date_range",
                "message": "start_date and end_date are required"
            })),
        )
            .into_response();
    };

    let query = params.into_query();
    Json(state.service.fetch_by_date_range(start, end, &query).await).into_response()
}

/// GET /reports/{id}
async fn get_report(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match state.service.find_by_id(id).await {
        Some(record) => Json(record).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "not_found",
                "message": format!("Report {id} not found")
            })),
        )
            .into_response(),
    }
}

/// GET /reports/export/excel
///
/// Exports the full filtered view as a styled spreadsheet.
async fn export_excel(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> Response {
    let query = params.into_query().for_export();
    let page = state.service.fetch_page(&query).await;

    match export::render_xlsx(&page.items, Utc::now().date_naive()) {
        Ok(file) => export_response(file),
        Err(e) => export_failure(&e),
    }
}

/// GET /reports/export/pdf
///
/// Exports the full filtered view as a print-ready document.
async fn export_pdf(State(state): State<AppState>, Query(params): Query<ReportParams>) -> Response {
    let query = params.into_query().for_export();
    let page = state.service.fetch_page(&query).await;

    match export::render_pdf(&page.items, Utc::now().date_naive(), state.converter.as_ref()).await {
        Ok(file) => export_response(file),
        Err(e) => export_failure(&e),
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Wraps a finished export as a download response.
fn export_response(file: ExportFile) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.file_name),
            ),
        ],
        file.bytes,
    )
        .into_response()
}

/// Maps export failures to caller-facing warnings. The missing-converter
/// precondition gets an actionable message; everything else is generic.
fn export_failure(err: &ExportError) -> Response {
    match err {
        ExportError::ConverterMissing(path) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "error": "converter_missing",
                "message": format!(
                    "wkhtmltopdf was not found at {}. Download it from \
                     https://wkhtmltopdf.org/downloads.html or point \
                     export.converter_path at the installed binary.",
                    path.display()
                )
            })),
        )
            .into_response(),
        ExportError::Generation(_) | ExportError::Workbook(_) => {
            error!(error = %err, "export generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "export_failed",
                    "message": "Failed to generate the export document"
                })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use reportd_shared::types::{MAX_PAGE_SIZE, UNBOUNDED_PAGE_SIZE};

    use crate::create_router;
    use crate::routes::test_state;

    use super::*;

    #[test]
    fn test_params_fold_through_whitelist() {
        let params = ReportParams {
            sort_column: Some("created_at".to_string()),
            sort_direction: Some("upwards".to_string()),
            ..ReportParams::default()
        };
        let query = params.into_query();
        assert_eq!(query.sort_column, SortColumn::Date);
        assert_eq!(query.sort_direction, SortDirection::Desc);
    }

    #[test]
    fn test_params_default_to_first_page() {
        let query = ReportParams::default().into_query();
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 10);
    }

    #[test]
    fn test_params_clamp_page_size() {
        let params = ReportParams {
            page_size: Some(9999),
            ..ReportParams::default()
        };
        assert_eq!(params.into_query().page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_export_query_disables_pagination() {
        let params = ReportParams {
            page: Some(7),
            page_size: Some(5),
            ..ReportParams::default()
        };
        let query = params.into_query().for_export();
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, UNBOUNDED_PAGE_SIZE);
    }

    #[tokio::test]
    async fn test_date_range_route_requires_both_bounds() {
        let app = create_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/reports/date-range?start_date=2026-01-01T00:00:00")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "invalid_date_range");
    }
}
