//! Report repository: validated query dispatch and row mapping.
//!
//! Sorting and filtering are applied by the store; the repository's job is
//! to normalize the request, dispatch the named procedure, and map rows
//! back into typed records. Columns are read by name, not ordinal, so the
//! store may reorder them freely.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::Row;
use sqlx::mysql::MySqlRow;

use reportd_core::report::ReportQueries;
use reportd_shared::types::{Paginated, ReportQuery, ReportRecord};
use reportd_shared::{AppError, AppResult};

use crate::gateway::{CountedRows, ProcParam, ProcedureGateway};

/// Procedure returning the filtered, sorted, paginated report listing.
pub const PROC_GET_ALL_REPORTS: &str = "usp_get_all_reports";
/// Procedure returning reports within an inclusive date range.
pub const PROC_GET_REPORTS_BY_DATE_RANGE: &str = "usp_get_reports_by_date_range";
/// Procedure returning a single report by identifier.
pub const PROC_GET_REPORT_BY_ID: &str = "usp_get_report_by_id";

/// Report repository over the procedure gateway.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    gateway: ProcedureGateway,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(gateway: ProcedureGateway) -> Self {
        Self { gateway }
    }

    /// Maps a data row to a record by column name. A row missing any
    /// required column is a mapping failure.
    fn map_record(row: &MySqlRow) -> AppResult<ReportRecord> {
        Ok(ReportRecord {
            id: row.try_get("Id").map_err(mapping_error)?,
            name: row.try_get("Name").map_err(mapping_error)?,
            description: row.try_get("Description").map_err(mapping_error)?,
            amount: row.try_get("Amount").map_err(mapping_error)?,
            date: row.try_get("Date").map_err(mapping_error)?,
        })
    }

    fn map_page(counted: CountedRows, page: u32, page_size: u32) -> AppResult<Paginated<ReportRecord>> {
        let items = counted
            .rows
            .iter()
            .map(Self::map_record)
            .collect::<AppResult<Vec<_>>>()?;
        Ok(Paginated::new(items, page, page_size, counted.total))
    }
}

/// Builds the parameter list for the full listing procedure. The request
/// must already be normalized.
fn list_params(query: &ReportQuery) -> Vec<ProcParam> {
    vec![
        ProcParam::Int(i64::from(query.page)),
        ProcParam::Int(i64::from(query.page_size)),
        ProcParam::Text(Some(query.sort_column.as_str().to_string())),
        ProcParam::Text(Some(query.sort_direction.as_str().to_string())),
        ProcParam::Text(query.search_term.clone()),
        ProcParam::Amount(query.min_amount),
        ProcParam::Amount(query.max_amount),
        ProcParam::DateTime(query.start_date),
        ProcParam::DateTime(query.end_date),
    ]
}

/// Builds the parameter list for the date-range procedure.
fn date_range_params(
    start: NaiveDateTime,
    end: NaiveDateTime,
    query: &ReportQuery,
) -> Vec<ProcParam> {
    vec![
        ProcParam::DateTime(Some(start)),
        ProcParam::DateTime(Some(end)),
        ProcParam::Int(i64::from(query.page)),
        ProcParam::Int(i64::from(query.page_size)),
        ProcParam::Text(Some(query.sort_column.as_str().to_string())),
        ProcParam::Text(Some(query.sort_direction.as_str().to_string())),
        ProcParam::Text(query.search_term.clone()),
        ProcParam::Amount(query.min_amount),
        ProcParam::Amount(query.max_amount),
    ]
}

fn mapping_error(err: sqlx::Error) -> AppError {
    AppError::Backend(format!("row mapping failed: {err}"))
}

#[async_trait]
impl ReportQueries for ReportRepository {
    async fn fetch_page(&self, query: &ReportQuery) -> AppResult<Paginated<ReportRecord>> {
        let query = query.clone().normalize();
        let params = list_params(&query);
        let counted = self
            .gateway
            .fetch_counted(PROC_GET_ALL_REPORTS, &params)
            .await?;
        Self::map_page(counted, query.page, query.page_size)
    }

    async fn fetch_by_date_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        query: &ReportQuery,
    ) -> AppResult<Paginated<ReportRecord>> {
        let query = query.clone().normalize();
        let params = date_range_params(start, end, &query);
        let counted = self
            .gateway
            .fetch_counted(PROC_GET_REPORTS_BY_DATE_RANGE, &params)
            .await?;
        Self::map_page(counted, query.page, query.page_size)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<ReportRecord>> {
        let rows = self
            .gateway
            .fetch_rows(PROC_GET_REPORT_BY_ID, &[ProcParam::Int(i64::from(id))])
            .await?;
        rows.first().map(Self::map_record).transpose()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
