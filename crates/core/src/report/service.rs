//! Report service facade with fallback-on-failure semantics.

use async_trait::async_trait;
use chrono::{Duration, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use tracing::warn;

use reportd_shared::AppResult;
use reportd_shared::types::{Paginated, ReportQuery, ReportRecord};

/// Storage seam for report queries, implemented by the database layer.
///
/// Implementations apply sorting and filtering store-side and return the
/// page of records together with the total match count.
#[async_trait]
pub trait ReportQueries: Send + Sync {
    /// Fetches one page of the filtered, sorted report listing.
    async fn fetch_page(&self, query: &ReportQuery) -> AppResult<Paginated<ReportRecord>>;

    /// Fetches one page of reports within an inclusive date range.
    async fn fetch_by_date_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        query: &ReportQuery,
    ) -> AppResult<Paginated<ReportRecord>>;

    /// Looks a single report up by its identifier.
    async fn find_by_id(&self, id: i32) -> AppResult<Option<ReportRecord>>;
}

/// Report service wrapping every query in a failure boundary.
///
/// On success the engine's result is returned unchanged. On any backend
/// failure the call degrades to the fixed fallback record set instead of
/// propagating the error; callers never see backend errors directly.
#[derive(Debug, Clone)]
pub struct ReportService<Q> {
    queries: Q,
}

impl<Q: ReportQueries> ReportService<Q> {
    /// Creates a new report service over the given query engine.
    pub const fn new(queries: Q) -> Self {
        Self { queries }
    }

    /// Fetches one page of reports, serving fallback data if the backend
    /// is unavailable.
    pub async fn fetch_page(&self, query: &ReportQuery) -> Paginated<ReportRecord> {
        match self.queries.fetch_page(query).await {
            Ok(page) => page,
            Err(e) => {
                warn!(error = %e, "report query failed, serving fallback data");
                paginate_fallback(query, fallback_records())
            }
        }
    }

    /// Fetches one page of reports within a date range, serving the
    /// range-filtered fallback set if the backend is unavailable.
    pub async fn fetch_by_date_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        query: &ReportQuery,
    ) -> Paginated<ReportRecord> {
        match self.queries.fetch_by_date_range(start, end, query).await {
            Ok(page) => page,
            Err(e) => {
                warn!(error = %e, "date range query failed, serving fallback data");
                let records = fallback_records()
                    .into_iter()
                    .filter(|r| r.date >= start && r.date <= end)
                    .collect();
                paginate_fallback(query, records)
            }
        }
    }

    /// Looks a report up by id. Backend failures degrade to `None`.
    pub async fn find_by_id(&self, id: i32) -> Option<ReportRecord> {
        match self.queries.find_by_id(id).await {
            Ok(record) => record,
            Err(e) => {
                warn!(id, error = %e, "report lookup failed");
                None
            }
        }
    }
}

/// The fixed, hand-authored record set served when the backend is down.
///
/// The "(Fallback Data)" suffix keeps degraded responses distinguishable
/// from live ones for tests and operators.
#[must_use]
pub fn fallback_records() -> Vec<ReportRecord> {
    let now = Utc::now().naive_utc();
    vec![
        ReportRecord {
            id: 1,
            name: "Laptop".to_string(),
            description: "Dell XPS 15 (Fallback Data)".to_string(),
            amount: Decimal::new(1_500_00, 2),
            date: now - Duration::days(10),
        },
        ReportRecord {
            id: 2,
            name: "Mouse".to_string(),
            description: "Logitech MX Master (Fallback Data)".to_string(),
            amount: Decimal::new(99_99, 2),
            date: now - Duration::days(8),
        },
    ]
}

/// Pages the fallback set with the caller's pagination parameters.
fn paginate_fallback(query: &ReportQuery, records: Vec<ReportRecord>) -> Paginated<ReportRecord> {
    let query = query.clone().normalize();
    let total = records.len() as u64;
    let offset = u64::from(query.page - 1).saturating_mul(u64::from(query.page_size));
    let items = records
        .into_iter()
        .skip(usize::try_from(offset).unwrap_or(usize::MAX))
        .take(usize::try_from(query.page_size).unwrap_or(usize::MAX))
        .collect();
    Paginated::new(items, query.page, query.page_size, total)
}
