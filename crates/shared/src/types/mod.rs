//! Common types used across the application.

pub mod pagination;
pub mod query;
pub mod record;

pub use pagination::Paginated;
pub use query::{MAX_PAGE_SIZE, ReportQuery, SortColumn, SortDirection, UNBOUNDED_PAGE_SIZE};
pub use record::ReportRecord;
