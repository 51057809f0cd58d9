//! Report querying behind a degrade-to-fallback failure boundary.
//!
//! The facade is the sole place failure-to-availability trade-offs are
//! made: report viewing stays usable (with visibly marked sample data)
//! even when the backend is down.

pub mod service;


pub use service::{ReportQueries, ReportService, fallback_records};
