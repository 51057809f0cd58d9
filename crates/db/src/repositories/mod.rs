//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for store procedures, hiding the
//! wire-level gateway details from the rest of the application.

pub mod report;

pub use report::ReportRepository;
