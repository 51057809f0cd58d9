//! Core business logic for Reportd.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. The storage seam is the [`report::ReportQueries`] trait,
//! implemented by the database crate.
//!
//! # Modules
//!
//! - `report` - Report query facade with degrade-to-fallback resilience
//! - `export` - Spreadsheet and print-document export pipeline

pub mod export;
pub mod report;
