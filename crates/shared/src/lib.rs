//! Shared types, errors, and configuration for Reportd.
//!
//! This crate provides common types used across all other crates:
//! - Report record and query types
//! - Pagination types for list and export endpoints
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
