//! Database layer: record store gateway and report repository.
//!
//! This crate provides:
//! - The procedure gateway (connection handling, dual-resultset protocol)
//! - The report repository implementing the core's query seam

pub mod gateway;
pub mod repositories;

pub use gateway::{CountedRows, ProcParam, ProcedureGateway};
pub use repositories::ReportRepository;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

/// Establishes a connection pool to the database.
///
/// # Errors
///
/// Returns an error if the pool cannot be established.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
