//! Record store gateway: named procedure execution.
//!
//! The store contract for listing procedures is two sequential result
//! sets from one `CALL`: a single-row/single-column total count, then the
//! page of data rows. The count must be consumed before the row set is
//! advanced; that ordering is a protocol contract, not an implementation
//! detail.

use chrono::NaiveDateTime;
use futures::TryStreamExt;
use rust_decimal::Decimal;
use sqlx::mysql::{MySql, MySqlArguments, MySqlPool, MySqlRow};
use sqlx::query::Query;
use sqlx::{Either, Executor, Row};
use tracing::error;

use reportd_shared::{AppError, AppResult};

/// Typed parameter for a store procedure call, bound positionally.
#[derive(Debug, Clone)]
pub enum ProcParam {
    /// Integer parameter.
    Int(i64),
    /// Nullable text parameter.
    Text(Option<String>),
    /// Nullable decimal amount parameter.
    Amount(Option<Decimal>),
    /// Nullable datetime parameter.
    DateTime(Option<NaiveDateTime>),
}

/// A page of rows preceded by the scalar total-count result set.
#[derive(Debug)]
pub struct CountedRows {
    /// Total matching count across all pages for this exact query.
    pub total: u64,
    /// The data rows of the requested page.
    pub rows: Vec<MySqlRow>,
}

/// Executes named, parameterized procedures against the relational store.
///
/// Each invocation acquires a pool connection, executes, and releases the
/// connection when the call completes or fails; no connection leaks across
/// calls. Every store-side failure (connection unavailable, procedure
/// missing, parameter mismatch) surfaces as the single
/// [`AppError::Backend`] kind after logging.
#[derive(Debug, Clone)]
pub struct ProcedureGateway {
    pool: MySqlPool,
}

impl ProcedureGateway {
    /// Creates a gateway over the given pool.
    #[must_use]
    pub const fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Executes a dual-resultset procedure: count first, then rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Backend`] on any store failure, including a
    /// protocol violation where the count result set is absent.
    pub async fn fetch_counted(
        &self,
        procedure: &str,
        params: &[ProcParam],
    ) -> AppResult<CountedRows> {
        let sql = call_statement(procedure, params.len());
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| backend_error(procedure, &e))?;

        let statement = bind_params(sqlx::query(&sql), params);
        let mut stream = (&mut *conn).fetch_many(statement);

        let mut total: Option<u64> = None;
        let mut rows = Vec::new();
        while let Some(step) = stream
            .try_next()
            .await
            .map_err(|e| backend_error(procedure, &e))?
        {
            match step {
                Either::Left(_) => {}
                Either::Right(row) => {
                    if total.is_some() {
                        rows.push(row);
                    } else {
                        // First row overall belongs to the count result set.
                        let count: i64 = row
                            .try_get(0)
                            .map_err(|e| backend_error(procedure, &e))?;
                        total = Some(u64::try_from(count).unwrap_or(0));
                    }
                }
            }
        }

        let total = total.ok_or_else(|| {
            error!(procedure, "store returned no count result set");
            AppError::Backend(format!("procedure {procedure} returned no count"))
        })?;

        Ok(CountedRows { total, rows })
    }

    /// Executes a single-resultset procedure and returns its rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Backend`] on any store failure.
    pub async fn fetch_rows(
        &self,
        procedure: &str,
        params: &[ProcParam],
    ) -> AppResult<Vec<MySqlRow>> {
        let sql = call_statement(procedure, params.len());
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| backend_error(procedure, &e))?;

        let statement = bind_params(sqlx::query(&sql), params);
        let mut stream = (&mut *conn).fetch_many(statement);

        let mut rows = Vec::new();
        while let Some(step) = stream
            .try_next()
            .await
            .map_err(|e| backend_error(procedure, &e))?
        {
            if let Either::Right(row) = step {
                rows.push(row);
            }
        }

        Ok(rows)
    }
}

/// Builds the `CALL` statement for a procedure of the given arity.
/// Procedure names are compile-time constants; only values are bound.
fn call_statement(procedure: &str, arity: usize) -> String {
    let placeholders = vec!["?"; arity].join(", ");
    format!("CALL {procedure}({placeholders})")
}

fn bind_params<'q>(
    mut statement: Query<'q, MySql, MySqlArguments>,
    params: &[ProcParam],
) -> Query<'q, MySql, MySqlArguments> {
    for param in params {
        statement = match param {
            ProcParam::Int(value) => statement.bind(*value),
            ProcParam::Text(value) => statement.bind(value.clone()),
            ProcParam::Amount(value) => statement.bind(*value),
            ProcParam::DateTime(value) => statement.bind(*value),
        };
    }
    statement
}

fn backend_error(procedure: &str, err: &sqlx::Error) -> AppError {
    error!(procedure, error = %err, "store procedure call failed");
    AppError::Backend(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_statement_arity() {
        assert_eq!(
            call_statement("usp_get_all_reports", 9),
            "CALL usp_get_all_reports(?, ?, ?, ?, ?, ?, ?, ?, ?)"
        );
        assert_eq!(call_statement("usp_get_report_by_id", 1), "CALL usp_get_report_by_id(?)");
        assert_eq!(call_statement("usp_noargs", 0), "CALL usp_noargs()");
    }
}
