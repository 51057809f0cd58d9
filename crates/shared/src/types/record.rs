//! Report record type.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single report row as served from the relational store.
///
/// Records are pure projections of store state at query time: constructed
/// once from a row, never partially populated, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    /// Stable unique identifier.
    pub id: i32,
    /// Short name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Amount with currency semantics. Non-negative expected, not enforced.
    pub amount: Decimal,
    /// Occurrence timestamp. No timezone guarantee is assumed.
    pub date: NaiveDateTime,
}
