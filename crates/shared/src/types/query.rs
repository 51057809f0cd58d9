//! Report query parameters and their normalization rules.
//!
//! Validation here is pure and total: every input has a defined normalized
//! output, and normalizing twice is a no-op. Out-of-range or unrecognized
//! values fall back to safe defaults instead of erroring.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest page size an interactive caller may request.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Sentinel page size that disables pagination. Used by the export surface
/// to request the full filtered result set; passes through `normalize`.
pub const UNBOUNDED_PAGE_SIZE: u32 = u32::MAX;

/// Columns the store may be asked to sort by.
///
/// This whitelist is the engine's only defense against unintended query
/// shapes: sorting happens store-side, so nothing outside this closed set
/// ever reaches the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortColumn {
    /// Record identifier.
    Id,
    /// Record name.
    Name,
    /// Record description.
    Description,
    /// Record amount.
    Amount,
    /// Occurrence date (the default sort key).
    #[default]
    Date,
}

impl SortColumn {
    /// Parses a free-form column name, falling back to [`SortColumn::Date`]
    /// for anything outside the whitelist.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "id" => Self::Id,
            "name" => Self::Name,
            "description" => Self::Description,
            "amount" => Self::Amount,
            _ => Self::Date,
        }
    }

    /// Store-native column identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "Id",
            Self::Name => "Name",
            Self::Description => "Description",
            Self::Amount => "Amount",
            Self::Date => "Date",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending (the default).
    #[default]
    Desc,
}

impl SortDirection {
    /// Parses a free-form direction, case-insensitively. Anything other
    /// than "ASC" normalizes to [`SortDirection::Desc`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("asc") {
            Self::Asc
        } else {
            Self::Desc
        }
    }

    /// Store-native direction keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Validated query request for report listings and exports.
///
/// All fields are independent and may be partially supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportQuery {
    /// Page number (1-indexed).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Items per page, clamped to `[1, MAX_PAGE_SIZE]` on normalization.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Whitelisted sort column.
    #[serde(default)]
    pub sort_column: SortColumn,
    /// Sort direction.
    #[serde(default)]
    pub sort_direction: SortDirection,
    /// Case-insensitive substring filter against name or description.
    #[serde(default)]
    pub search_term: Option<String>,
    /// Inclusive lower amount bound.
    #[serde(default)]
    pub min_amount: Option<Decimal>,
    /// Inclusive upper amount bound.
    #[serde(default)]
    pub max_amount: Option<Decimal>,
    /// Inclusive start of the date range.
    #[serde(default)]
    pub start_date: Option<NaiveDateTime>,
    /// Inclusive end of the date range.
    #[serde(default)]
    pub end_date: Option<NaiveDateTime>,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

impl Default for ReportQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
            sort_column: SortColumn::default(),
            sort_direction: SortDirection::default(),
            search_term: None,
            min_amount: None,
            max_amount: None,
            start_date: None,
            end_date: None,
        }
    }
}

impl ReportQuery {
    /// Normalizes the request into its canonical form.
    ///
    /// Page clamps to at least 1; page size clamps into
    /// `[1, MAX_PAGE_SIZE]` unless it is the `UNBOUNDED_PAGE_SIZE`
    /// sentinel; blank search terms collapse to `None`. Idempotent.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        self.page = self.page.max(1);
        if self.page_size != UNBOUNDED_PAGE_SIZE {
            self.page_size = self.page_size.clamp(1, MAX_PAGE_SIZE);
        }
        self.search_term = self
            .search_term
            .map(|term| term.trim().to_string())
            .filter(|term| !term.is_empty());
        self
    }

    /// Converts the request into export form: page 1, pagination disabled.
    ///
    /// The engine does not special-case exports; this is the same contract
    /// with pagination turned off by parameter.
    #[must_use]
    pub fn for_export(mut self) -> Self {
        self.page = 1;
        self.page_size = UNBOUNDED_PAGE_SIZE;
        self
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
