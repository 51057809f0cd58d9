//! Pagination types for list and export endpoints.

use serde::{Deserialize, Serialize};

/// A single page of results plus the total match count across all pages.
///
/// The derived fields are computed by [`Paginated::new`] so the pagination
/// invariants hold by construction: `total_pages = ceil(total_count /
/// page_size)` (0 when `total_count` is 0), `has_previous_page = page > 1`,
/// `has_next_page = page < total_pages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// The items in the current page, in store order.
    pub items: Vec<T>,
    /// Requested page number (1-indexed).
    pub page: u32,
    /// Requested page size.
    pub page_size: u32,
    /// Total matching count across all pages.
    pub total_count: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Whether a previous page exists.
    pub has_previous_page: bool,
    /// Whether a next page exists.
    pub has_next_page: bool,
}

impl<T> Paginated<T> {
    /// Creates a page, deriving `total_pages` and the boundary flags.
    #[must_use]
    pub fn new(items: Vec<T>, page: u32, page_size: u32, total_count: u64) -> Self {
        let total_pages = if total_count == 0 {
            0
        } else {
            total_count.div_ceil(u64::from(page_size.max(1)))
        };

        Self {
            items,
            page,
            page_size,
            total_count,
            total_pages,
            has_previous_page: page > 1,
            has_next_page: u64::from(page) < total_pages,
        }
    }

    /// Creates an empty page for zero matches.
    #[must_use]
    pub fn empty(page: u32, page_size: u32) -> Self {
        Self::new(Vec::new(), page, page_size, 0)
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
