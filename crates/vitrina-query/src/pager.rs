//! Page arithmetic for the directory browser.
//!
//! Every page count is computed the same way: a catalog with no matches
//! still has one (empty) page, and any requested page is clamped into
//! `1..=total_pages` before records are sliced. Page numbers are 1-based.

use serde::{Deserialize, Serialize};

/// Number of pages needed for `match_count` records.
///
/// Always at least 1, so an empty result set renders as a single empty
/// page rather than page 0 of 0.
pub fn total_pages(match_count: usize, items_per_page: usize) -> usize {
    match_count.div_ceil(items_per_page.max(1)).max(1)
}

/// Clamp a requested page into `1..=total_pages`.
///
/// The request is signed so that out-of-range values from any source
/// (zero, negative, far past the end) degrade to a valid page instead
/// of failing.
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let upper = total_pages.max(1) as i64;
    requested.clamp(1, upper) as usize
}

/// Pagination summary attached to every query result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Records matching the filters, across all pages.
    pub total: usize,
    /// The page actually served, after clamping.
    pub page: usize,
    /// Page size the result was sliced with.
    pub per_page: usize,
    /// Total pages for this match count, at least 1.
    pub total_pages: usize,
    /// Whether pages exist past the served one.
    pub has_more: bool,
}

impl PageMeta {
    /// Build the summary for a match count and requested page.
    pub fn new(total: usize, requested_page: i64, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total_pages(total, per_page);
        let page = clamp_page(requested_page, total_pages);
        Self {
            total,
            page,
            per_page,
            total_pages,
            has_more: page < total_pages,
        }
    }

    /// Index of the first record on the served page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }
}

/// Current-page tracking for one filtered view.
///
/// The page resets to 1 whenever the filters feeding the view change;
/// the query path still clamps the stored page against the live match
/// count, so a stale page number can never select records past the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    items_per_page: usize,
}

impl Pager {
    /// Start on page 1 with the given page size (raised to 1 if zero).
    pub fn new(items_per_page: usize) -> Self {
        Self {
            page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Move to a requested page, clamped against the current page count.
    pub fn set_page(&mut self, requested: i64, total_pages: usize) {
        self.page = clamp_page(requested, total_pages);
    }

    /// Return to page 1, for use whenever a filter changes.
    pub fn reset(&mut self) {
        self.page = 1;
    }
}
