//! The directory query pipeline: filter, search, then paginate.
//!
//! Filtering never reorders records. The served page is always a
//! contiguous window of the matches in catalog order, so two queries
//! over the same catalog and state return identical pages.

use serde::Serialize;
use tracing::debug;

use vitrina_core::defaults;
use vitrina_core::models::ListingRecord;
use vitrina_core::CatalogConfig;

use crate::pager::{PageMeta, Pager};
use crate::selection::{CategorySelection, SelectionChange};

/// Browser state for one directory view: category selection, search
/// text, and the current page.
///
/// Every filter mutation returns the view to page 1, so a narrowed
/// result set is never entered on a page that no longer exists. The
/// query path re-clamps the page anyway; the reset keeps the reading
/// position sensible, the clamp keeps stale state harmless.
#[derive(Debug, Clone)]
pub struct QueryState {
    selection: CategorySelection,
    search_text: String,
    pager: Pager,
}

impl QueryState {
    /// Empty filters, page 1, with the given page size.
    pub fn new(items_per_page: usize) -> Self {
        Self {
            selection: CategorySelection::new(),
            search_text: String::new(),
            pager: Pager::new(items_per_page),
        }
    }

    /// State for the main listing grid.
    pub fn listings() -> Self {
        Self::new(defaults::PAGE_SIZE_LISTINGS)
    }

    /// State for the academy video view.
    pub fn videos() -> Self {
        Self::new(defaults::PAGE_SIZE_VIDEOS)
    }

    /// State sized from runtime configuration.
    pub fn with_config(config: &CatalogConfig) -> Self {
        Self::new(config.page_size)
    }

    pub fn selection(&self) -> &CategorySelection {
        &self.selection
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn page(&self) -> usize {
        self.pager.page()
    }

    pub fn items_per_page(&self) -> usize {
        self.pager.items_per_page()
    }

    /// Apply a selection change and return to page 1.
    pub fn apply(&mut self, change: SelectionChange) {
        self.selection.apply(change);
        self.pager.reset();
    }

    /// Toggle one category and return to page 1.
    pub fn toggle_category(&mut self, category: impl Into<String>) {
        self.apply(SelectionChange::Toggle(category.into()));
    }

    /// Clear the category selection and return to page 1.
    pub fn reset_categories(&mut self) {
        self.apply(SelectionChange::ResetAll);
    }

    /// Replace the search text. The page resets only when the text
    /// actually changes.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.search_text {
            self.search_text = text;
            self.pager.reset();
        }
    }

    /// Move to a requested page, clamped against the given page count.
    pub fn set_page(&mut self, requested: i64, total_pages: usize) {
        self.pager.set_page(requested, total_pages);
    }
}

/// One served page of query results.
///
/// Records are borrowed from the catalog in their original order.
#[derive(Debug, Clone, Serialize)]
pub struct QueryPage<'a> {
    pub records: Vec<&'a ListingRecord>,
    pub meta: PageMeta,
}

/// Run the full query pipeline over a catalog.
///
/// A record is kept when it passes both filters:
/// - category: the selection is empty, or contains the record's
///   category exactly (case-sensitive);
/// - search: the text is empty, or is a case-insensitive substring of
///   the record's title, description, or category.
///
/// The stored page is clamped against the live match count before
/// slicing, so the result is always a valid (possibly empty) page.
pub fn query<'a>(records: &'a [ListingRecord], state: &QueryState) -> QueryPage<'a> {
    let needle = state.search_text().to_lowercase();

    let matched: Vec<&ListingRecord> = records
        .iter()
        .filter(|record| {
            passes_category(record, state.selection()) && passes_search(record, &needle)
        })
        .collect();

    let meta = PageMeta::new(matched.len(), state.page() as i64, state.items_per_page());
    let start = meta.offset();
    let end = (start + meta.per_page).min(matched.len());
    let page_records = matched[start..end].to_vec();

    debug!(
        catalog_size = records.len(),
        category_count = state.selection().len(),
        match_count = meta.total,
        page = meta.page,
        total_pages = meta.total_pages,
        result_count = page_records.len(),
        "Query complete"
    );

    QueryPage {
        records: page_records,
        meta,
    }
}

/// Slice one page out of an unfiltered record list.
///
/// Used by views that paginate without filtering, like the academy
/// video grid.
pub fn paginate<T>(records: &[T], requested_page: i64, per_page: usize) -> (Vec<&T>, PageMeta) {
    let meta = PageMeta::new(records.len(), requested_page, per_page);
    let start = meta.offset();
    let end = (start + meta.per_page).min(records.len());
    (records[start..end].iter().collect(), meta)
}

fn passes_category(record: &ListingRecord, selection: &CategorySelection) -> bool {
    selection.is_empty() || selection.contains(&record.category)
}

fn passes_search(record: &ListingRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record.title.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
        || record.category.to_lowercase().contains(needle)
}
