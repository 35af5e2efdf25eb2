//! Caller-side owner of a client-held row set.
//!
//! A [`Listing`] plays the role of the page that holds the authoritative
//! dataset: it filters, sorts and paginates, and applies the same reset
//! rules everywhere. Filter changes and page-size changes return to page 1;
//! shrinking totals clamp the current page.

use crate::error::DashboardError;
use crate::filter::{MatchMode, RowFilter};
use crate::model::Row;
use crate::pagination::{PageAction, PaginationState};
use crate::sort::{SortState, sort_rows};

/// Filter + sort + pagination over an owned row set.
#[derive(Debug, Clone)]
pub struct Listing {
    rows: Vec<Row>,
    filter: RowFilter,
    sort: SortState,
    pagination: PaginationState,
    visible: Vec<Row>,
}

impl Listing {
    /// Create a listing over `rows`, searching `search_fields`.
    pub fn new<I, S>(
        rows: Vec<Row>,
        search_fields: I,
        page_size: usize,
    ) -> Result<Self, DashboardError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut listing = Self {
            pagination: PaginationState::new(page_size, rows.len())?,
            rows,
            filter: RowFilter::new(search_fields),
            sort: SortState::new(),
            visible: Vec::new(),
        };
        listing.recompute();
        Ok(listing)
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn filter(&self) -> &RowFilter {
        &self.filter
    }

    /// All rows, unfiltered.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Filtered and sorted rows (every page).
    pub fn visible_rows(&self) -> &[Row] {
        &self.visible
    }

    /// The current page of visible rows.
    pub fn page_rows(&self) -> &[Row] {
        self.pagination.page_slice(&self.visible)
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    /// Replace the dataset (e.g. after a fetch). The page is clamped.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.recompute();
    }

    /// Remove rows whose `id` renders as `id`. Returns how many were removed.
    pub fn remove_by_id(&mut self, id: &str) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| row.id().render_text() != id);
        let removed = before - self.rows.len();
        if removed > 0 {
            self.recompute();
        }
        removed
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// Change the search query and return to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
        self.refilter();
    }

    /// Set an exact-match filter (empty value removes it) and return to page 1.
    pub fn set_exact_filter(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.filter.set_exact(field, value);
        self.refilter();
    }

    /// Change the match mode and return to page 1.
    pub fn set_match_mode(&mut self, mode: MatchMode) {
        self.filter.set_mode(mode);
        self.refilter();
    }

    /// Remove all filters and return to page 1.
    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.refilter();
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Handle a sort request for `accessor`. The current page is kept.
    pub fn toggle_sort(&mut self, accessor: &str, sortable: bool) -> bool {
        if !self.sort.click(accessor, sortable) {
            return false;
        }
        self.recompute();
        true
    }

    /// Replace the sort state.
    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
        self.recompute();
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    pub fn next(&mut self) -> bool {
        self.pagination.apply(PageAction::Next)
    }

    pub fn prev(&mut self) -> bool {
        self.pagination.apply(PageAction::Prev)
    }

    pub fn go_to(&mut self, page: usize) -> bool {
        self.pagination.apply(PageAction::Jump(page))
    }

    pub fn set_page_size(&mut self, size: usize) -> Result<(), DashboardError> {
        self.pagination.set_page_size(size)
    }

    fn refilter(&mut self) {
        self.recompute();
        self.pagination.apply(PageAction::Jump(1));
    }

    fn recompute(&mut self) {
        self.visible = self.filter.apply(&self.rows);
        sort_rows(&mut self.visible, &self.sort);
        self.pagination.apply(PageAction::SetTotal(self.visible.len()));
    }
}
