//! Pagination state and transitions.

use std::ops::Range;

use crate::error::DashboardError;

/// Default number of page numbers shown around the current page.
pub const DEFAULT_PAGE_WINDOW: usize = 3;

/// A requested pagination transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    /// Go to the next page.
    Next,
    /// Go to the previous page.
    Prev,
    /// Go to a specific page (1-indexed).
    Jump(usize),
    /// Change the page size. Always returns to page 1.
    SetPageSize(usize),
    /// Change the total item count.
    SetTotal(usize),
}

/// One affordance in the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A page number.
    Page(usize),
    /// A gap between the window and the last page.
    Ellipsis,
}

/// The "Showing X to Y of Z" range. `start` and `end` are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowingRange {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl std::fmt::Display for ShowingRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} entries",
            self.start, self.end, self.total
        )
    }
}

/// Page/size/total bookkeeping for a paginated row set.
///
/// The current page is 1-indexed and always satisfies
/// `1 <= current_page <= max(total_pages, 1)`.
///
/// # Example
///
/// ```
/// use dashboard_lib::pagination::{PageAction, PaginationState};
///
/// let mut state = PaginationState::new(10, 23).unwrap();
/// assert_eq!(state.total_pages(), 3);
///
/// state.apply(PageAction::Jump(3));
/// let range = state.showing_range();
/// assert_eq!((range.start, range.end), (21, 23));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    current_page: usize,
    items_per_page: usize,
    total_items: usize,
}

impl PaginationState {
    /// Create state on page 1.
    pub fn new(items_per_page: usize, total_items: usize) -> Result<Self, DashboardError> {
        if items_per_page == 0 {
            return Err(DashboardError::InvalidPageSize);
        }
        Ok(Self {
            current_page: 1,
            items_per_page,
            total_items,
        })
    }

    /// Create state positioned on `page`, clamped into the valid range.
    pub fn at_page(
        items_per_page: usize,
        total_items: usize,
        page: usize,
    ) -> Result<Self, DashboardError> {
        let mut state = Self::new(items_per_page, total_items)?;
        state.current_page = state.clamp_page(page);
        Ok(state)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Number of pages; 0 when there are no items.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page)
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_prev_page(&self) -> bool {
        self.current_page > 1
    }

    /// Index range of the current page within the full row set.
    pub fn slice_bounds(&self) -> Range<usize> {
        let start = (self.current_page - 1)
            .saturating_mul(self.items_per_page)
            .min(self.total_items);
        let end = start.saturating_add(self.items_per_page).min(self.total_items);
        start..end
    }

    /// The current page's items out of the full set.
    ///
    /// Bounds are clamped to `items.len()`, so a set shorter than
    /// `total_items` yields a short or empty page rather than panicking.
    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let bounds = self.slice_bounds();
        let start = bounds.start.min(items.len());
        let end = bounds.end.min(items.len());
        &items[start..end]
    }

    /// The "Showing X to Y of Z" range.
    pub fn showing_range(&self) -> ShowingRange {
        if self.total_items == 0 {
            return ShowingRange {
                start: 0,
                end: 0,
                total: 0,
            };
        }
        ShowingRange {
            start: (self.current_page - 1) * self.items_per_page + 1,
            end: (self.current_page * self.items_per_page).min(self.total_items),
            total: self.total_items,
        }
    }

    /// Apply a transition. Returns `true` if the state changed.
    ///
    /// Invalid requests (next on the last page, a jump outside
    /// `1..=total_pages`, a zero page size) are ignored.
    pub fn apply(&mut self, action: PageAction) -> bool {
        let before = *self;
        match action {
            PageAction::Next => {
                if self.has_next_page() {
                    self.current_page += 1;
                }
            }
            PageAction::Prev => {
                if self.has_prev_page() {
                    self.current_page -= 1;
                }
            }
            PageAction::Jump(page) => {
                if (1..=self.total_pages()).contains(&page) {
                    self.current_page = page;
                }
            }
            PageAction::SetPageSize(size) => {
                if size >= 1 {
                    self.items_per_page = size;
                    self.current_page = 1;
                }
            }
            PageAction::SetTotal(total) => {
                self.total_items = total;
                self.current_page = self.clamp_page(self.current_page);
            }
        }

        let changed = *self != before;
        if !changed {
            log::debug!("pagination: {:?} left state unchanged", action);
        }
        changed
    }

    /// Go to the next page, if there is one.
    pub fn next_page(&mut self) -> bool {
        self.apply(PageAction::Next)
    }

    /// Go to the previous page, if there is one.
    pub fn prev_page(&mut self) -> bool {
        self.apply(PageAction::Prev)
    }

    /// Jump to `page`, ignoring targets outside `1..=total_pages`.
    pub fn jump_to(&mut self, page: usize) -> bool {
        self.apply(PageAction::Jump(page))
    }

    /// Change the page size and return to page 1.
    pub fn set_page_size(&mut self, size: usize) -> Result<(), DashboardError> {
        if size == 0 {
            return Err(DashboardError::InvalidPageSize);
        }
        self.apply(PageAction::SetPageSize(size));
        Ok(())
    }

    /// Change the total item count, clamping the current page.
    pub fn set_total(&mut self, total: usize) -> bool {
        self.apply(PageAction::SetTotal(total))
    }

    /// Page numbers to display, at most `window` wide, around the current page.
    ///
    /// The last page is appended when the window stops short of it, with an
    /// ellipsis when there is more than one page in between.
    pub fn page_window(&self, window: usize) -> Vec<PageItem> {
        let total = self.total_pages();
        if total == 0 || window == 0 {
            return Vec::new();
        }

        let window = window.min(total);
        let mut start = self.current_page.saturating_sub(window / 2).max(1);
        let end = (start + window - 1).min(total);
        if end + 1 - start < window {
            start = (end + 1).saturating_sub(window).max(1);
        }

        let mut items: Vec<PageItem> = (start..=end).map(PageItem::Page).collect();
        if end < total {
            if end + 1 < total {
                items.push(PageItem::Ellipsis);
            }
            items.push(PageItem::Page(total));
        }
        items
    }

    fn clamp_page(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages().max(1))
    }
}
