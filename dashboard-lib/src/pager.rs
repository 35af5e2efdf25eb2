//! Page-number strip with an items-per-page selector.
//!
//! [`DynamicPagination`] never owns or mutates a [`PaginationState`]. It
//! draws from the state it is given and reports the *requested* page or
//! page size through callbacks; the caller commits the change and renders
//! again.

use crate::pagination::{DEFAULT_PAGE_WINDOW, PageItem, PaginationState, ShowingRange};

/// Page sizes offered by default.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 7] = [5, 10, 15, 20, 25, 30, 50];

type PageCallback = Box<dyn FnMut(usize)>;

/// Pager configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerConfig {
    /// Maximum consecutive page numbers around the current page.
    pub window: usize,
    /// Sizes offered by the selector.
    pub page_size_options: Vec<usize>,
    /// Show the summary text and the page-size selector.
    pub show_page_size: bool,
    /// The pager is hidden while `total_items <= min_items`.
    pub min_items: usize,
    /// Force the pager off regardless of totals.
    pub show: bool,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_PAGE_WINDOW,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            show_page_size: false,
            min_items: 0,
            show: true,
        }
    }
}

impl PagerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn with_page_size_options(mut self, options: Vec<usize>) -> Self {
        self.page_size_options = options;
        self
    }

    pub fn with_show_page_size(mut self, show: bool) -> Self {
        self.show_page_size = show;
        self
    }

    pub fn with_min_items(mut self, min_items: usize) -> Self {
        self.min_items = min_items;
        self
    }

    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }
}

/// A clickable control with an enabled flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub enabled: bool,
}

/// One entry in the page strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerItem {
    Page { number: usize, active: bool },
    Ellipsis,
}

/// The items-per-page selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSizeSelector {
    pub current: usize,
    pub options: Vec<usize>,
}

/// Everything needed to draw the pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerView {
    pub previous: Control,
    pub items: Vec<PagerItem>,
    pub next: Control,
    /// "Showing X to Y of Z entries", with the selector enabled.
    pub summary: Option<ShowingRange>,
    pub page_size: Option<PageSizeSelector>,
}

/// Pagination control reporting page and page-size requests.
pub struct DynamicPagination {
    config: PagerConfig,
    on_page_change: PageCallback,
    on_items_per_page_change: Option<PageCallback>,
}

impl DynamicPagination {
    /// Create a pager reporting page requests to `on_page_change`.
    pub fn new(on_page_change: impl FnMut(usize) + 'static) -> Self {
        Self {
            config: PagerConfig::default(),
            on_page_change: Box::new(on_page_change),
            on_items_per_page_change: None,
        }
    }

    /// Report page-size requests to `callback`. Enables the selector when
    /// `show_page_size` is also set.
    pub fn on_items_per_page_change(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.on_items_per_page_change = Some(Box::new(callback));
        self
    }

    pub fn with_config(mut self, config: PagerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// Returns `true` if the pager is drawn for `state`.
    pub fn is_visible(&self, state: &PaginationState) -> bool {
        self.config.show && state.total_items() > self.config.min_items
    }

    /// Draw the pager, or `None` when hidden.
    pub fn view(&self, state: &PaginationState) -> Option<PagerView> {
        if !self.is_visible(state) {
            return None;
        }

        let current = state.current_page();
        let items = state
            .page_window(self.config.window)
            .into_iter()
            .map(|item| match item {
                PageItem::Page(number) => PagerItem::Page {
                    number,
                    active: number == current,
                },
                PageItem::Ellipsis => PagerItem::Ellipsis,
            })
            .collect();

        let selector = self.config.show_page_size && self.on_items_per_page_change.is_some();

        Some(PagerView {
            previous: Control {
                enabled: state.has_prev_page(),
            },
            items,
            next: Control {
                enabled: state.has_next_page(),
            },
            summary: selector.then(|| state.showing_range()),
            page_size: selector.then(|| PageSizeSelector {
                current: state.items_per_page(),
                options: self.config.page_size_options.clone(),
            }),
        })
    }

    /// "Previous" clicked. Requests `current - 1` when available.
    pub fn previous(&mut self, state: &PaginationState) -> bool {
        if !state.has_prev_page() {
            return false;
        }
        (self.on_page_change)(state.current_page() - 1);
        true
    }

    /// "Next" clicked. Requests `current + 1` when available.
    pub fn next(&mut self, state: &PaginationState) -> bool {
        if !state.has_next_page() {
            return false;
        }
        (self.on_page_change)(state.current_page() + 1);
        true
    }

    /// A page number clicked. Targets outside `1..=total_pages` are ignored.
    pub fn select_page(&mut self, state: &PaginationState, page: usize) -> bool {
        if !(1..=state.total_pages()).contains(&page) {
            log::debug!("pager: ignoring page {} of {}", page, state.total_pages());
            return false;
        }
        (self.on_page_change)(page);
        true
    }

    /// A page size chosen. Requests the size, then page 1.
    pub fn select_page_size(&mut self, size: usize) -> bool {
        if size == 0 {
            return false;
        }
        let Some(on_items_per_page_change) = self.on_items_per_page_change.as_mut() else {
            return false;
        };
        on_items_per_page_change(size);
        (self.on_page_change)(1);
        true
    }
}

impl std::fmt::Debug for DynamicPagination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicPagination")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
