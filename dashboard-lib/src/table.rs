//! Configuration-driven data table.
//!
//! [`DataTable`] turns column specs and rows into a [`TableView`]: resolved
//! cells in declared column order, sort indicators, an optional synthesized
//! action column and an empty-state placeholder. It runs in one of two
//! pagination modes:
//!
//! - **External**: the caller passes one page of rows (typically fetched
//!   page by page from an API) and the table renders them verbatim.
//! - **Internal**: the caller passes the full row set together with
//!   `current_page`, `items_per_page` and `on_page_change`; the table slices
//!   the page itself and renders a prev/next control.
//!
//! Supplying all three pagination props selects internal mode.

use crate::column::{Alignment, Cell, ColumnSpec, ColumnWidth};
use crate::model::{Row, Value};
use crate::pagination::PaginationState;
use crate::sort::{SortIndicator, SortState};

/// Default placeholder text for an empty table.
pub const DEFAULT_NO_DATA_MESSAGE: &str = "No data found.";

/// Label of the synthesized action column.
pub const ACTION_LABEL: &str = "Action";

type PageCallback = Box<dyn FnMut(usize)>;
type ViewCallback = Box<dyn FnMut(&Row)>;
type DeleteCallback = Box<dyn FnMut(&Value)>;
type SortCallback = Box<dyn FnMut(&str)>;

/// Which layer slices the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationMode {
    /// Rows are already the page to show.
    External,
    /// The table slices the full row set.
    Internal {
        current_page: usize,
        items_per_page: usize,
    },
}

/// A rendered header cell.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub label: String,
    /// `None` for the synthesized action column.
    pub accessor: Option<String>,
    pub width: ColumnWidth,
    pub align: Alignment,
    pub sortable: bool,
    /// Present for sortable columns.
    pub indicator: Option<SortIndicator>,
}

/// Affordances in the synthesized action cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowActions {
    pub view: bool,
    pub delete: bool,
}

/// A rendered body row.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    /// Index of the row in the `data` passed to [`DataTable::render`].
    pub index: usize,
    /// One cell per declared column.
    pub cells: Vec<Cell>,
    /// Present when the action column is synthesized.
    pub actions: Option<RowActions>,
}

/// Table body: rows, or the no-data placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Rows(Vec<RenderedRow>),
    Empty { message: String, colspan: usize },
}

impl TableBody {
    /// Number of body rows, counting the placeholder as one.
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Rows(rows) => rows.len(),
            TableBody::Empty { .. } => 1,
        }
    }
}

/// Minimal prev/next control shown in internal mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControls {
    pub current_page: usize,
    pub total_pages: usize,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl std::fmt::Display for PageControls {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Page {} of {}", self.current_page, self.total_pages)
    }
}

/// Everything needed to draw one table frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub mode: PaginationMode,
    pub headers: Vec<HeaderCell>,
    pub body: TableBody,
    /// Internal mode only, and only with more than one page.
    pub controls: Option<PageControls>,
    pub min_width: Option<u32>,
}

impl TableView {
    /// Rendered rows; empty when the placeholder is shown.
    pub fn rows(&self) -> &[RenderedRow] {
        match &self.body {
            TableBody::Rows(rows) => rows,
            TableBody::Empty { .. } => &[],
        }
    }

    /// Returns `true` if the no-data placeholder is shown.
    pub fn is_empty(&self) -> bool {
        matches!(self.body, TableBody::Empty { .. })
    }
}

/// A data table over dynamic rows.
///
/// # Example
///
/// ```
/// use dashboard_lib::column::ColumnSpec;
/// use dashboard_lib::model::Row;
/// use dashboard_lib::table::DataTable;
///
/// let table = DataTable::new(vec![
///     ColumnSpec::new("Name", "name").sortable(),
///     ColumnSpec::new("Email", "email"),
/// ]);
///
/// let rows = vec![Row::new().set("name", "Ada").set("email", "ada@example.com")];
/// let view = table.render(&rows);
/// assert_eq!(view.rows().len(), 1);
/// ```
pub struct DataTable {
    columns: Vec<ColumnSpec>,
    current_page: Option<usize>,
    items_per_page: Option<usize>,
    on_page_change: Option<PageCallback>,
    on_view: Option<ViewCallback>,
    on_delete: Option<DeleteCallback>,
    sort: Option<SortState>,
    on_sort: Option<SortCallback>,
    no_data_message: String,
    min_width: Option<u32>,
}

impl DataTable {
    /// Create a table with column definitions, in external mode.
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self {
            columns,
            current_page: None,
            items_per_page: None,
            on_page_change: None,
            on_view: None,
            on_delete: None,
            sort: None,
            on_sort: None,
            no_data_message: DEFAULT_NO_DATA_MESSAGE.to_string(),
            min_width: None,
        }
    }

    /// Set the current page (internal mode prop).
    pub fn current_page(mut self, page: usize) -> Self {
        self.current_page = Some(page);
        self
    }

    /// Set the page size (internal mode prop).
    pub fn items_per_page(mut self, size: usize) -> Self {
        self.items_per_page = Some(size);
        self
    }

    /// Set the page-change callback (internal mode prop).
    pub fn on_page_change(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.on_page_change = Some(Box::new(callback));
        self
    }

    /// Set the view callback. Enables the view affordance.
    pub fn on_view(mut self, callback: impl FnMut(&Row) + 'static) -> Self {
        self.on_view = Some(Box::new(callback));
        self
    }

    /// Set the delete callback. Enables the delete affordance.
    pub fn on_delete(mut self, callback: impl FnMut(&Value) + 'static) -> Self {
        self.on_delete = Some(Box::new(callback));
        self
    }

    /// Set the sort-request callback.
    pub fn on_sort(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_sort = Some(Box::new(callback));
        self
    }

    /// Set the externally owned sort state used for header indicators.
    pub fn sort_state(mut self, sort: SortState) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set the placeholder text shown for an empty table.
    pub fn no_data_message(mut self, message: impl Into<String>) -> Self {
        self.no_data_message = message.into();
        self
    }

    /// Set the minimum width hint.
    pub fn min_width(mut self, width: u32) -> Self {
        self.min_width = Some(width);
        self
    }

    // -------------------------------------------------------------------------
    // Prop updates
    // -------------------------------------------------------------------------

    /// Commit a new current page (the caller's answer to `on_page_change`).
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = Some(page);
    }

    /// Commit a new page size.
    pub fn set_items_per_page(&mut self, size: usize) {
        self.items_per_page = Some(size);
    }

    /// Replace the sort state shown in headers.
    pub fn set_sort_state(&mut self, sort: Option<SortState>) {
        self.sort = sort;
    }

    /// Replace the column definitions.
    pub fn set_columns(&mut self, columns: Vec<ColumnSpec>) {
        self.columns = columns;
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    // -------------------------------------------------------------------------
    // Mode and layout
    // -------------------------------------------------------------------------

    /// The pagination mode implied by the supplied props.
    pub fn mode(&self) -> PaginationMode {
        match (self.current_page, self.items_per_page, &self.on_page_change) {
            (Some(current_page), Some(items_per_page), Some(_)) if items_per_page > 0 => {
                PaginationMode::Internal {
                    current_page,
                    items_per_page,
                }
            }
            _ => PaginationMode::External,
        }
    }

    /// Returns `true` if a column with accessor `action`/`actions` is declared.
    pub fn has_action_column(&self) -> bool {
        self.columns.iter().any(ColumnSpec::is_action)
    }

    /// Returns `true` if a trailing action column will be synthesized.
    pub fn synthesizes_actions(&self) -> bool {
        (self.on_view.is_some() || self.on_delete.is_some()) && !self.has_action_column()
    }

    /// Total number of rendered columns, including a synthesized one.
    pub fn column_count(&self) -> usize {
        self.columns.len() + usize::from(self.synthesizes_actions())
    }

    fn pagination(&self, total_items: usize) -> Option<PaginationState> {
        match self.mode() {
            PaginationMode::Internal {
                current_page,
                items_per_page,
            } => PaginationState::at_page(items_per_page, total_items, current_page).ok(),
            PaginationMode::External => None,
        }
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Render a frame for `data`.
    ///
    /// In external mode every row of `data` is rendered. In internal mode
    /// only the current page is, and `data` is the full set.
    pub fn render(&self, data: &[Row]) -> TableView {
        let pagination = self.pagination(data.len());
        let (offset, rows) = match &pagination {
            Some(state) => (state.slice_bounds().start, state.page_slice(data)),
            None => (0, data),
        };

        let actions = self.synthesizes_actions().then_some(RowActions {
            view: self.on_view.is_some(),
            delete: self.on_delete.is_some(),
        });

        let body = if rows.is_empty() {
            TableBody::Empty {
                message: self.no_data_message.clone(),
                colspan: self.column_count(),
            }
        } else {
            TableBody::Rows(
                rows.iter()
                    .enumerate()
                    .map(|(i, row)| RenderedRow {
                        index: offset + i,
                        cells: self.columns.iter().map(|col| col.resolve(row)).collect(),
                        actions,
                    })
                    .collect(),
            )
        };

        let controls = pagination
            .filter(|state| state.total_pages() > 1)
            .map(|state| PageControls {
                current_page: state.current_page(),
                total_pages: state.total_pages(),
                prev_enabled: state.has_prev_page(),
                next_enabled: state.has_next_page(),
            });

        TableView {
            mode: self.mode(),
            headers: self.headers(),
            body,
            controls,
            min_width: self.min_width,
        }
    }

    fn headers(&self) -> Vec<HeaderCell> {
        let mut headers: Vec<HeaderCell> = self
            .columns
            .iter()
            .map(|col| HeaderCell {
                label: col.label.clone(),
                accessor: Some(col.accessor.clone()),
                width: col.width.clone(),
                align: col.align,
                sortable: col.sortable,
                indicator: col.sortable.then(|| {
                    self.sort
                        .as_ref()
                        .map(|sort| sort.indicator_for(&col.accessor))
                        .unwrap_or(SortIndicator::Neutral)
                }),
            })
            .collect();

        if self.synthesizes_actions() {
            headers.push(HeaderCell {
                label: ACTION_LABEL.to_string(),
                accessor: None,
                width: ColumnWidth::Auto,
                align: Alignment::Left,
                sortable: false,
                indicator: None,
            });
        }
        headers
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Header click on column `index`. Reports sort intent for sortable
    /// columns; returns `true` if `on_sort` was invoked.
    pub fn click_header(&mut self, index: usize) -> bool {
        let Some(col) = self.columns.get(index) else {
            return false;
        };
        if !col.sortable {
            return false;
        }
        match self.on_sort.as_mut() {
            Some(on_sort) => {
                on_sort(&col.accessor);
                true
            }
            None => false,
        }
    }

    /// Click on a body cell. Cells of a declared `action` column open the
    /// row via `on_view`.
    pub fn click_cell(&mut self, row: &Row, column: usize) -> bool {
        let is_action = self
            .columns
            .get(column)
            .is_some_and(|col| col.accessor == "action");
        match self.on_view.as_mut() {
            Some(on_view) if is_action => {
                on_view(row);
                true
            }
            _ => false,
        }
    }

    /// The view affordance of a row was activated.
    pub fn view(&mut self, row: &Row) -> bool {
        match self.on_view.as_mut() {
            Some(on_view) => {
                on_view(row);
                true
            }
            None => false,
        }
    }

    /// The delete affordance of a row was activated. Reports the row's `id`.
    pub fn delete(&mut self, row: &Row) -> bool {
        match self.on_delete.as_mut() {
            Some(on_delete) => {
                on_delete(row.id());
                true
            }
            None => false,
        }
    }

    /// Internal-mode "Previous" button. Requests `current_page - 1`.
    pub fn previous_page(&mut self, total_items: usize) -> bool {
        match self.pagination(total_items) {
            Some(state) if state.has_prev_page() => {
                self.request_page(state.current_page() - 1)
            }
            _ => false,
        }
    }

    /// Internal-mode "Next" button. Requests `current_page + 1`.
    pub fn next_page(&mut self, total_items: usize) -> bool {
        match self.pagination(total_items) {
            Some(state) if state.has_next_page() => {
                self.request_page(state.current_page() + 1)
            }
            _ => false,
        }
    }

    fn request_page(&mut self, page: usize) -> bool {
        match self.on_page_change.as_mut() {
            Some(on_page_change) => {
                log::debug!("table: requesting page {}", page);
                on_page_change(page);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for DataTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.columns)
            .field("mode", &self.mode())
            .field("sort", &self.sort)
            .field("no_data_message", &self.no_data_message)
            .finish_non_exhaustive()
    }
}
