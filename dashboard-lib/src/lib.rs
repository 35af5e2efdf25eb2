//! Data table core for admin dashboards.
//!
//! Tables are declared as a list of [`ColumnSpec`]s over schemaless
//! [`Row`]s. [`DataTable`] resolves cells, headers and the empty-state
//! placeholder; [`DynamicPagination`] draws the page strip. Neither owns the
//! dataset: page, page size and sort order live with the caller
//! ([`PaginationState`], [`SortState`], or a [`Listing`] bundling them with a
//! [`RowFilter`]) and are reported back through callbacks.

pub mod column;
pub mod display;
pub mod error;
pub mod filter;
pub mod formatters;
pub mod listing;
pub mod model;
pub mod pager;
pub mod pagination;
pub mod render;
pub mod sort;
pub mod table;

pub use column::ColumnSpec;
pub use error::DashboardError;
pub use filter::RowFilter;
pub use listing::Listing;
pub use model::{Row, Value};
pub use pager::DynamicPagination;
pub use pagination::PaginationState;
pub use sort::SortState;
pub use table::DataTable;

pub mod prelude {
    pub use crate::column::{Alignment, Cell, ColumnSpec, ColumnWidth, Formatter};
    pub use crate::display::{DisplayValue, IconSource, Tone};
    pub use crate::error::DashboardError;
    pub use crate::filter::{MatchMode, RowFilter};
    pub use crate::formatters::{self, DateStyle};
    pub use crate::listing::Listing;
    pub use crate::model::{Row, Value, parse_rows};
    pub use crate::pager::{DynamicPagination, PagerConfig, PagerItem, PagerView};
    pub use crate::pagination::{PageAction, PageItem, PaginationState, ShowingRange};
    pub use crate::render::TextRenderer;
    pub use crate::sort::{SortDirection, SortIndicator, SortState, sort_rows};
    pub use crate::table::{DataTable, PaginationMode, TableBody, TableView};
}
