//! Column definitions and cell resolution.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::display::DisplayValue;
use crate::model::{Row, Value};

/// A cell formatter: maps a raw field value (and its row) to a display value.
///
/// Formatters are pure. They see the whole row, so a formatter may pick an
/// icon from a sibling field, but they never see pagination or sort state.
pub type Formatter = Arc<dyn Fn(&Value, &Row) -> DisplayValue + Send + Sync>;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Column width hint.
///
/// Widths are presentation-only. Strings that don't parse are kept as
/// `Raw` and treated as auto-sized by renderers.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ColumnWidth {
    /// Share of the table width, in percent.
    Percent(f32),
    /// Fixed width in pixels.
    Pixels(u32),
    /// Size to content.
    #[default]
    Auto,
    /// An unrecognised width string.
    Raw(String),
}

impl ColumnWidth {
    /// Parses a width hint such as `"25%"`, `"120px"` or `"120"`.
    pub fn parse(hint: &str) -> Self {
        let hint = hint.trim();
        if hint.is_empty() || hint.eq_ignore_ascii_case("auto") {
            return ColumnWidth::Auto;
        }
        if let Some(pct) = hint.strip_suffix('%') {
            if let Ok(pct) = pct.trim().parse::<f32>() {
                if pct.is_finite() && pct >= 0.0 {
                    return ColumnWidth::Percent(pct);
                }
            }
        }
        let px = hint.strip_suffix("px").unwrap_or(hint);
        match px.trim().parse::<u32>() {
            Ok(px) => ColumnWidth::Pixels(px),
            Err(_) => ColumnWidth::Raw(hint.to_string()),
        }
    }
}

impl From<&str> for ColumnWidth {
    fn from(hint: &str) -> Self {
        ColumnWidth::parse(hint)
    }
}

impl From<u32> for ColumnWidth {
    fn from(px: u32) -> Self {
        ColumnWidth::Pixels(px)
    }
}

/// Declarative description of one table column.
///
/// # Example
///
/// ```
/// use dashboard_lib::column::ColumnSpec;
/// use dashboard_lib::display::DisplayValue;
///
/// let columns = vec![
///     ColumnSpec::new("User", "name").width("25%").sortable(),
///     ColumnSpec::new("Status", "status").formatter(|value, _row| {
///         DisplayValue::text(value.render_text().to_uppercase())
///     }),
/// ];
/// ```
#[derive(Clone)]
pub struct ColumnSpec {
    /// Header label.
    pub label: String,
    /// Width hint.
    pub width: ColumnWidth,
    /// Field read from each row.
    pub accessor: String,
    /// Whether clicking the header reports a sort request.
    pub sortable: bool,
    /// Horizontal alignment.
    pub align: Alignment,
    formatter: Option<Formatter>,
}

impl ColumnSpec {
    /// Create a column reading `accessor`, headed by `label`.
    pub fn new(label: impl Into<String>, accessor: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            width: ColumnWidth::Auto,
            accessor: accessor.into(),
            sortable: false,
            align: Alignment::Left,
            formatter: None,
        }
    }

    /// Set the width hint.
    pub fn width(mut self, width: impl Into<ColumnWidth>) -> Self {
        self.width = width.into();
        self
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set the cell formatter.
    pub fn formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&Value, &Row) -> DisplayValue + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Set an already shared formatter.
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Returns `true` if a formatter is configured.
    pub fn has_formatter(&self) -> bool {
        self.formatter.is_some()
    }

    /// Returns `true` if this is a caller-supplied action column.
    pub fn is_action(&self) -> bool {
        self.accessor == "action" || self.accessor == "actions"
    }

    /// Resolve this column's cell for `row`.
    ///
    /// A panicking formatter is contained to its own cell: the cell comes
    /// back empty with the panic message in [`Cell::error`].
    pub fn resolve(&self, row: &Row) -> Cell {
        let raw = row.value(&self.accessor);
        let Some(formatter) = &self.formatter else {
            return Cell::new(&self.accessor, DisplayValue::from(raw));
        };

        match panic::catch_unwind(AssertUnwindSafe(|| formatter(raw, row))) {
            Ok(display) => Cell::new(&self.accessor, display),
            Err(payload) => {
                let message = panic_message(&*payload);
                log::warn!(
                    "formatter for column '{}' panicked: {}",
                    self.accessor,
                    message
                );
                Cell {
                    accessor: self.accessor.clone(),
                    display: DisplayValue::Empty,
                    error: Some(message),
                }
            }
        }
    }
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("label", &self.label)
            .field("width", &self.width)
            .field("accessor", &self.accessor)
            .field("sortable", &self.sortable)
            .field("align", &self.align)
            .field("formatter", &self.formatter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// A resolved table cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Accessor of the column this cell belongs to.
    pub accessor: String,
    /// What to show.
    pub display: DisplayValue,
    /// Panic message if the formatter failed.
    pub error: Option<String>,
}

impl Cell {
    fn new(accessor: &str, display: DisplayValue) -> Self {
        Self {
            accessor: accessor.to_string(),
            display,
            error: None,
        }
    }

    /// Returns `true` if the formatter for this cell panicked.
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Extract a readable message from a panic payload.
///
/// Pass the payload itself (`&*boxed`), not the box.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
