//! Sort state tracking.
//!
//! The table never sorts rows. It reports header clicks; the caller keeps a
//! [`SortState`], applies it to its dataset (locally with [`sort_rows`] or
//! server-side) and hands the table the result.

use crate::column::ColumnSpec;
use crate::model::Row;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

/// Header indicator for a sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Neutral,
    Ascending,
    Descending,
}

/// The active sort key and direction.
///
/// Starts neutral. Clicking a new sortable column sorts it ascending;
/// clicking the active column flips the direction. Once a key is active the
/// state never returns to neutral on its own, only through [`clear`].
///
/// [`clear`]: SortState::clear
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    key: Option<String>,
    direction: SortDirection,
}

impl SortState {
    /// Create a neutral sort state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state sorted on `key`.
    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: Some(key.into()),
            direction,
        }
    }

    /// The accessor currently sorted on.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Returns `true` if a key is active.
    pub fn is_active(&self) -> bool {
        self.key.is_some()
    }

    /// Handle a header click. Returns `true` if the state changed.
    pub fn click(&mut self, accessor: &str, sortable: bool) -> bool {
        if !sortable {
            return false;
        }

        if self.key.as_deref() == Some(accessor) {
            self.direction = self.direction.toggled();
        } else {
            self.key = Some(accessor.to_string());
            self.direction = SortDirection::Ascending;
        }
        log::debug!("sort: {} {}", accessor, self.direction.as_str());
        true
    }

    /// Handle a click on `column`'s header.
    pub fn click_column(&mut self, column: &ColumnSpec) -> bool {
        self.click(&column.accessor, column.sortable)
    }

    /// Return to the neutral state.
    pub fn clear(&mut self) {
        self.key = None;
        self.direction = SortDirection::Ascending;
    }

    /// Indicator for the column reading `accessor`.
    pub fn indicator_for(&self, accessor: &str) -> SortIndicator {
        match self.key.as_deref() {
            Some(key) if key == accessor => match self.direction {
                SortDirection::Ascending => SortIndicator::Ascending,
                SortDirection::Descending => SortIndicator::Descending,
            },
            _ => SortIndicator::Neutral,
        }
    }
}

/// Stable sort of `rows` by the state's key. Neutral state leaves rows as-is.
pub fn sort_rows(rows: &mut [Row], sort: &SortState) {
    let Some(key) = sort.key() else {
        return;
    };
    let descending = sort.direction() == SortDirection::Descending;
    rows.sort_by(|a, b| {
        let ordering = a.value(key).compare(b.value(key));
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}
