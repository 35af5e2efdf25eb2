//! Error types

/// Errors raised at the fallible edges of the table core.
///
/// Rendering itself never fails; these come from constructing pagination
/// state and from turning JSON documents into rows.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// A page size of zero was requested.
    #[error("items per page must be at least 1")]
    InvalidPageSize,

    /// The row source was not an array of rows.
    #[error("expected an array of rows, got {found}")]
    NotAnArray { found: &'static str },

    /// An element of the row array was not an object.
    #[error("row {index} is not an object (got {found})")]
    RowNotObject { index: usize, found: &'static str },

    /// The row source was not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
