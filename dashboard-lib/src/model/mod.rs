//! Row data model

mod row;
mod value;

pub use row::{Row, parse_rows, rows_from_json};
pub use value::Value;
