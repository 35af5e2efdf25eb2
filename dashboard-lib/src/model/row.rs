//! Dynamic row record

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use super::value::NULL;
use super::Value;
use crate::error::DashboardError;

/// A single row of table data.
///
/// Rows hold field values as a `HashMap<String, Value>` and are only ever
/// read through accessors. A missing field is not an error; it reads as
/// [`Value::Null`].
///
/// # Example
///
/// ```
/// use dashboard_lib::model::{Row, Value};
///
/// let row = Row::new()
///     .set("id", 1)
///     .set("status", "win");
///
/// assert_eq!(row.value("status"), &Value::from("win"));
/// assert!(row.value("missing").is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: HashMap<String, Value>,
}

impl Row {
    /// Creates a new empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value (builder style).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value, returning the previous value if any.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    /// Returns the field value, or `None` if the field is absent.
    pub fn get(&self, accessor: &str) -> Option<&Value> {
        self.fields.get(accessor)
    }

    /// Returns the field value, reading missing fields as null.
    pub fn value(&self, accessor: &str) -> &Value {
        self.fields.get(accessor).unwrap_or(&NULL)
    }

    /// Returns the row identifier (the `id` field).
    pub fn id(&self) -> &Value {
        self.value("id")
    }

    /// Returns `true` if the field exists on this row.
    pub fn contains(&self, accessor: &str) -> bool {
        self.fields.contains_key(accessor)
    }

    /// Returns the field names, sorted.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterates over all fields in arbitrary order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Builds a row from a JSON object.
    pub fn from_json(json: serde_json::Value) -> Result<Self, DashboardError> {
        match json {
            serde_json::Value::Object(map) => Ok(Self {
                fields: map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            }),
            other => Err(DashboardError::RowNotObject {
                index: 0,
                found: json_kind(&other),
            }),
        }
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Parses a row set from JSON text.
///
/// Accepts a bare array of objects, `null` (an empty set), or an API
/// envelope of the form `{ "data": [...] }`.
pub fn parse_rows(text: &str) -> Result<Vec<Row>, DashboardError> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    rows_from_json(json)
}

/// Converts an already-parsed JSON document into rows.
pub fn rows_from_json(json: serde_json::Value) -> Result<Vec<Row>, DashboardError> {
    let items = match json {
        serde_json::Value::Null => return Ok(Vec::new()),
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut map) => match map.remove("data") {
            Some(serde_json::Value::Array(items)) => items,
            Some(serde_json::Value::Null) => return Ok(Vec::new()),
            Some(other) => {
                return Err(DashboardError::NotAnArray {
                    found: json_kind(&other),
                });
            }
            None => return Err(DashboardError::NotAnArray { found: "object" }),
        },
        other => {
            return Err(DashboardError::NotAnArray {
                found: json_kind(&other),
            });
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            Row::from_json(item).map_err(|e| match e {
                DashboardError::RowNotObject { found, .. } => {
                    DashboardError::RowNotObject { index, found }
                }
                other => other,
            })
        })
        .collect()
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
