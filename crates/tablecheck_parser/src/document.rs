//! Table documents.
//!
//! A table document lists its columns in order:
//!
//! ```yaml
//! columns:
//!   - name: col1
//!     dtype: float
//!     values: [0, 1.5, .nan, null]
//!   - name: col2
//!     values: [a, b, c, d]
//! ```
//!
//! Without a `dtype` every cell keeps the variant its literal suggests, so a
//! column may end up mixed. With a `dtype` every non-null cell must conform.

use crate::{ParserError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use tablecheck_core::{CellValue, Column, Table};

/// Declared type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Int,
    Float,
    String,
    Bool,
    Timestamp,
}

/// Serialized form of a table.
#[derive(Debug, Clone, Deserialize)]
pub struct TableDocument {
    /// Columns in table order
    #[serde(default)]
    pub columns: Vec<ColumnDocument>,
}

/// Serialized form of a single column.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnDocument {
    /// Column name
    pub name: String,

    /// Optional declared type
    #[serde(default)]
    pub dtype: Option<ColumnType>,

    /// Cell literals, `null` for missing
    #[serde(default)]
    pub values: Vec<Option<RawCell>>,
}

/// A non-null cell literal as it appears in the document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawCell {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl TableDocument {
    /// Converts the document into a table.
    ///
    /// # Errors
    ///
    /// Returns `ParserError::InvalidValue` when a cell does not match its
    /// column's `dtype`, and `ParserError::Table` for duplicate or ragged
    /// columns.
    pub fn into_table(self) -> Result<Table> {
        let columns = self
            .columns
            .into_iter()
            .map(ColumnDocument::into_column)
            .collect::<Result<Vec<_>>>()?;

        Ok(Table::from_columns(columns)?)
    }
}

impl ColumnDocument {
    fn into_column(self) -> Result<Column> {
        let dtype = self.dtype;
        let values = self
            .values
            .into_iter()
            .enumerate()
            .map(|(row, raw)| convert_cell(raw, dtype, &self.name, row))
            .collect::<Result<Vec<_>>>()?;

        Ok(Column {
            name: self.name,
            values,
        })
    }
}

/// Converts a literal into a cell value, honoring the declared type.
fn convert_cell(
    raw: Option<RawCell>,
    dtype: Option<ColumnType>,
    column: &str,
    row: usize,
) -> Result<CellValue> {
    let Some(raw) = raw else {
        return Ok(CellValue::Null);
    };

    let Some(dtype) = dtype else {
        return Ok(match raw {
            RawCell::Bool(b) => CellValue::Bool(b),
            RawCell::Int(i) => CellValue::Int(i),
            RawCell::Float(f) => CellValue::Float(f),
            RawCell::Text(s) => CellValue::String(s),
        });
    };

    let converted = match (dtype, raw) {
        (ColumnType::Int, RawCell::Int(i)) => Some(CellValue::Int(i)),
        (ColumnType::Float, RawCell::Float(f)) => Some(CellValue::Float(f)),
        (ColumnType::Float, RawCell::Int(i)) => Some(CellValue::Float(i as f64)),
        (ColumnType::Float, RawCell::Text(s)) if s.eq_ignore_ascii_case("nan") => {
            Some(CellValue::Float(f64::NAN))
        }
        (ColumnType::String, RawCell::Text(s)) => Some(CellValue::String(s)),
        (ColumnType::Bool, RawCell::Bool(b)) => Some(CellValue::Bool(b)),
        (ColumnType::Timestamp, RawCell::Text(s)) => parse_timestamp(&s).map(CellValue::Timestamp),
        (ColumnType::Timestamp, RawCell::Int(epoch)) => {
            DateTime::from_timestamp(epoch, 0).map(CellValue::Timestamp)
        }
        _ => None,
    };

    converted.ok_or_else(|| {
        ParserError::invalid_value(column, row, format!("expected a {:?} value", dtype))
    })
}

/// Parses a timestamp in RFC 3339, `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD` form.
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
