//! Tabular data representation.
//!
//! A table is a list of named columns of equal length. Validators only need
//! read access through the [`TabularData`] trait, so callers with their own
//! column store can implement it instead of copying into a [`Table`].

use crate::{CellValue, Result, TableError};
use std::collections::HashSet;

/// Read-only access to column-oriented data.
///
/// Implementations must return unique column names in a stable order, and
/// every column returned by [`column`](TabularData::column) must have
/// [`row_count`](TabularData::row_count) values.
pub trait TabularData {
    /// Returns the column names in table order.
    fn column_names(&self) -> Vec<&str>;

    /// Returns the values of a column, or `None` if no such column exists.
    fn column(&self, name: &str) -> Option<&[CellValue]>;

    /// Returns the number of rows.
    fn row_count(&self) -> usize;

    /// Returns the number of columns.
    fn column_count(&self) -> usize {
        self.column_names().len()
    }

    /// Returns true if the table has no rows.
    fn is_empty(&self) -> bool {
        self.row_count() == 0
    }
}

/// A single named column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name
    pub name: String,
    /// One value per row
    pub values: Vec<CellValue>,
}

impl Column {
    /// Creates a new column from anything convertible into cell values.
    pub fn new<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the number of values in the column.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the column has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// An in-memory table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    /// Creates a table with no columns and no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a table from columns.
    ///
    /// # Errors
    ///
    /// Returns `TableError::DuplicateColumn` if two columns share a name,
    /// `TableError::EmptyColumnName` for a blank name, and
    /// `TableError::LengthMismatch` if the columns differ in length.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if column.name.trim().is_empty() {
                return Err(TableError::EmptyColumnName);
            }
            if !seen.insert(column.name.as_str()) {
                return Err(TableError::duplicate(&column.name));
            }
        }

        let rows = columns.first().map_or(0, Column::len);
        if let Some(bad) = columns.iter().find(|c| c.len() != rows) {
            return Err(TableError::length_mismatch(&bad.name, rows, bad.len()));
        }

        Ok(Self { columns, rows })
    }

    /// Returns an iterator over the columns.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    /// Gets a single cell.
    pub fn cell(&self, column: &str, row: usize) -> Option<&CellValue> {
        self.column(column).and_then(|values| values.get(row))
    }
}

impl TabularData for Table {
    fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    fn column(&self, name: &str) -> Option<&[CellValue]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    fn row_count(&self) -> usize {
        self.rows
    }

    fn column_count(&self) -> usize {
        self.columns.len()
    }
}

impl<T: TabularData + ?Sized> TabularData for &T {
    fn column_names(&self) -> Vec<&str> {
        (**self).column_names()
    }

    fn column(&self, name: &str) -> Option<&[CellValue]> {
        (**self).column(name)
    }

    fn row_count(&self) -> usize {
        (**self).row_count()
    }
}

/// Builder for creating a `Table`.
///
/// # Example
///
/// ```rust
/// use tablecheck_core::{TableBuilder, TabularData};
///
/// let table = TableBuilder::new()
///     .column("id", 0i64..3)
///     .column("name", ["a", "b", "c"])
///     .build()
///     .unwrap();
///
/// assert_eq!(table.row_count(), 3);
/// assert_eq!(table.column_names(), vec!["id", "name"]);
/// ```
#[derive(Debug, Default)]
pub struct TableBuilder {
    columns: Vec<Column>,
}

impl TableBuilder {
    /// Creates a new, empty table builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column.
    pub fn column<I, V>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.columns.push(Column::new(name, values));
        self
    }

    /// Adds an already built column.
    pub fn push(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Builds the table.
    ///
    /// # Errors
    ///
    /// See [`Table::from_columns`].
    pub fn build(self) -> Result<Table> {
        Table::from_columns(self.columns)
    }
}
