//! Structural checks.
//!
//! This module handles the column-level rules: whether every column is
//! expected, and whether each column is type-consistent.

use crate::CheckError;
use std::collections::HashSet;
use tablecheck_core::{CellValue, TabularData, ValueKind};

/// Checks column membership and per-column type consistency.
pub struct SchemaChecker;

impl SchemaChecker {
    /// Creates a new schema checker.
    pub fn new() -> Self {
        Self
    }

    /// Returns the table's columns that are not in `expected`, in table order.
    ///
    /// `expected` is treated as a set. Expected columns absent from the table
    /// are not reported.
    pub fn unexpected_columns<'t, T, I, S>(&self, table: &'t T, expected: I) -> Vec<&'t str>
    where
        T: TabularData + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let expected: Vec<S> = expected.into_iter().collect();
        let expected: HashSet<&str> = expected.iter().map(AsRef::as_ref).collect();

        table
            .column_names()
            .into_iter()
            .filter(|name| !expected.contains(name))
            .collect()
    }

    /// Returns true if every column is type-consistent.
    pub fn is_type_consistent<T>(&self, table: &T) -> bool
    where
        T: TabularData + ?Sized,
    {
        table
            .column_names()
            .into_iter()
            .all(|name| column_is_consistent(table.column(name).unwrap_or_default()))
    }

    /// Lists every cell whose type differs from its column's type.
    ///
    /// A column's type is the kind of its first non-missing value. Missing
    /// cells are only listed in non-numeric columns.
    pub fn type_mismatches<T>(&self, table: &T) -> Vec<CheckError>
    where
        T: TabularData + ?Sized,
    {
        let mut errors = Vec::new();

        for name in table.column_names() {
            let values = table.column(name).unwrap_or_default();
            errors.extend(column_mismatches(values).map(|(row, expected, actual)| {
                CheckError::type_mismatch(name, row, expected, actual)
            }));
        }

        errors
    }
}

impl Default for SchemaChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// A column is consistent when it has no mismatching cells.
fn column_is_consistent(values: &[CellValue]) -> bool {
    column_mismatches(values).next().is_none()
}

/// Yields `(row, expected, actual)` for every cell that breaks its column's type.
///
/// The anchor is the kind of the first non-missing value. Missing cells fit an
/// int or float anchor, as a numeric column with holes is still numeric; in any
/// other column they are mismatches. Columns with no anchor (empty or entirely
/// missing) yield nothing.
fn column_mismatches(
    values: &[CellValue],
) -> impl Iterator<Item = (usize, ValueKind, ValueKind)> + '_ {
    let anchor = values.iter().find(|v| !v.is_missing()).map(CellValue::kind);

    values
        .iter()
        .enumerate()
        .filter_map(move |(row, value)| {
            let expected = anchor?;
            let actual = value.kind();
            let fits = if value.is_missing() {
                expected.is_numeric()
            } else {
                actual == expected
            };
            (!fits).then_some((row, expected, actual))
        })
}
