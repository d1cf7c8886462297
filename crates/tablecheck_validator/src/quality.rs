//! Quality checks.
//!
//! This module handles the data-level rules:
//! - Missing values: `Null` cells and NaN floats
//! - Row count: minimum number of rows

use crate::CheckError;
use tablecheck_core::TabularData;

/// Checks missing values and row counts.
pub struct QualityChecker;

impl QualityChecker {
    /// Creates a new quality checker.
    pub fn new() -> Self {
        Self
    }

    /// Returns true if any cell of any column is a missing-value marker.
    pub fn has_missing<T>(&self, table: &T) -> bool
    where
        T: TabularData + ?Sized,
    {
        table.column_names().into_iter().any(|name| {
            table
                .column(name)
                .unwrap_or_default()
                .iter()
                .any(|value| value.is_missing())
        })
    }

    /// Lists every missing cell, column by column.
    pub fn missing_cells<T>(&self, table: &T) -> Vec<CheckError>
    where
        T: TabularData + ?Sized,
    {
        let mut missing = Vec::new();

        for name in table.column_names() {
            let values = table.column(name).unwrap_or_default();
            missing.extend(
                values
                    .iter()
                    .enumerate()
                    .filter(|(_, value)| value.is_missing())
                    .map(|(row, _)| CheckError::missing_value(name, row)),
            );
        }

        missing
    }

    /// Checks that the table has at least `min_rows` rows.
    pub fn check_min_rows<T>(&self, table: &T, min_rows: usize) -> Result<(), CheckError>
    where
        T: TabularData + ?Sized,
    {
        let rows = table.row_count();
        if rows < min_rows {
            return Err(CheckError::insufficient_rows(rows, min_rows));
        }
        Ok(())
    }
}

impl Default for QualityChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tablecheck_core::{Table, TableBuilder};

    #[test]
    fn test_null_and_nan_detected() {
        let checker = QualityChecker::new();

        let with_null = TableBuilder::new()
            .column("a", [Some(1i64), None, Some(3)])
            .build()
            .unwrap();
        assert!(checker.has_missing(&with_null));

        let with_nan = TableBuilder::new()
            .column("a", [1.0, f64::NAN])
            .build()
            .unwrap();
        assert!(checker.has_missing(&with_nan));

        let clean = TableBuilder::new()
            .column("a", [1.0, f64::INFINITY])
            .build()
            .unwrap();
        assert!(!checker.has_missing(&clean));
    }

    #[test]
    fn test_missing_cells_positions() {
        let table = TableBuilder::new()
            .column("a", [Some(1i64), None])
            .column("b", [None, Some("x")])
            .build()
            .unwrap();

        assert_eq!(
            QualityChecker::new().missing_cells(&table),
            vec![
                CheckError::missing_value("a", 1),
                CheckError::missing_value("b", 0),
            ]
        );
    }

    #[test]
    fn test_min_rows() {
        let checker = QualityChecker::new();
        let table = TableBuilder::new().column("a", 0i64..10).build().unwrap();

        assert!(checker.check_min_rows(&table, 10).is_ok());
        assert_eq!(
            checker.check_min_rows(&table, 11),
            Err(CheckError::insufficient_rows(10, 11))
        );
        assert!(checker.check_min_rows(&Table::empty(), 0).is_ok());
    }
}
