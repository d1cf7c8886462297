//! Error types for check diagnostics.

use tablecheck_core::ValueKind;
use thiserror::Error;

/// A single reason a check failed.
///
/// Boolean checks never produce these; they describe the entries of a
/// [`CheckReport`](tablecheck_core::CheckReport).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// Column not listed among the expected columns
    #[error("Unexpected column '{column}'")]
    UnexpectedColumn { column: String },

    /// Cell type differs from the column's type
    #[error("Type mismatch in column '{column}' at row {row}: expected {expected}, found {actual}")]
    TypeMismatch {
        column: String,
        row: usize,
        expected: ValueKind,
        actual: ValueKind,
    },

    /// Cell holds a missing-value marker
    #[error("Missing value in column '{column}' at row {row}")]
    MissingValue { column: String, row: usize },

    /// Table is too short
    #[error("Table has {actual} row(s), at least {required} required")]
    InsufficientRows { actual: usize, required: usize },
}

impl CheckError {
    /// Creates a new unexpected column error.
    pub fn unexpected_column(column: impl Into<String>) -> Self {
        Self::UnexpectedColumn {
            column: column.into(),
        }
    }

    /// Creates a new type mismatch error.
    pub fn type_mismatch(
        column: impl Into<String>,
        row: usize,
        expected: ValueKind,
        actual: ValueKind,
    ) -> Self {
        Self::TypeMismatch {
            column: column.into(),
            row,
            expected,
            actual,
        }
    }

    /// Creates a new missing value error.
    pub fn missing_value(column: impl Into<String>, row: usize) -> Self {
        Self::MissingValue {
            column: column.into(),
            row,
        }
    }

    /// Creates a new insufficient rows error.
    pub fn insufficient_rows(actual: usize, required: usize) -> Self {
        Self::InsufficientRows { actual, required }
    }
}
