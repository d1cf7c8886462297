//! Error types for the table model.
//!
//! Checks themselves never fail; malformed input is rejected when a
//! [`Table`](crate::Table) is constructed.

use thiserror::Error;

/// Result type for table model operations.
pub type Result<T> = std::result::Result<T, TableError>;

/// Errors raised while building a table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Two columns share a name
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// A column does not have as many values as the others
    #[error("Column '{column}' has {actual} values, expected {expected}")]
    LengthMismatch {
        /// Offending column
        column: String,
        /// Row count established by the preceding columns
        expected: usize,
        /// Number of values in the offending column
        actual: usize,
    },

    /// Column names must be non-empty
    #[error("Column name cannot be empty")]
    EmptyColumnName,
}

impl TableError {
    /// Creates a new duplicate column error.
    pub fn duplicate(column: impl Into<String>) -> Self {
        Self::DuplicateColumn(column.into())
    }

    /// Creates a new length mismatch error.
    pub fn length_mismatch(column: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            column: column.into(),
            expected,
            actual,
        }
    }
}
