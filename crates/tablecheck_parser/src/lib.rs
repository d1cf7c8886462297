//! Loaders for tables and check profiles.
//!
//! Tables are read from JSON, YAML or TOML table documents (see
//! [`TableDocument`]); check profiles from the same formats into
//! [`CheckProfile`].
//!
//! # Example
//!
//! ```rust
//! use tablecheck_core::TabularData;
//! use tablecheck_parser::{parse_table_str, DocumentFormat};
//!
//! let yaml = r#"
//! columns:
//!   - name: col1
//!     values: [1, 2, 3]
//!   - name: col2
//!     values: [a, b, c]
//! "#;
//!
//! let table = parse_table_str(yaml, DocumentFormat::Yaml).expect("Failed to parse table");
//! assert_eq!(table.row_count(), 3);
//! ```

mod document;

pub use document::*;

use serde::de::DeserializeOwned;
use std::path::Path;
use tablecheck_core::{CheckProfile, Table, TableError};
use thiserror::Error;

/// Errors that can occur while loading tables or profiles.
#[derive(Debug, Error)]
pub enum ParserError {
    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A cell does not match its column's declared type
    #[error("Invalid value in column '{column}' at row {row}: {message}")]
    InvalidValue {
        column: String,
        row: usize,
        message: String,
    },

    /// The document describes an invalid table
    #[error("Invalid table: {0}")]
    Table(#[from] TableError),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

impl ParserError {
    /// Creates a new invalid value error.
    pub fn invalid_value(
        column: impl Into<String>,
        row: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            column: column.into(),
            row,
            message: message.into(),
        }
    }
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Detect the document format from a file path based on its extension.
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<DocumentFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "json" => Ok(DocumentFormat::Json),
        "yaml" | "yml" => Ok(DocumentFormat::Yaml),
        "toml" => Ok(DocumentFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

fn deserialize<T: DeserializeOwned>(content: &str, format: DocumentFormat) -> Result<T> {
    match format {
        DocumentFormat::Json => Ok(serde_json::from_str(content)?),
        DocumentFormat::Yaml => Ok(serde_yaml_ng::from_str(content)?),
        DocumentFormat::Toml => {
            toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))
        }
    }
}

/// Parse a table from a document string.
///
/// # Example
///
/// ```rust
/// use tablecheck_core::{CellValue, TabularData};
/// use tablecheck_parser::{parse_table_str, DocumentFormat};
///
/// let json = r#"{"columns": [{"name": "x", "dtype": "float", "values": [1, "NaN", null]}]}"#;
///
/// let table = parse_table_str(json, DocumentFormat::Json).unwrap();
/// let x = table.column("x").unwrap();
/// assert_eq!(x[0], CellValue::Float(1.0));
/// assert!(x[1].is_missing());
/// assert_eq!(x[2], CellValue::Null);
/// ```
pub fn parse_table_str(content: &str, format: DocumentFormat) -> Result<Table> {
    let document: TableDocument = deserialize(content, format)?;
    document.into_table()
}

/// Parse a table from a file with automatic format detection.
///
/// ```no_run
/// use tablecheck_parser::parse_table_file;
/// use std::path::Path;
///
/// let table = parse_table_file(Path::new("data/users.json")).unwrap();
/// ```
pub fn parse_table_file(path: &Path) -> Result<Table> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_table_str(&content, format)
}

/// Parse a check profile from a document string.
///
/// # Example
///
/// ```rust
/// use tablecheck_parser::{parse_profile_str, DocumentFormat};
///
/// let toml = r#"
/// expected_columns = ["col1", "col2"]
/// min_rows = 5
/// "#;
///
/// let profile = parse_profile_str(toml, DocumentFormat::Toml).unwrap();
/// assert_eq!(profile.min_rows, 5);
/// assert!(!profile.forbid_missing);
/// ```
pub fn parse_profile_str(content: &str, format: DocumentFormat) -> Result<CheckProfile> {
    deserialize(content, format)
}

/// Parse a check profile from a file with automatic format detection.
pub fn parse_profile_file(path: &Path) -> Result<CheckProfile> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_profile_str(&content, format)
}
