//! Cell values.
//!
//! Every cell of a [`Table`](crate::Table) holds a [`CellValue`]. Columns are
//! not typed at the container level, so a column may mix variants; the
//! validator decides whether that is acceptable.

use chrono::{DateTime, Utc};
use std::fmt;

/// A value in a table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Null/missing value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value (may be NaN)
    Float(f64),
    /// String value
    String(String),
    /// Timestamp value
    Timestamp(DateTime<Utc>),
}

/// The variant tag of a [`CellValue`].
///
/// Two cells are "of the same type" when their kinds are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    String,
    Timestamp,
}

impl ValueKind {
    /// Returns the display name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Int => "int64",
            ValueKind::Float => "float64",
            ValueKind::String => "string",
            ValueKind::Timestamp => "timestamp",
        }
    }

    /// Returns true for integer and float kinds.
    ///
    /// Numeric columns absorb missing values: a `Null` or NaN cell does not
    /// change the type of an int or float column.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueKind::Int | ValueKind::Float)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl CellValue {
    /// Returns the variant tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            CellValue::Null => ValueKind::Null,
            CellValue::Bool(_) => ValueKind::Bool,
            CellValue::Int(_) => ValueKind::Int,
            CellValue::Float(_) => ValueKind::Float,
            CellValue::String(_) => ValueKind::String,
            CellValue::Timestamp(_) => ValueKind::Timestamp,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Returns true if this value is a missing-value marker.
    ///
    /// Both `Null` and a NaN float count as missing.
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Float(f) => f.is_nan(),
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => f.write_str("null"),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(x) => write!(f, "{}", x),
            CellValue::String(s) => write!(f, "{:?}", s),
            CellValue::Timestamp(ts) => f.write_str(&ts.to_rfc3339()),
        }
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<char> for CellValue {
    fn from(c: char) -> Self {
        CellValue::String(c.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(ts: DateTime<Utc>) -> Self {
        CellValue::Timestamp(ts)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cell_value_kinds() {
        assert_eq!(CellValue::Null.type_name(), "null");
        assert_eq!(CellValue::from("test").type_name(), "string");
        assert_eq!(CellValue::Int(42).type_name(), "int64");
        assert_eq!(CellValue::Float(3.5).type_name(), "float64");
        assert_eq!(CellValue::Bool(true).type_name(), "boolean");
        assert_eq!(CellValue::from(Utc::now()).kind(), ValueKind::Timestamp);
    }

    #[test]
    fn test_missing_markers() {
        assert!(CellValue::Null.is_missing());
        assert!(CellValue::Float(f64::NAN).is_missing());
        assert!(!CellValue::Float(0.0).is_missing());
        assert!(!CellValue::Int(0).is_missing());
        assert!(!CellValue::from("").is_missing());
    }

    #[test]
    fn test_nan_is_a_float() {
        // NaN is missing but still carries the float tag
        assert_eq!(CellValue::Float(f64::NAN).kind(), ValueKind::Float);
        assert!(ValueKind::Float.is_numeric());
        assert!(ValueKind::Int.is_numeric());
        assert!(!ValueKind::Null.is_numeric());
        assert!(!ValueKind::String.is_numeric());
    }

    #[test]
    fn test_cell_value_conversions() {
        assert_eq!(CellValue::from("hello"), CellValue::String("hello".to_string()));
        assert_eq!(CellValue::from(42), CellValue::Int(42));
        assert_eq!(CellValue::from(1.5), CellValue::Float(1.5));
        assert_eq!(CellValue::from(false), CellValue::Bool(false));
        assert_eq!(CellValue::from('a'), CellValue::String("a".to_string()));
        assert_eq!(CellValue::from(None::<i64>), CellValue::Null);
        assert_eq!(CellValue::from(Some(7i64)), CellValue::Int(7));
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Null.to_string(), "null");
        assert_eq!(CellValue::Int(-3).to_string(), "-3");
        assert_eq!(CellValue::from("a").to_string(), "\"a\"");
        assert_eq!(ValueKind::Float.to_string(), "float64");
    }
}
