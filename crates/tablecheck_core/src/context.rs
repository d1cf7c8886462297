//! Check configuration and reporting types.
//!
//! [`CheckContext`] carries the tunable knobs of a check run,
//! [`CheckProfile`] is its on-disk form, and [`CheckReport`] is what the
//! diagnostic entry points return.

use serde::{Deserialize, Serialize};

/// Minimum number of rows `sanity_check` requires by default.
pub const DEFAULT_MIN_ROWS: usize = 10;

/// Context for check operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckContext {
    /// Minimum number of rows the sanity check requires
    pub min_rows: usize,

    /// Stop reporting after the first failing rule
    pub fail_fast: bool,

    /// Maximum number of errors recorded in a report
    pub max_errors: Option<usize>,
}

impl Default for CheckContext {
    fn default() -> Self {
        Self {
            min_rows: DEFAULT_MIN_ROWS,
            fail_fast: false,
            max_errors: None,
        }
    }
}

impl CheckContext {
    /// Creates a new check context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum row count.
    pub fn with_min_rows(mut self, min_rows: usize) -> Self {
        self.min_rows = min_rows;
        self
    }

    /// Sets fail-fast mode.
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Caps the number of errors recorded in a report.
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = Some(max_errors);
        self
    }
}

/// A reusable set of check settings, usually loaded from a YAML or TOML file.
///
/// # Example
///
/// ```rust
/// use tablecheck_core::CheckProfile;
///
/// let profile = CheckProfile::new(["col1", "col2"]).with_forbid_missing(true);
/// let context = profile.context();
///
/// assert_eq!(context.min_rows, 10);
/// assert!(profile.forbid_missing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckProfile {
    /// Columns the table is allowed to contain
    pub expected_columns: Vec<String>,

    /// Minimum number of rows
    #[serde(default = "default_min_rows")]
    pub min_rows: usize,

    /// Treat missing values as errors instead of warnings
    #[serde(default)]
    pub forbid_missing: bool,

    /// Stop after the first failing rule
    #[serde(default)]
    pub fail_fast: bool,

    /// Maximum number of errors recorded in a report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_errors: Option<usize>,
}

fn default_min_rows() -> usize {
    DEFAULT_MIN_ROWS
}

impl CheckProfile {
    /// Creates a profile with default settings for the given columns.
    pub fn new<I, S>(expected_columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expected_columns: expected_columns.into_iter().map(Into::into).collect(),
            min_rows: DEFAULT_MIN_ROWS,
            forbid_missing: false,
            fail_fast: false,
            max_errors: None,
        }
    }

    /// Sets the minimum row count.
    pub fn with_min_rows(mut self, min_rows: usize) -> Self {
        self.min_rows = min_rows;
        self
    }

    /// Sets whether missing values are errors.
    pub fn with_forbid_missing(mut self, forbid_missing: bool) -> Self {
        self.forbid_missing = forbid_missing;
        self
    }

    /// Builds the check context described by this profile.
    pub fn context(&self) -> CheckContext {
        CheckContext {
            min_rows: self.min_rows,
            fail_fast: self.fail_fast,
            max_errors: self.max_errors,
        }
    }
}

/// Report of check results.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    /// Whether the check passed overall
    pub passed: bool,

    /// List of errors encountered
    pub errors: Vec<String>,

    /// List of warnings
    pub warnings: Vec<String>,

    /// Check statistics
    pub stats: CheckStats,
}

/// Statistics about a check run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckStats {
    /// Number of rows in the table
    pub rows_checked: usize,

    /// Number of columns visited
    pub columns_checked: usize,

    /// Number of cells inspected
    pub cells_inspected: usize,

    /// Check duration in milliseconds
    pub duration_ms: u64,
}

impl CheckReport {
    /// Creates a new successful report.
    pub fn success() -> Self {
        Self {
            passed: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            stats: CheckStats::default(),
        }
    }

    /// Adds an error to the report.
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.passed = false;
    }

    /// Adds a warning to the report.
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}
