//! Main check engine.
//!
//! This module provides the `TableValidator` that combines the schema and
//! quality rules into the four boolean checks, the composite sanity check,
//! and the diagnostic reports.

use crate::{CheckError, QualityChecker, SchemaChecker};
use std::time::Instant;
use tablecheck_core::{CheckContext, CheckProfile, CheckReport, CheckStats, TabularData};
use tracing::debug;

/// Runs structural and quality checks against a table.
///
/// All checks are read-only and never fail; a `false` result (or a failed
/// report) is the only failure signal.
///
/// # Example
///
/// ```rust
/// use tablecheck_core::TableBuilder;
/// use tablecheck_validator::TableValidator;
///
/// let table = TableBuilder::new()
///     .column("col1", 0i64..20)
///     .column("col2", (0u8..20).map(char::from))
///     .build()
///     .unwrap();
///
/// let validator = TableValidator::new();
/// assert!(validator.sanity_check(&table, ["col1", "col2"]));
/// assert!(!validator.nan_check(&table));
/// ```
pub struct TableValidator {
    schema_checker: SchemaChecker,
    quality_checker: QualityChecker,
}

impl TableValidator {
    /// Creates a new table validator.
    pub fn new() -> Self {
        Self {
            schema_checker: SchemaChecker::new(),
            quality_checker: QualityChecker::new(),
        }
    }

    /// Returns true if the table only has expected columns, every column is
    /// type-consistent, and there are at least
    /// [`DEFAULT_MIN_ROWS`](tablecheck_core::DEFAULT_MIN_ROWS) rows.
    ///
    /// Missing values are not part of this check.
    pub fn sanity_check<T, I, S>(&self, table: &T, expected_columns: I) -> bool
    where
        T: TabularData + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.sanity_check_with(table, expected_columns, &CheckContext::default())
    }

    /// Same as [`sanity_check`](Self::sanity_check) with the row minimum
    /// taken from `context`.
    pub fn sanity_check_with<T, I, S>(
        &self,
        table: &T,
        expected_columns: I,
        context: &CheckContext,
    ) -> bool
    where
        T: TabularData + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unexpected = self.schema_checker.unexpected_columns(table, expected_columns);
        if !unexpected.is_empty() {
            debug!("Sanity check failed: unexpected columns {:?}", unexpected);
            return false;
        }

        if !self.type_check(table) {
            debug!("Sanity check failed: inconsistent column types");
            return false;
        }

        if let Err(err) = self.quality_checker.check_min_rows(table, context.min_rows) {
            debug!("Sanity check failed: {}", err);
            return false;
        }

        true
    }

    /// Returns true if every value in each column has the same type as that
    /// column's first non-missing value. Empty tables and empty columns pass.
    ///
    /// Missing values (`Null` or NaN) are accepted in int and float columns.
    pub fn type_check<T>(&self, table: &T) -> bool
    where
        T: TabularData + ?Sized,
    {
        self.schema_checker.is_type_consistent(table)
    }

    /// Returns true if the table CONTAINS at least one missing value.
    ///
    /// Note the polarity: `true` means the table is not clean. This is the
    /// same check as [`has_missing_values`](Self::has_missing_values).
    pub fn nan_check<T>(&self, table: &T) -> bool
    where
        T: TabularData + ?Sized,
    {
        self.has_missing_values(table)
    }

    /// Returns true if any cell is `Null` or a NaN float.
    pub fn has_missing_values<T>(&self, table: &T) -> bool
    where
        T: TabularData + ?Sized,
    {
        self.quality_checker.has_missing(table)
    }

    /// Returns true if the table has at least one row.
    pub fn row_check<T>(&self, table: &T) -> bool
    where
        T: TabularData + ?Sized,
    {
        self.quality_checker.check_min_rows(table, 1).is_ok()
    }

    /// Returns the table's columns that are not among `expected_columns`.
    pub fn unexpected_columns<'t, T, I, S>(
        &self,
        table: &'t T,
        expected_columns: I,
    ) -> Vec<&'t str>
    where
        T: TabularData + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.schema_checker.unexpected_columns(table, expected_columns)
    }

    /// Runs the sanity rules and explains every failure.
    ///
    /// `report.passed` always equals
    /// [`sanity_check_with`](Self::sanity_check_with) for the same inputs.
    /// Missing values are listed as warnings.
    pub fn sanity_report<T, I, S>(
        &self,
        table: &T,
        expected_columns: I,
        context: &CheckContext,
    ) -> CheckReport
    where
        T: TabularData + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.run_report(table, expected_columns, context, false)
    }

    /// Runs the sanity rules configured by `profile`.
    ///
    /// With `forbid_missing` set, missing values are errors and fail the
    /// report.
    pub fn full_report<T>(&self, table: &T, profile: &CheckProfile) -> CheckReport
    where
        T: TabularData + ?Sized,
    {
        self.run_report(
            table,
            &profile.expected_columns,
            &profile.context(),
            profile.forbid_missing,
        )
    }

    fn run_report<T, I, S>(
        &self,
        table: &T,
        expected_columns: I,
        context: &CheckContext,
        missing_is_error: bool,
    ) -> CheckReport
    where
        T: TabularData + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = Instant::now();
        let mut sink = ErrorSink::new(context.max_errors);
        let mut stats = CheckStats {
            rows_checked: table.row_count(),
            columns_checked: table.column_count(),
            ..CheckStats::default()
        };

        // 1. Column membership
        let unexpected = self.schema_checker.unexpected_columns(table, expected_columns);
        sink.errors(unexpected.iter().map(|c| CheckError::unexpected_column(*c)));

        // 2. Type consistency
        if !(context.fail_fast && sink.failed()) {
            stats.cells_inspected = table.row_count() * table.column_count();
            sink.errors(self.schema_checker.type_mismatches(table));
        }

        // 3. Row count
        if !(context.fail_fast && sink.failed()) {
            if let Err(err) = self.quality_checker.check_min_rows(table, context.min_rows) {
                sink.errors([err]);
            }
        }

        // 4. Missing values
        if !(context.fail_fast && sink.failed()) {
            let missing = self.quality_checker.missing_cells(table);
            if missing_is_error {
                sink.errors(missing);
            } else {
                sink.warnings(missing);
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        let report = sink.finish(stats);

        debug!(
            "Sanity report: passed={}, errors={}, warnings={}",
            report.passed,
            report.errors.len(),
            report.warnings.len()
        );

        report
    }
}

impl Default for TableValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects report entries, honoring the error cap.
struct ErrorSink {
    limit: Option<usize>,
    report: CheckReport,
    dropped_errors: usize,
    dropped_warnings: usize,
}

impl ErrorSink {
    fn new(limit: Option<usize>) -> Self {
        Self {
            limit,
            report: CheckReport::success(),
            dropped_errors: 0,
            dropped_warnings: 0,
        }
    }

    fn failed(&self) -> bool {
        !self.report.errors.is_empty() || self.dropped_errors > 0
    }

    fn errors(&mut self, errors: impl IntoIterator<Item = CheckError>) {
        for err in errors {
            if self.limit.is_some_and(|limit| self.report.errors.len() >= limit) {
                self.dropped_errors += 1;
            } else {
                self.report.add_error(err.to_string());
            }
        }
    }

    fn warnings(&mut self, warnings: impl IntoIterator<Item = CheckError>) {
        for warning in warnings {
            if self.limit.is_some_and(|limit| self.report.warnings.len() >= limit) {
                self.dropped_warnings += 1;
            } else {
                self.report.add_warning(warning.to_string());
            }
        }
    }

    fn finish(mut self, stats: CheckStats) -> CheckReport {
        // A zero cap drops every error without marking the report
        self.report.passed = !self.failed();

        if self.dropped_errors > 0 {
            self.report.add_warning(format!(
                "Error limit reached: {} more error(s) not shown",
                self.dropped_errors
            ));
        }
        if self.dropped_warnings > 0 {
            self.report.add_warning(format!(
                "Warning limit reached: {} more warning(s) not shown",
                self.dropped_warnings
            ));
        }

        self.report.stats = stats;
        self.report
    }
}

/// Returns true if `table` only has expected columns, is type-consistent,
/// and has at least 10 rows.
///
/// Shorthand for [`TableValidator::sanity_check`].
pub fn sanity_check<T, I, S>(table: &T, expected_columns: I) -> bool
where
    T: TabularData + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    TableValidator::new().sanity_check(table, expected_columns)
}

/// Shorthand for [`TableValidator::type_check`].
pub fn type_check<T: TabularData + ?Sized>(table: &T) -> bool {
    TableValidator::new().type_check(table)
}

/// Returns true if `table` contains at least one missing value.
///
/// Shorthand for [`TableValidator::nan_check`].
pub fn nan_check<T: TabularData + ?Sized>(table: &T) -> bool {
    TableValidator::new().nan_check(table)
}

/// Shorthand for [`TableValidator::has_missing_values`].
pub fn has_missing_values<T: TabularData + ?Sized>(table: &T) -> bool {
    TableValidator::new().has_missing_values(table)
}

/// Shorthand for [`TableValidator::row_check`].
pub fn row_check<T: TabularData + ?Sized>(table: &T) -> bool {
    TableValidator::new().row_check(table)
}
