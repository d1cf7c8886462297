use anyhow::Result;
use tablecheck_validator::TableValidator;
use tracing::debug;

use super::load_table;
use crate::output;

/// Runs `type_check` and exits non-zero on inconsistent columns.
pub fn types(table_path: &str, format: &str) -> Result<()> {
    let table = load_table(table_path)?;
    let result = TableValidator::new().type_check(&table);
    debug!("type_check = {}", result);

    let message = if result {
        "All columns are type-consistent"
    } else {
        "Found columns with mixed value types"
    };
    output::print_check_result("type_check", result, result, message, format)?;

    if !result {
        std::process::exit(1);
    }
    Ok(())
}

/// Runs `nan_check` and exits non-zero when missing values are present.
pub fn nan(table_path: &str, format: &str) -> Result<()> {
    let table = load_table(table_path)?;
    // true means the table contains missing values
    let result = TableValidator::new().nan_check(&table);
    debug!("nan_check = {}", result);

    let message = if result {
        "Table contains missing values"
    } else {
        "No missing values found"
    };
    output::print_check_result("nan_check", result, !result, message, format)?;

    if result {
        std::process::exit(1);
    }
    Ok(())
}

/// Runs `row_check` and exits non-zero on an empty table.
pub fn rows(table_path: &str, format: &str) -> Result<()> {
    let table = load_table(table_path)?;
    let result = TableValidator::new().row_check(&table);
    debug!("row_check = {}", result);

    let message = if result {
        "Table has at least one row"
    } else {
        "Table has no rows"
    };
    output::print_check_result("row_check", result, result, message, format)?;

    if !result {
        std::process::exit(1);
    }
    Ok(())
}
