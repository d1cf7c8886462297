pub mod checks;
pub mod report;
pub mod sanity;

use anyhow::{Context, Result};
use std::path::Path;
use tablecheck_core::{CheckProfile, Table, TabularData};
use tablecheck_parser::{parse_profile_file, parse_table_file};
use tracing::info;

use crate::output;

/// Loads a table document and logs its shape.
pub fn load_table(table_path: &str) -> Result<Table> {
    info!("Loading table: {}", table_path);

    let table = parse_table_file(Path::new(table_path))
        .with_context(|| format!("Failed to load table file: {}", table_path))?;

    output::print_info(&format!(
        "Table loaded: {} column(s), {} row(s)",
        table.column_count(),
        table.row_count()
    ));

    Ok(table)
}

/// Loads a check profile.
pub fn load_profile(profile_path: &str) -> Result<CheckProfile> {
    info!("Loading profile: {}", profile_path);

    parse_profile_file(Path::new(profile_path))
        .with_context(|| format!("Failed to load profile file: {}", profile_path))
}
