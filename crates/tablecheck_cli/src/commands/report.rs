use anyhow::Result;
use tablecheck_validator::TableValidator;
use tracing::info;

use super::{load_profile, load_table};
use crate::output;

pub fn execute(table_path: &str, profile_path: &str, format: &str) -> Result<()> {
    let table = load_table(table_path)?;
    let profile = load_profile(profile_path)?;

    info!("Forbid missing values: {}", profile.forbid_missing);

    let report = TableValidator::new().full_report(&table, &profile);
    output::print_check_report("table report", &report, format)?;

    if !report.passed {
        std::process::exit(1);
    }

    Ok(())
}
