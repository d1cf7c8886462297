use anyhow::{Result, bail};
use tablecheck_core::CheckContext;
use tablecheck_validator::TableValidator;
use tracing::info;

use super::{load_profile, load_table};
use crate::output;

pub fn execute(
    table_path: &str,
    columns: Option<Vec<String>>,
    profile_path: Option<&str>,
    min_rows: Option<usize>,
    format: &str,
) -> Result<()> {
    let table = load_table(table_path)?;

    // Explicit flags win over the profile
    let (expected, mut context) = match (columns, profile_path) {
        (Some(columns), _) => {
            let context = match profile_path {
                Some(path) => load_profile(path)?.context(),
                None => CheckContext::new(),
            };
            (columns, context)
        }
        (None, Some(path)) => {
            let profile = load_profile(path)?;
            let context = profile.context();
            (profile.expected_columns, context)
        }
        (None, None) => bail!("Either --columns or --profile is required"),
    };

    if let Some(min_rows) = min_rows {
        context = context.with_min_rows(min_rows);
    }

    info!("Expected columns: {}", expected.join(", "));
    info!("Minimum rows: {}", context.min_rows);

    let report = TableValidator::new().sanity_report(&table, &expected, &context);
    output::print_check_report("sanity check", &report, format)?;

    if !report.passed {
        std::process::exit(1);
    }

    Ok(())
}
