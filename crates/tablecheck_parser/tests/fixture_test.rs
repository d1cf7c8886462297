//! Loads the scenario fixtures and runs the checks on them.
//!
//! Tables parsed from documents must behave exactly like the same tables
//! built in code.

use pretty_assertions::assert_eq;
use std::path::Path;
use tablecheck_core::{CellValue, CheckContext, TableBuilder, TabularData};
use tablecheck_parser::{ParserError, parse_profile_file, parse_table_file};
use tablecheck_validator::TableValidator;

fn fixture(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

#[test]
fn test_scenario_a_from_json() {
    let table = parse_table_file(Path::new(&fixture("scenario_a.json"))).unwrap();
    let validator = TableValidator::new();

    assert_eq!(table.row_count(), 20);
    assert!(validator.sanity_check(&table, ["col1", "col2"]));
}

#[test]
fn test_scenario_a_matches_built_table() {
    let parsed = parse_table_file(Path::new(&fixture("scenario_a.json"))).unwrap();
    let built = TableBuilder::new()
        .column("col1", 0i64..20)
        .column("col2", (b'a'..=b't').map(char::from))
        .build()
        .unwrap();

    assert_eq!(parsed, built);
}

#[test]
fn test_scenario_b_from_yaml() {
    let table = parse_table_file(Path::new(&fixture("scenario_b.yml"))).unwrap();

    assert_eq!(table.cell("col1", 19), Some(&CellValue::from("a")));
    assert!(!TableValidator::new().type_check(&table));
}

#[test]
fn test_scenario_c_from_json() {
    let table = parse_table_file(Path::new(&fixture("scenario_c.json"))).unwrap();
    let validator = TableValidator::new();

    assert!(validator.nan_check(&table));
    assert!(validator.type_check(&table));
    assert!(validator.sanity_check(&table, ["col1", "col2"]));
}

#[test]
fn test_scenario_d_from_json() {
    let table = parse_table_file(Path::new(&fixture("scenario_d.json"))).unwrap();
    assert!(!TableValidator::new().row_check(&table));
}

#[test]
fn test_profile_drives_report() {
    let table = parse_table_file(Path::new(&fixture("scenario_c.json"))).unwrap();
    let validator = TableValidator::new();

    let lenient = parse_profile_file(Path::new(&fixture("profile.toml"))).unwrap();
    let report = validator.full_report(&table, &lenient);
    assert!(report.passed, "Expected pass, got errors: {:?}", report.errors);
    assert_eq!(report.warnings.len(), 1);

    let strict = parse_profile_file(Path::new(&fixture("profile.yml"))).unwrap();
    let report = validator.full_report(&table, &strict);
    assert_eq!(report.errors.len(), 3);
    assert!(report.errors.iter().any(|e| e.contains("col2")));
    assert!(report.errors.iter().any(|e| e.contains("at least 25")));
    assert!(report.errors.iter().any(|e| e.contains("Missing value")));
}

#[test]
fn test_profile_context() {
    let profile = parse_profile_file(Path::new(&fixture("profile.yml"))).unwrap();
    assert_eq!(profile.context(), CheckContext::new().with_min_rows(25));
}

#[test]
fn test_missing_file() {
    let err = parse_table_file(Path::new(&fixture("does_not_exist.json"))).unwrap_err();
    assert!(matches!(err, ParserError::IoError(_)));
}
