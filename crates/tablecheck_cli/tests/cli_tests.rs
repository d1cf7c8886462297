use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to test fixtures
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

/// Helper to create a Command for the tablecheck binary
#[allow(deprecated)]
fn tablecheck() -> Command {
    Command::cargo_bin("tablecheck").expect("Failed to find tablecheck binary")
}

// ============================================================================
// sanity command tests
// ============================================================================

#[test]
fn test_sanity_passes_with_columns() {
    tablecheck()
        .arg("sanity")
        .arg(fixture_path("scenario_a.json"))
        .arg("--columns")
        .arg("col1,col2")
        .assert()
        .success()
        .stdout(predicate::str::contains("PASSED"));
}

#[test]
fn test_sanity_passes_with_profile() {
    tablecheck()
        .arg("sanity")
        .arg(fixture_path("scenario_a.json"))
        .arg("--profile")
        .arg(fixture_path("profile.toml"))
        .assert()
        .success();
}

#[test]
fn test_sanity_tolerates_missing_value_in_int_column() {
    tablecheck()
        .arg("sanity")
        .arg(fixture_path("scenario_c.json"))
        .arg("--columns")
        .arg("col1,col2")
        .assert()
        .success()
        .stdout(predicate::str::contains("PASSED"));
}

#[test]
fn test_sanity_reports_unexpected_column() {
    tablecheck()
        .arg("sanity")
        .arg(fixture_path("scenario_a.json"))
        .arg("--columns")
        .arg("col1")
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAILED"))
        .stdout(predicate::str::contains("Unexpected column 'col2'"));
}

#[test]
fn test_sanity_min_rows_override() {
    tablecheck()
        .arg("sanity")
        .arg(fixture_path("short.yml"))
        .arg("--columns")
        .arg("id,score")
        .assert()
        .failure()
        .stdout(predicate::str::contains("at least 10 required"));

    tablecheck()
        .arg("sanity")
        .arg(fixture_path("short.yml"))
        .arg("--columns")
        .arg("id,score")
        .arg("--min-rows")
        .arg("3")
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing value in column 'score' at row 1"));
}

#[test]
fn test_sanity_requires_columns_or_profile() {
    tablecheck()
        .arg("sanity")
        .arg(fixture_path("scenario_a.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--columns or --profile"));
}

#[test]
fn test_sanity_json_output() {
    let output = tablecheck()
        .arg("sanity")
        .arg(fixture_path("scenario_b.yml"))
        .arg("--columns")
        .arg("col1,col2")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["check"], "sanity check");
    assert_eq!(json["passed"], false);
    assert_eq!(json["summary"]["rows"], 20);
    assert_eq!(json["summary"]["error_count"], 1);
}

// ============================================================================
// single check command tests
// ============================================================================

#[test]
fn test_types_consistent() {
    tablecheck()
        .arg("types")
        .arg(fixture_path("scenario_a.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("type-consistent"));
}

#[test]
fn test_types_missing_value_is_consistent() {
    tablecheck()
        .arg("types")
        .arg(fixture_path("scenario_c.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("type-consistent"));
}

#[test]
fn test_types_mixed() {
    tablecheck()
        .arg("types")
        .arg(fixture_path("scenario_b.yml"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("mixed value types"));
}

#[test]
fn test_nan_detects_missing_values() {
    tablecheck()
        .arg("nan")
        .arg(fixture_path("scenario_c.json"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("contains missing values"));
}

#[test]
fn test_nan_json_keeps_raw_result() {
    let output = tablecheck()
        .arg("nan")
        .arg(fixture_path("scenario_c.json"))
        .arg("-f")
        .arg("json")
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["check"], "nan_check");
    assert_eq!(json["result"], true);
    assert_eq!(json["passed"], false);
}

#[test]
fn test_nan_clean_table() {
    tablecheck()
        .arg("nan")
        .arg(fixture_path("scenario_a.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No missing values"));
}

#[test]
fn test_rows_empty_table() {
    tablecheck()
        .arg("rows")
        .arg(fixture_path("scenario_d.json"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("no rows"));
}

#[test]
fn test_rows_non_empty_table() {
    tablecheck()
        .arg("rows")
        .arg(fixture_path("short.yml"))
        .assert()
        .success();
}

// ============================================================================
// report command tests
// ============================================================================

#[test]
fn test_report_with_strict_profile() {
    tablecheck()
        .arg("report")
        .arg(fixture_path("scenario_c.json"))
        .arg("--profile")
        .arg(fixture_path("profile.yml"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("TABLE REPORT"))
        .stdout(predicate::str::contains("Missing value in column 'col1' at row 19"))
        .stdout(predicate::str::contains("Total errors:   3"));
}

#[test]
fn test_report_from_generated_files() {
    let dir = TempDir::new().unwrap();
    let table = dir.path().join("table.json");
    let profile = dir.path().join("profile.toml");

    fs::write(
        &table,
        r#"{"columns": [{"name": "flag", "values": [true, false, true]}]}"#,
    )
    .unwrap();
    fs::write(&profile, "expected_columns = [\"flag\"]\nmin_rows = 3\n").unwrap();

    tablecheck()
        .arg("report")
        .arg(&table)
        .arg("--profile")
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("PASSED"));
}

// ============================================================================
// error handling tests
// ============================================================================

#[test]
fn test_missing_file() {
    tablecheck()
        .arg("types")
        .arg("nonexistent.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_ragged_table() {
    tablecheck()
        .arg("rows")
        .arg(fixture_path("broken.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load table file"));
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let table = dir.path().join("table.csv");
    fs::write(&table, "a,b\n1,2\n").unwrap();

    tablecheck()
        .arg("rows")
        .arg(&table)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported"));
}

#[test]
fn test_help_lists_commands() {
    tablecheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sanity"))
        .stdout(predicate::str::contains("types"))
        .stdout(predicate::str::contains("nan"))
        .stdout(predicate::str::contains("rows"))
        .stdout(predicate::str::contains("report"));
}
