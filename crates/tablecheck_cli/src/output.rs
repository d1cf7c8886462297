use anyhow::Result;
use colored::*;
use serde_json::json;
use tablecheck_core::CheckReport;

pub fn print_check_report(title: &str, report: &CheckReport, format: &str) -> Result<()> {
    match format {
        "json" => print_json_report(title, report),
        _ => {
            print_text_report(title, report);
            Ok(())
        }
    }
}

fn print_text_report(title: &str, report: &CheckReport) {
    println!("\n{}", "═".repeat(60));
    println!("  {}", title.to_uppercase().bold());
    println!("{}", "═".repeat(60));

    if report.passed {
        println!("\n{} {}", "✓".green().bold(), "Check PASSED".green().bold());
    } else {
        println!("\n{} {}", "✗".red().bold(), "Check FAILED".red().bold());
    }

    if !report.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for (i, error) in report.errors.iter().enumerate() {
            println!("  {}. {}", i + 1, error.red());
        }
    }

    if !report.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for (i, warning) in report.warnings.iter().enumerate() {
            println!("  {}. {}", i + 1, warning.yellow());
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Rows:           {}", report.stats.rows_checked);
    println!("  Columns:        {}", report.stats.columns_checked);
    println!("  Total errors:   {}", report.errors.len());
    println!("  Total warnings: {}", report.warnings.len());
    println!("{}", "═".repeat(60));
}

fn print_json_report(title: &str, report: &CheckReport) -> Result<()> {
    let output = json!({
        "check": title,
        "passed": report.passed,
        "errors": report.errors,
        "warnings": report.warnings,
        "summary": {
            "rows": report.stats.rows_checked,
            "columns": report.stats.columns_checked,
            "cells_inspected": report.stats.cells_inspected,
            "error_count": report.errors.len(),
            "warning_count": report.warnings.len(),
            "duration_ms": report.stats.duration_ms,
        }
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Prints the outcome of a single boolean check.
///
/// `result` is the raw return value; `passed` is whether that value means the
/// table is acceptable.
pub fn print_check_result(
    check: &str,
    result: bool,
    passed: bool,
    message: &str,
    format: &str,
) -> Result<()> {
    if format == "json" {
        let output = json!({
            "check": check,
            "result": result,
            "passed": passed,
            "message": message,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if passed {
        print_success(message);
    } else {
        print_failure(message);
    }
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_failure(message: &str) {
    println!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue().bold(), message);
}
