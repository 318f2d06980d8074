//! Integration tests for the report pipeline over temp CSV files.

use std::fs;
use std::path::Path;

use calamine::{open_workbook_auto, Reader};
use chrono::NaiveDate;
use tempfile::tempdir;

use referral_cli::pipeline::{run_report, ReportRequest};
use referral_model::columns::{
    LAST_ACTIVITY_DATE, PENDING_TASK, REQUIRED_COLUMNS,
};
use referral_model::{ReferralError, TaskCategory};

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 18).unwrap()
}

fn csv_row(overrides: &[(&str, &str)]) -> String {
    let mut cells = vec![String::new(); REQUIRED_COLUMNS.len()];
    for (name, value) in overrides {
        let index = REQUIRED_COLUMNS
            .iter()
            .position(|header| header == name)
            .unwrap();
        cells[index] = (*value).to_string();
    }
    cells.join(",")
}

fn write_export(path: &Path, rows: &[&[(&str, &str)]]) {
    let mut contents = REQUIRED_COLUMNS.join(",");
    for row in rows {
        contents.push('\n');
        contents.push_str(&csv_row(row));
    }
    fs::write(path, contents).unwrap();
}

#[test]
fn report_writes_the_workbook_and_counts() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("export.csv");
    let output = dir.path().join("report.xlsx");
    write_export(
        &input,
        &[&[
            (PENDING_TASK, "Speak to Member"),
            (LAST_ACTIVITY_DATE, "2025-06-01"),
        ]],
    );

    let result = run_report(&ReportRequest {
        input: input.clone(),
        output: Some(output.clone()),
        reference_date: reference_date(),
        dry_run: false,
    })
    .unwrap();

    assert_eq!(result.total_records, 1);
    assert_eq!(result.output.as_deref(), Some(output.as_path()));
    let speak = result
        .summary
        .iter()
        .find(|row| row.category == TaskCategory::SpeakToMember)
        .unwrap();
    assert_eq!(speak.count, 1);

    let workbook = open_workbook_auto(&output).unwrap();
    assert_eq!(workbook.sheet_names().len(), 9);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("export.csv");
    write_export(&input, &[&[]]);

    let result = run_report(&ReportRequest {
        input,
        output: Some(dir.path().join("report.xlsx")),
        reference_date: reference_date(),
        dry_run: true,
    })
    .unwrap();

    assert_eq!(result.output, None);
    assert!(!dir.path().join("report.xlsx").exists());
}

#[test]
fn missing_columns_surface_as_a_schema_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("export.csv");
    fs::write(&input, "Payer Organization,County\nCCHP,Fresno\n").unwrap();

    let error = run_report(&ReportRequest {
        input,
        output: None,
        reference_date: reference_date(),
        dry_run: true,
    })
    .unwrap_err();

    match error.downcast_ref::<ReferralError>() {
        Some(ReferralError::Schema { missing }) => {
            assert!(missing.contains(&"Implify Member ID".to_string()));
            assert!(!missing.contains(&"Payer Organization".to_string()));
        }
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn unreadable_input_fails_with_context() {
    let dir = tempdir().unwrap();
    let error = run_report(&ReportRequest {
        input: dir.path().join("missing.csv"),
        output: None,
        reference_date: reference_date(),
        dry_run: true,
    })
    .unwrap_err();

    assert!(error.to_string().contains("failed to read"));
}
