//! Round-trip tests: render a workbook and read it back with calamine.

use calamine::{open_workbook_auto, Data, Reader};
use chrono::{NaiveDate, NaiveDateTime};
use tempfile::tempdir;

use referral_core::process_referrals;
use referral_ingest::SheetTable;
use referral_model::columns::{
    BOXES_SENT, LAST_ACTIVITY_DATE, PENDING_TASK, REQUIRED_COLUMNS,
};
use referral_report::{write_report, ReportOptions, OVERVIEW_SHEET, SUMMARY_SHEET};

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 18).unwrap()
}

fn generated_at() -> NaiveDateTime {
    reference_date().and_hms_opt(9, 30, 0).unwrap()
}

fn sample_table() -> SheetTable {
    let headers: Vec<String> = REQUIRED_COLUMNS.iter().map(|name| (*name).to_string()).collect();
    let overrides: &[&[(&str, &str)]] = &[
        &[
            (PENDING_TASK, "MTG Box Delivery"),
            (LAST_ACTIVITY_DATE, "2025-06-08"),
            (BOXES_SENT, "0"),
        ],
        &[(PENDING_TASK, "Speak to Member")],
    ];
    let rows = overrides
        .iter()
        .map(|pairs| {
            let mut cells = vec![String::new(); headers.len()];
            for (name, value) in *pairs {
                let index = headers.iter().position(|header| header == name).unwrap();
                cells[index] = (*value).to_string();
            }
            cells
        })
        .collect();
    SheetTable::new(headers, rows)
}

fn cell_text(range: &calamine::Range<Data>, row: u32, col: u32) -> String {
    match range.get_value((row, col)) {
        Some(Data::String(text)) => text.clone(),
        Some(Data::Float(value)) => value.to_string(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[test]
fn workbook_contains_the_nine_sheets_in_order() {
    let processed = process_referrals(&sample_table(), reference_date()).unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.xlsx");
    let options = ReportOptions {
        generated_at: generated_at(),
    };
    write_report(&path, &processed, &options).unwrap();

    let workbook = open_workbook_auto(&path).unwrap();
    assert_eq!(
        workbook.sheet_names(),
        vec![
            OVERVIEW_SHEET,
            SUMMARY_SHEET,
            "Pending CCHP Nutrition",
            "Pending Initial MTG Box",
            "Pending Ongoing MTG Box",
            "Pending Nutrition Assess",
            "Pending Speak to Member",
            "Pending TAR Approval",
            "Pending Reauth NotSubm",
        ]
    );
}

#[test]
fn summary_sheet_has_banner_headers_and_counts() {
    let processed = process_referrals(&sample_table(), reference_date()).unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.xlsx");
    let options = ReportOptions {
        generated_at: generated_at(),
    };
    write_report(&path, &processed, &options).unwrap();

    let mut workbook = open_workbook_auto(&path).unwrap();
    let range = workbook.worksheet_range(SUMMARY_SHEET).unwrap();

    assert_eq!(cell_text(&range, 0, 0), "Data is based on: 2025-06-18 09:30 AM");
    assert_eq!(cell_text(&range, 2, 0), "Category");
    assert_eq!(cell_text(&range, 2, 1), "Referrals");
    assert_eq!(cell_text(&range, 2, 2), "Definition");

    // Row 0 of the sample is an initial MTG delivery, ten days pending.
    assert_eq!(cell_text(&range, 3, 0), "INITIAL MTG box delivery");
    assert_eq!(range.get_value((3, 1)), Some(&Data::Float(1.0)));
    // The speak-to-member row has no activity date, so it never flags.
    assert_eq!(cell_text(&range, 6, 0), "Speak to member");
    assert_eq!(range.get_value((6, 1)), Some(&Data::Float(0.0)));
}

#[test]
fn overview_sheet_round_trips_the_normalized_table() {
    let processed = process_referrals(&sample_table(), reference_date()).unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.xlsx");
    write_report(&path, &processed, &ReportOptions {
        generated_at: generated_at(),
    })
    .unwrap();

    let mut workbook = open_workbook_auto(&path).unwrap();
    let range = workbook.worksheet_range(OVERVIEW_SHEET).unwrap();

    for (col, name) in REQUIRED_COLUMNS.iter().enumerate() {
        assert_eq!(cell_text(&range, 0, col as u32), *name, "column {col}");
    }
    // Header plus the two data rows.
    assert_eq!(range.height(), 3);

    let task_col = REQUIRED_COLUMNS
        .iter()
        .position(|name| *name == PENDING_TASK)
        .unwrap() as u32;
    assert_eq!(cell_text(&range, 1, task_col), "MTG Box Delivery");

    // Counters default to zero and are written as numbers.
    let boxes_col = REQUIRED_COLUMNS
        .iter()
        .position(|name| *name == BOXES_SENT)
        .unwrap() as u32;
    assert_eq!(range.get_value((2, boxes_col)), Some(&Data::Float(0.0)));
}

#[test]
fn subset_sheets_contain_only_matching_rows() {
    let processed = process_referrals(&sample_table(), reference_date()).unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.xlsx");
    write_report(&path, &processed, &ReportOptions {
        generated_at: generated_at(),
    })
    .unwrap();

    let mut workbook = open_workbook_auto(&path).unwrap();

    let initial = workbook.worksheet_range("Pending Initial MTG Box").unwrap();
    assert_eq!(initial.height(), 2);
    let task_col = REQUIRED_COLUMNS
        .iter()
        .position(|name| *name == PENDING_TASK)
        .unwrap() as u32;
    assert_eq!(cell_text(&initial, 1, task_col), "MTG Box Delivery");

    // No row matches the TAR rule; only the header remains.
    let tar = workbook.worksheet_range("Pending TAR Approval").unwrap();
    assert_eq!(tar.height(), 1);
}
