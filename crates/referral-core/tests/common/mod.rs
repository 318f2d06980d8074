//! Shared builders for referral table tests.

use chrono::NaiveDate;
use referral_ingest::SheetTable;
use referral_model::columns::REQUIRED_COLUMNS;

/// Fixed reference date used across the rule tests.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 18).unwrap()
}

/// Build a table with the full required header row. Each row is given as
/// `(column, value)` overrides; unmentioned cells stay empty.
pub fn referral_table(rows: &[&[(&str, &str)]]) -> SheetTable {
    let headers: Vec<String> = REQUIRED_COLUMNS.iter().map(|name| (*name).to_string()).collect();
    let rows = rows
        .iter()
        .map(|pairs| {
            let mut cells = vec![String::new(); headers.len()];
            for (name, value) in *pairs {
                let index = headers
                    .iter()
                    .position(|header| header == name)
                    .unwrap_or_else(|| panic!("unknown column in test: {name}"));
                cells[index] = (*value).to_string();
            }
            cells
        })
        .collect();
    SheetTable::new(headers, rows)
}
