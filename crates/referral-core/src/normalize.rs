//! Type normalization of the validated referral table.
//!
//! Turns the raw string table into a uniformly typed Polars frame:
//! dates → canonical ISO strings (empty = missing), counters → zero-default
//! numbers, designated text columns → strings with missing markers blanked,
//! and the derived day count recomputed from the reference date. Everything
//! else goes through a best-effort type probe.
//!
//! Normalization is pure; the input table is never mutated.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use referral_ingest::{SheetTable, parse_f64};
use referral_model::columns::{
    DATE_COLUMNS, DAYS_IN_CURRENT_ACTIVITY, LAST_ACTIVITY_DATE, NUMERIC_COLUMNS, TEXT_COLUMNS,
};

use crate::dates::{days_between, format_iso_date, parse_flexible_date};
use crate::frame::NormalizedTable;

/// Sample size for the column type probe.
///
/// Only the first 100 non-missing values are inspected, so the inferred
/// type can change with row order; this is a best-effort compatibility shim
/// for loosely typed spreadsheet input, not guaranteed type inference.
pub const TYPE_PROBE_SAMPLE: usize = 100;

/// True for cells that represent an absent value: empty strings and the
/// literal not-available renderings a loosely typed export produces.
pub fn is_missing_marker(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("nan")
        || trimmed.eq_ignore_ascii_case("nat")
}

/// Normalize the validated table against an explicit reference date.
///
/// Column order is preserved from the source. Re-running normalization on a
/// rendering of an already normalized table yields an equal frame.
pub fn normalize(table: &SheetTable, reference_date: NaiveDate) -> Result<NormalizedTable> {
    let mut columns: Vec<Column> = Vec::with_capacity(table.headers.len());
    for (index, header) in table.headers.iter().enumerate() {
        let column = build_column(table, header, index, reference_date);
        columns.push(column);
    }
    let data = DataFrame::new(columns).context("build normalized frame")?;
    Ok(NormalizedTable::new(data))
}

fn build_column(
    table: &SheetTable,
    header: &str,
    index: usize,
    reference_date: NaiveDate,
) -> Column {
    if DATE_COLUMNS.contains(&header) {
        date_column(table, header, index)
    } else if header == DAYS_IN_CURRENT_ACTIVITY {
        days_column(table, header, reference_date)
    } else if NUMERIC_COLUMNS.contains(&header) {
        counter_column(table, header, index)
    } else if TEXT_COLUMNS.contains(&header) {
        text_column(table, header, index)
    } else {
        probed_column(table, header, index)
    }
}

/// Parse a date column; unparsable cells become the empty missing marker,
/// never an error.
fn date_column(table: &SheetTable, header: &str, index: usize) -> Column {
    let values: Vec<String> = table
        .rows
        .iter()
        .map(|row| {
            let raw = row.get(index).map(String::as_str).unwrap_or("");
            parse_flexible_date(raw)
                .map(format_iso_date)
                .unwrap_or_default()
        })
        .collect();
    Series::new(header.into(), values).into()
}

/// Recompute elapsed days from the last activity date. Null iff the last
/// activity date is missing; negative when the activity is in the future.
fn days_column(table: &SheetTable, header: &str, reference_date: NaiveDate) -> Column {
    let activity_index = table.column_index(LAST_ACTIVITY_DATE);
    let values: Vec<Option<i64>> = table
        .rows
        .iter()
        .map(|row| {
            let raw = activity_index
                .and_then(|idx| row.get(idx))
                .map(String::as_str)
                .unwrap_or("");
            parse_flexible_date(raw).map(|date| days_between(date, reference_date))
        })
        .collect();
    Series::new(header.into(), values).into()
}

/// Zero-default counter column: missing and unparsable values become 0.
fn counter_column(table: &SheetTable, header: &str, index: usize) -> Column {
    let values: Vec<f64> = table
        .rows
        .iter()
        .map(|row| {
            let raw = row.get(index).map(String::as_str).unwrap_or("");
            parse_f64(raw).unwrap_or(0.0)
        })
        .collect();
    Series::new(header.into(), values).into()
}

/// String column with missing markers blanked. Non-missing values are kept
/// verbatim, including surrounding whitespace, because downstream rules
/// distinguish trimmed from untrimmed comparisons.
fn text_column(table: &SheetTable, header: &str, index: usize) -> Column {
    let values: Vec<String> = table
        .rows
        .iter()
        .map(|row| {
            let raw = row.get(index).map(String::as_str).unwrap_or("");
            if is_missing_marker(raw) {
                String::new()
            } else {
                raw.to_string()
            }
        })
        .collect();
    Series::new(header.into(), values).into()
}

/// Probe the first [`TYPE_PROBE_SAMPLE`] non-missing values: if all parse as
/// numbers the whole column is numeric (missing → null), otherwise it is a
/// text column. Keeps mixed-type columns away from consumers that require
/// uniform typing.
fn probed_column(table: &SheetTable, header: &str, index: usize) -> Column {
    let mut sampled = 0usize;
    let mut all_numeric = true;
    for row in &table.rows {
        if sampled >= TYPE_PROBE_SAMPLE {
            break;
        }
        let raw = row.get(index).map(String::as_str).unwrap_or("");
        if is_missing_marker(raw) {
            continue;
        }
        sampled += 1;
        if parse_f64(raw).is_none() {
            all_numeric = false;
            break;
        }
    }
    if sampled > 0 && all_numeric {
        let values: Vec<Option<f64>> = table
            .rows
            .iter()
            .map(|row| {
                let raw = row.get(index).map(String::as_str).unwrap_or("");
                parse_f64(raw)
            })
            .collect();
        Series::new(header.into(), values).into()
    } else {
        text_column(table, header, index)
    }
}
