//! Raw tabular representation of an uploaded referral export.
//!
//! A [`SheetTable`] is the untyped stage between file I/O and normalization:
//! one header row plus string cells. Header labels are trimmed (and
//! BOM-stripped); cell values are preserved verbatim because several
//! downstream rules distinguish trimmed from untrimmed comparisons.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by exact header match.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Cell at (row, column index), empty string when the row is short.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Trim a header label and strip a leading UTF-8 BOM.
pub fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

/// Read a single-header-row CSV file into a [`SheetTable`].
///
/// Rows shorter than the header are right-padded with empty cells; fully
/// empty rows are dropped. Cell values are not trimmed.
pub fn read_csv_table(path: &Path) -> Result<SheetTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let mut records = reader.records();
    let Some(header_record) = records.next() else {
        return Err(IngestError::MissingHeader {
            path: path.to_path_buf(),
        });
    };
    let headers: Vec<String> = header_record?.iter().map(normalize_header).collect();
    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(record.get(idx).unwrap_or("").to_string());
        }
        rows.push(row);
    }
    debug!(
        source_file = %path.display(),
        column_count = headers.len(),
        row_count = rows.len(),
        "csv table read"
    );
    Ok(SheetTable { headers, rows })
}

/// Read a tabular file, choosing the reader by extension.
///
/// `.xlsx`/`.xls`/`.xlsm` go through calamine; everything else is read as
/// CSV.
pub fn read_sheet_table(path: &Path) -> Result<SheetTable> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "xlsx" | "xls" | "xlsm" => crate::xlsx::read_xlsx_table(path),
        _ => read_csv_table(path),
    }
}
