//! XLSX ingestion via calamine.
//!
//! The first worksheet of the workbook is taken as the export; its first row
//! is the header row. Excel serial date cells are rendered as
//! `YYYY-MM-DD HH:MM:SS` strings so the normalizer sees one date shape
//! regardless of how the export was produced.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::polars_utils::format_numeric;
use crate::sheet_table::{SheetTable, normalize_header};

/// Read the first worksheet of an XLSX/XLS workbook into a [`SheetTable`].
pub fn read_xlsx_table(path: &Path) -> Result<SheetTable> {
    let mut workbook = open_workbook_auto(path)?;
    let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
        return Err(IngestError::EmptyWorkbook {
            path: path.to_path_buf(),
        });
    };
    let range = workbook.worksheet_range(&sheet_name)?;
    let mut row_iter = range.rows();
    let Some(header_row) = row_iter.next() else {
        return Err(IngestError::MissingHeader {
            path: path.to_path_buf(),
        });
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| normalize_header(&cell_to_string(cell)))
        .collect();
    let mut rows = Vec::new();
    for cells in row_iter {
        if cells.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = cells.get(idx).map(cell_to_string).unwrap_or_default();
            row.push(value);
        }
        rows.push(row);
    }
    debug!(
        source_file = %path.display(),
        sheet_name = %sheet_name,
        column_count = headers.len(),
        row_count = rows.len(),
        "xlsx table read"
    );
    Ok(SheetTable { headers, rows })
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.clone(),
        Data::Float(value) => format_numeric(*value),
        Data::Int(value) => value.to_string(),
        Data::Bool(value) => if *value { "TRUE" } else { "FALSE" }.to_string(),
        Data::DateTime(value) => value
            .as_datetime()
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default(),
        Data::DateTimeIso(value) | Data::DurationIso(value) => value.clone(),
        Data::Error(_) => String::new(),
    }
}
