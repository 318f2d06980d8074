//! Grid extraction and worksheet writing.
//!
//! A [`CellGrid`] is the typed intermediate between the normalized frame
//! and a worksheet: numbers stay numbers, nulls and empty strings become
//! blanks, everything else is text.

use anyhow::Result;
use polars::prelude::{AnyValue, DataFrame};
use rust_xlsxwriter::Worksheet;

use referral_ingest::format_numeric;

use crate::style::SheetStyles;

/// One typed worksheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Blank,
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Rendered length, used for column sizing.
    fn display_len(&self) -> usize {
        match self {
            CellValue::Blank => 0,
            CellValue::Number(value) => format_numeric(*value).chars().count(),
            CellValue::Text(value) => value
                .lines()
                .map(|line| line.chars().count())
                .max()
                .unwrap_or(0),
        }
    }
}

/// A header row plus typed data rows, ready to write to one worksheet.
#[derive(Debug, Clone)]
pub struct CellGrid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl CellGrid {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { headers, rows }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Width for each column: the longest header or cell, plus padding.
    pub fn column_widths(&self) -> Vec<f64> {
        self.headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                let widest_cell = self
                    .rows
                    .iter()
                    .map(|row| row.get(col).map_or(0, CellValue::display_len))
                    .max()
                    .unwrap_or(0);
                (header.chars().count().max(widest_cell) + 2) as f64
            })
            .collect()
    }
}

/// Extract the given frame rows into a grid, preserving column order.
pub fn grid_from_frame(frame: &DataFrame, rows: &[usize]) -> Result<CellGrid> {
    let headers: Vec<String> = frame
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let columns = frame.get_columns();

    let mut grid_rows = Vec::with_capacity(rows.len());
    for &row in rows {
        let mut cells = Vec::with_capacity(columns.len());
        for column in columns {
            let value = column.get(row).unwrap_or(AnyValue::Null);
            cells.push(cell_value(value));
        }
        grid_rows.push(cells);
    }
    Ok(CellGrid::new(headers, grid_rows))
}

fn cell_value(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Blank,
        AnyValue::Float64(value) => CellValue::Number(value),
        AnyValue::Float32(value) => CellValue::Number(f64::from(value)),
        AnyValue::Int64(value) => CellValue::Number(value as f64),
        AnyValue::Int32(value) => CellValue::Number(f64::from(value)),
        AnyValue::String(text) if text.is_empty() => CellValue::Blank,
        AnyValue::String(text) => CellValue::Text(text.to_string()),
        AnyValue::StringOwned(text) if text.is_empty() => CellValue::Blank,
        AnyValue::StringOwned(text) => CellValue::Text(text.to_string()),
        other => CellValue::Text(other.to_string()),
    }
}

/// Write a grid starting at `start_row`: styled header row, then data rows.
/// Column widths are applied here; freezing and filters are the caller's
/// concern.
pub fn write_grid(
    sheet: &mut Worksheet,
    grid: &CellGrid,
    styles: &SheetStyles,
    start_row: u32,
) -> Result<()> {
    for (col, header) in grid.headers.iter().enumerate() {
        sheet.write_with_format(start_row, col as u16, header.as_str(), &styles.header)?;
    }
    for (offset, row) in grid.rows.iter().enumerate() {
        let sheet_row = start_row + 1 + offset as u32;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                CellValue::Blank => {}
                CellValue::Number(value) => {
                    sheet.write(sheet_row, col as u16, *value)?;
                }
                CellValue::Text(value) => {
                    sheet.write(sheet_row, col as u16, value.as_str())?;
                }
            }
        }
    }
    for (col, width) in grid.column_widths().iter().enumerate() {
        sheet.set_column_width(col as u16, *width)?;
    }
    Ok(())
}
