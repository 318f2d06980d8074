//! Workbook assembly: overview, summary, and the seven subset sheets.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use rust_xlsxwriter::Workbook;
use tracing::debug;

use referral_core::ProcessedReferrals;
use referral_model::{SummaryRow, TaskCategory};

use crate::sheet::{grid_from_frame, write_grid, CellGrid, CellValue};
use crate::style::SheetStyles;

/// Name of the full-table sheet.
pub const OVERVIEW_SHEET: &str = "Referral Overview";

/// Name of the counts sheet.
pub const SUMMARY_SHEET: &str = "Pending Tasks Summary";

/// Subset sheet order in the workbook. The counseling sheet leads; the
/// rest follow the summary row order.
pub const SUBSET_SHEET_ORDER: [TaskCategory; 7] = [
    TaskCategory::NutritionCounseling,
    TaskCategory::InitialMtgDelivery,
    TaskCategory::OngoingMtgDelivery,
    TaskCategory::NutritionalAssessment,
    TaskCategory::SpeakToMember,
    TaskCategory::TarApproval,
    TaskCategory::ReauthNotSubmitted,
];

/// Rendering options beyond the processed data itself.
pub struct ReportOptions {
    /// Timestamp shown in the summary banner.
    pub generated_at: NaiveDateTime,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            generated_at: Local::now().naive_local(),
        }
    }
}

/// Render the full report and write it to `path`.
pub fn write_report(
    path: &Path,
    processed: &ProcessedReferrals,
    options: &ReportOptions,
) -> Result<()> {
    let mut workbook = build_workbook(processed, options)?;
    workbook
        .save(path)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(())
}

/// Render the full report into an in-memory XLSX buffer.
pub fn report_bytes(processed: &ProcessedReferrals, options: &ReportOptions) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(processed, options)?;
    let buffer = workbook
        .save_to_buffer()
        .context("failed to serialize report workbook")?;
    Ok(buffer)
}

fn build_workbook(processed: &ProcessedReferrals, options: &ReportOptions) -> Result<Workbook> {
    let styles = SheetStyles::new();
    let mut workbook = Workbook::new();

    add_overview_sheet(&mut workbook, processed, &styles)?;
    add_summary_sheet(&mut workbook, &processed.summary, options, &styles)?;
    for category in SUBSET_SHEET_ORDER {
        add_subset_sheet(&mut workbook, processed, category, &styles)?;
    }
    Ok(workbook)
}

fn add_overview_sheet(
    workbook: &mut Workbook,
    processed: &ProcessedReferrals,
    styles: &SheetStyles,
) -> Result<()> {
    let all_rows: Vec<usize> = (0..processed.table.height()).collect();
    let grid = grid_from_frame(&processed.table.data, &all_rows)?;
    add_table_sheet(workbook, OVERVIEW_SHEET, &grid, styles)
}

fn add_subset_sheet(
    workbook: &mut Workbook,
    processed: &ProcessedReferrals,
    category: TaskCategory,
    styles: &SheetStyles,
) -> Result<()> {
    let rows = processed
        .subsets
        .iter()
        .find(|subset| subset.category == category)
        .map(|subset| subset.rows.as_slice())
        .unwrap_or(&[]);
    let grid = grid_from_frame(&processed.table.data, rows)?;
    add_table_sheet(workbook, category.sheet_name(), &grid, styles)
}

/// Full-width table sheet: styled header at row 0, frozen header, filter
/// over the used range.
fn add_table_sheet(
    workbook: &mut Workbook,
    name: &str,
    grid: &CellGrid,
    styles: &SheetStyles,
) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(name)?;
    write_grid(sheet, grid, styles, 0)?;
    sheet.set_freeze_panes(1, 0)?;
    if grid.column_count() > 0 {
        let last_row = grid.rows.len() as u32;
        let last_col = (grid.column_count() - 1) as u16;
        sheet.autofilter(0, 0, last_row, last_col)?;
    }
    debug!(sheet = name, rows = grid.rows.len(), "sheet written");
    Ok(())
}

/// Summary sheet: merged banner row, blank spacer, then the counts table.
fn add_summary_sheet(
    workbook: &mut Workbook,
    summary: &[SummaryRow],
    options: &ReportOptions,
    styles: &SheetStyles,
) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(SUMMARY_SHEET)?;

    let banner = format!(
        "Data is based on: {}",
        options.generated_at.format("%Y-%m-%d %I:%M %p")
    );
    sheet.merge_range(0, 0, 0, 2, &banner, &styles.banner)?;

    let grid = summary_grid(summary);
    write_grid(sheet, &grid, styles, 2)?;

    // The definition column carries embedded newlines for the payer windows.
    for (index, row) in summary.iter().enumerate() {
        let sheet_row = 3 + index as u32;
        sheet.write_with_format(sheet_row, 2, row.definition(), &styles.wrapped)?;
    }

    sheet.set_freeze_panes(1, 0)?;
    debug!(sheet = SUMMARY_SHEET, rows = summary.len(), "sheet written");
    Ok(())
}

fn summary_grid(summary: &[SummaryRow]) -> CellGrid {
    let headers = vec![
        "Category".to_string(),
        "Referrals".to_string(),
        "Definition".to_string(),
    ];
    let rows = summary
        .iter()
        .map(|row| {
            vec![
                CellValue::Text(row.display_name().to_string()),
                CellValue::Number(row.count as f64),
                CellValue::Text(row.definition().to_string()),
            ]
        })
        .collect();
    CellGrid::new(headers, rows)
}
