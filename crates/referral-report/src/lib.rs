//! Styled XLSX report generation for processed referrals.
//!
//! One workbook per run: the full normalized table, a pending-tasks
//! summary with a generation banner, and one sheet per classification
//! subset. Headers are bold on a light-blue fill, the first row is frozen
//! everywhere, and table sheets carry an auto-filter.

mod sheet;
mod style;
mod workbook;

pub use sheet::{grid_from_frame, CellGrid, CellValue};
pub use style::SheetStyles;
pub use workbook::{
    report_bytes, write_report, ReportOptions, OVERVIEW_SHEET, SUBSET_SHEET_ORDER, SUMMARY_SHEET,
};
