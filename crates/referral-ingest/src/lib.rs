//! Referral export ingestion.
//!
//! Reads the uploaded XLSX or CSV export into a raw [`SheetTable`] (header
//! labels trimmed, cell values verbatim) and provides the Polars `AnyValue`
//! helpers the downstream crates share.

pub mod error;
pub mod polars_utils;
pub mod sheet_table;
pub mod xlsx;

pub use error::{IngestError, Result};
pub use polars_utils::{
    any_to_f64, any_to_i64, any_to_string, format_numeric, parse_f64, parse_i64,
};
pub use sheet_table::{SheetTable, normalize_header, read_csv_table, read_sheet_table};
pub use xlsx::read_xlsx_table;
