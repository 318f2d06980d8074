//! Column-structure validation for the referral export.

use referral_ingest::{SheetTable, normalize_header};
use referral_model::columns::REQUIRED_COLUMNS;
use referral_model::{ReferralError, Result};
use tracing::debug;

/// Trim header whitespace, then require every expected column.
///
/// Matching is exact after trimming; no rename guessing or partial matches.
/// On failure the error carries every missing name in required-list order.
/// Rows are never altered.
pub fn validate_columns(table: &SheetTable) -> Result<SheetTable> {
    let headers: Vec<String> = table
        .headers
        .iter()
        .map(|header| normalize_header(header))
        .collect();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| !headers.iter().any(|header| header == *name))
        .map(|name| (*name).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ReferralError::Schema { missing });
    }
    debug!(
        column_count = headers.len(),
        row_count = table.rows.len(),
        "column structure validated"
    );
    Ok(SheetTable::new(headers, table.rows.clone()))
}
