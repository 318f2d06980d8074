//! Typed access to the normalized referral frame.

use chrono::NaiveDate;
use polars::prelude::{AnyValue, DataFrame};

use referral_ingest::{any_to_f64, any_to_i64, any_to_string};
use referral_model::columns::DAYS_IN_CURRENT_ACTIVITY;

use crate::dates::parse_flexible_date;

/// The normalized referral table.
///
/// Every column carries a uniform type: date columns are canonical ISO
/// `YYYY-MM-DD` strings (empty = missing), counters are `Float64`, the
/// derived day count is nullable `Int64`, and everything else is `String`
/// or `Float64` per the probe heuristic. Column order matches the source
/// export.
#[derive(Debug, Clone)]
pub struct NormalizedTable {
    pub data: DataFrame,
}

impl NormalizedTable {
    pub fn new(data: DataFrame) -> Self {
        Self { data }
    }

    pub fn height(&self) -> usize {
        self.data.height()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    fn value(&self, column: &str, row: usize) -> AnyValue<'_> {
        match self.data.column(column) {
            Ok(series) => series.get(row).unwrap_or(AnyValue::Null),
            Err(_) => AnyValue::Null,
        }
    }

    /// Cell as a string; nulls become empty strings.
    pub fn text(&self, column: &str, row: usize) -> String {
        any_to_string(self.value(column, row))
    }

    /// Cell as a number, `None` when null or non-numeric.
    pub fn number(&self, column: &str, row: usize) -> Option<f64> {
        any_to_f64(self.value(column, row))
    }

    /// Cell of a normalized date column, `None` when the marker is empty.
    pub fn date(&self, column: &str, row: usize) -> Option<NaiveDate> {
        parse_flexible_date(&self.text(column, row))
    }

    /// Derived elapsed days in the current activity; null iff the last
    /// activity date was missing. May be negative for future-dated activity.
    pub fn days_in_activity(&self, row: usize) -> Option<i64> {
        any_to_i64(self.value(DAYS_IN_CURRENT_ACTIVITY, row))
    }
}
