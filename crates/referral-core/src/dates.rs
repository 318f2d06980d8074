//! Date parsing and window arithmetic for referral rules.
//!
//! The export carries dates in whatever shape the upstream system produced:
//! ISO dates, ISO datetimes, or US-style `m/d/Y` variants. Parsing is best
//! effort; anything unrecognized becomes the missing marker upstream.

use chrono::{Days, Months, NaiveDate, NaiveDateTime};

/// Canonical rendering of a normalized date cell.
pub const ISO_DATE: &str = "%Y-%m-%d";

const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%m-%d-%Y", "%m/%d/%y"];

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parse a raw date cell, trying date formats first, then datetimes.
///
/// Returns `None` for empty or unrecognized values.
pub fn parse_flexible_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    None
}

/// Render a date in the canonical normalized form.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}

/// Signed whole days from `from` to `to` (`to - from`).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// `date + weeks * 7 days`.
pub fn add_weeks(date: NaiveDate, weeks: u64) -> NaiveDate {
    date.checked_add_days(Days::new(weeks * 7)).unwrap_or(date)
}

/// `date + months` calendar months, day-of-month clamped to the target
/// month's last day (Jan 31 + 5 months = Jun 30).
pub fn add_months_clamped(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}
