//! Referral processing pipeline.
//!
//! One synchronous pass: validate → normalize → classify → summarize.
//! Stateless between invocations; the reference date is an explicit
//! parameter so the whole pipeline is deterministic and testable.

use std::time::Instant;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use tracing::{info, info_span};

use referral_ingest::SheetTable;
use referral_model::SummaryRow;

use crate::frame::NormalizedTable;
use crate::normalize::normalize;
use crate::rules::{Classification, classify};
use crate::summary::summarize;
use crate::validate::validate_columns;

/// Everything one processing run produces: the full normalized table, the
/// seven classification subsets, and the summary rows. Handed to the report
/// renderer and discarded after the run.
#[derive(Debug)]
pub struct ProcessedReferrals {
    pub table: NormalizedTable,
    pub subsets: Vec<Classification>,
    pub summary: Vec<SummaryRow>,
    pub reference_date: NaiveDate,
}

impl ProcessedReferrals {
    /// Total referral rows in the overview, independent of classification
    /// overlaps.
    pub fn total_records(&self) -> usize {
        self.table.height()
    }
}

/// Today at local midnight, the default reference date.
pub fn default_reference_date() -> NaiveDate {
    Local::now().date_naive()
}

/// Run the full pipeline over a raw table.
///
/// Schema failures abort before any row is processed; all cell-level
/// coercion failures are recovered to missing markers inside normalization.
pub fn process_referrals(
    table: &SheetTable,
    reference_date: NaiveDate,
) -> Result<ProcessedReferrals> {
    let span = info_span!("process_referrals", reference_date = %reference_date);
    let _guard = span.enter();
    let start = Instant::now();

    let validated = validate_columns(table)?;
    let normalized = normalize(&validated, reference_date)?;
    let subsets = classify(&normalized, reference_date);
    let summary = summarize(&subsets);

    let pending_total: usize = summary.iter().map(|row| row.count).sum();
    info!(
        record_count = normalized.height(),
        pending_total,
        duration_ms = start.elapsed().as_millis(),
        "referrals processed"
    );

    Ok(ProcessedReferrals {
        table: normalized,
        subsets,
        summary,
        reference_date,
    })
}
