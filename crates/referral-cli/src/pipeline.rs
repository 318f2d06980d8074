//! The ingest → process → render pipeline behind the `report` command.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, info_span};

use referral_core::process_referrals;
use referral_ingest::read_sheet_table;
use referral_model::SummaryRow;
use referral_report::{write_report, ReportOptions};

/// One requested report run.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Referral export to read (CSV or XLSX).
    pub input: PathBuf,
    /// Workbook destination; defaults to a timestamped name next to the
    /// input.
    pub output: Option<PathBuf>,
    /// Reference date for every elapsed-time rule.
    pub reference_date: NaiveDate,
    /// Classify and summarize without writing the workbook.
    pub dry_run: bool,
}

/// What a report run produced, for the terminal summary.
#[derive(Debug)]
pub struct ReportResult {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub reference_date: NaiveDate,
    pub total_records: usize,
    pub summary: Vec<SummaryRow>,
}

/// Run the full report pipeline.
pub fn run_report(request: &ReportRequest) -> Result<ReportResult> {
    let ingest_span = info_span!("ingest", input = %request.input.display());
    let ingest_start = Instant::now();
    let table = ingest_span.in_scope(|| {
        read_sheet_table(&request.input)
            .with_context(|| format!("failed to read {}", request.input.display()))
    })?;
    info!(
        rows = table.rows.len(),
        columns = table.headers.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "input loaded"
    );

    let processed = process_referrals(&table, request.reference_date)?;

    let output = if request.dry_run {
        None
    } else {
        let options = ReportOptions::default();
        let path = request
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(request, &options));
        let render_span = info_span!("render", output = %path.display());
        let render_start = Instant::now();
        render_span.in_scope(|| write_report(&path, &processed, &options))?;
        info!(
            output = %path.display(),
            duration_ms = render_start.elapsed().as_millis(),
            "report written"
        );
        Some(path)
    };

    Ok(ReportResult {
        input: request.input.clone(),
        output,
        reference_date: request.reference_date,
        total_records: processed.total_records(),
        summary: processed.summary,
    })
}

/// Timestamped workbook name in the input's directory, matching the name
/// the dashboard download uses.
fn default_output_path(request: &ReportRequest, options: &ReportOptions) -> PathBuf {
    let name = format!(
        "referral_dashboard_{}.xlsx",
        options.generated_at.format("%Y%m%d_%H%M")
    );
    request
        .input
        .parent()
        .map_or_else(|| PathBuf::from(&name), |dir| dir.join(&name))
}
