//! Subcommand entry points.

use anyhow::Result;
use comfy_table::Table;

use referral_cli::pipeline::{run_report, ReportRequest, ReportResult};
use referral_core::default_reference_date;
use referral_model::columns::{
    DATE_COLUMNS, DAYS_IN_CURRENT_ACTIVITY, NUMERIC_COLUMNS, REQUIRED_COLUMNS,
};

use crate::cli::ReportArgs;
use crate::summary::apply_table_style;

pub fn run_report_command(args: &ReportArgs) -> Result<ReportResult> {
    let request = ReportRequest {
        input: args.input.clone(),
        output: args.output.clone(),
        reference_date: args.as_of.unwrap_or_else(default_reference_date),
        dry_run: args.dry_run,
    };
    run_report(&request)
}

/// Print the required export columns with their normalized types.
pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["#", "Column", "Type"]);
    apply_table_style(&mut table);
    for (index, name) in REQUIRED_COLUMNS.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            (*name).to_string(),
            column_type(name).to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn column_type(name: &str) -> &'static str {
    if name == DAYS_IN_CURRENT_ACTIVITY {
        "number (recomputed)"
    } else if DATE_COLUMNS.contains(&name) {
        "date"
    } else if NUMERIC_COLUMNS.contains(&name) {
        "number"
    } else {
        "text"
    }
}
