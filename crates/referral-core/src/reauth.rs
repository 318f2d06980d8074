//! Reauthorization-due assessment.
//!
//! Unlike the other rules this one needs per-row branching on the payer
//! organization, and it is written as a total function: every row yields an
//! explicit [`ReauthAssessment`] instead of relying on swallowed evaluation
//! errors. Missing-data cases surface as `Indeterminate`, which classifies
//! as not due (never over-flag) but stays visible to callers and tests.

use chrono::NaiveDate;

use referral_model::PayerOrg;
use referral_model::columns::{
    LAST_ACTIVITY_COMPLETED, PAYER_ORGANIZATION, PENDING_TASK, REAUTH_STATUS,
    REFERRAL_START_DATE,
};

use crate::dates::{add_months_clamped, add_weeks};
use crate::frame::NormalizedTable;

/// Outcome of the reauthorization rule for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReauthAssessment {
    /// The payer's reauthorization window has elapsed since referral start.
    Pending,
    /// Reauthorization is not due (submitted already, discontinued,
    /// approved, window not yet reached, or no window defined for the payer).
    NotPending,
    /// The referral start date is missing, so the window cannot be
    /// evaluated. Treated as not due.
    Indeterminate,
}

impl ReauthAssessment {
    pub fn is_pending(self) -> bool {
        self == Self::Pending
    }
}

/// Assess whether reauthorization is due for `row` as of `reference_date`.
///
/// Gate conditions, in order: the reauthorization status (trimmed,
/// uppercased) must be `"NA"`; the pending task (lowercased, untrimmed)
/// must not be a discontinued marker; the last completed activity (trimmed,
/// lowercased) must not be `"reauthorization approved"`. Then the payer
/// window applies: CCHP 11 weeks, CCAH 15 weeks, PHP 5 calendar months
/// (day clamped), inclusive at the threshold day; other payers never flag.
pub fn assess_reauth(
    table: &NormalizedTable,
    row: usize,
    reference_date: NaiveDate,
) -> ReauthAssessment {
    if table.text(REAUTH_STATUS, row).trim().to_uppercase() != "NA" {
        return ReauthAssessment::NotPending;
    }
    let task = table.text(PENDING_TASK, row).to_lowercase();
    if task == "services discontinued" || task == "service discontinued" {
        return ReauthAssessment::NotPending;
    }
    if table
        .text(LAST_ACTIVITY_COMPLETED, row)
        .trim()
        .to_lowercase()
        == "reauthorization approved"
    {
        return ReauthAssessment::NotPending;
    }
    let Some(start_date) = table.date(REFERRAL_START_DATE, row) else {
        return ReauthAssessment::Indeterminate;
    };
    let due_date = match PayerOrg::parse(&table.text(PAYER_ORGANIZATION, row)) {
        PayerOrg::Cchp => add_weeks(start_date, 11),
        PayerOrg::Ccah => add_weeks(start_date, 15),
        PayerOrg::Php => add_months_clamped(start_date, 5),
        PayerOrg::Other => return ReauthAssessment::NotPending,
    };
    if reference_date >= due_date {
        ReauthAssessment::Pending
    } else {
        ReauthAssessment::NotPending
    }
}
