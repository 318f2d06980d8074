//! Task-status predicates over the normalized referral table.
//!
//! Six pure boolean row filters plus the tri-state reauthorization rule in
//! [`crate::reauth`]. Pending-task comparisons are case-sensitive; only the
//! CCHP counseling rule uppercases the payer (without trimming) and only
//! the reauthorization rule trims it. That asymmetry is part of the
//! business rules and must not be "fixed" here.
//!
//! A null day count fails every `days >= N` comparison, so rows without a
//! last activity date never flag on elapsed time.

use chrono::{Days, NaiveDate};

use referral_model::TaskCategory;
use referral_model::columns::{
    BOXES_SENT, COUNSELING_SESSIONS, PAYER_ORGANIZATION, PENDING_TASK, REFERRAL_CREATED_DATE,
};

use crate::frame::NormalizedTable;
use crate::reauth::{ReauthAssessment, assess_reauth};

/// Rows matching one classification rule, in row order.
///
/// Subsets are not disjoint; a row may appear in several.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: TaskCategory,
    pub rows: Vec<usize>,
}

impl Classification {
    pub fn count(&self) -> usize {
        self.rows.len()
    }
}

/// Initial MTG box pending: delivery task, 4+ days elapsed, no box sent yet.
pub fn initial_mtg_pending(table: &NormalizedTable, row: usize) -> bool {
    table.text(PENDING_TASK, row) == "MTG Box Delivery"
        && table.days_in_activity(row).is_some_and(|days| days >= 4)
        && table.number(BOXES_SENT, row) == Some(0.0)
}

/// Ongoing MTG box pending: delivery task, 8+ days elapsed, at least one box
/// already sent.
pub fn ongoing_mtg_pending(table: &NormalizedTable, row: usize) -> bool {
    table.text(PENDING_TASK, row) == "MTG Box Delivery"
        && table.days_in_activity(row).is_some_and(|days| days >= 8)
        && table.number(BOXES_SENT, row).is_some_and(|sent| sent != 0.0)
}

/// Nutritional assessment pending for 14+ days.
pub fn nutritional_assessment_pending(table: &NormalizedTable, row: usize) -> bool {
    table.text(PENDING_TASK, row) == "Nutritional assessment"
        && table.days_in_activity(row).is_some_and(|days| days >= 14)
}

/// Speak-to-member pending for 14+ days.
pub fn speak_to_member_pending(table: &NormalizedTable, row: usize) -> bool {
    table.text(PENDING_TASK, row) == "Speak to Member"
        && table.days_in_activity(row).is_some_and(|days| days >= 14)
}

/// TAR approval pending for 8+ days.
pub fn tar_approval_pending(table: &NormalizedTable, row: usize) -> bool {
    table.text(PENDING_TASK, row) == "TAR Approval"
        && table.days_in_activity(row).is_some_and(|days| days >= 8)
}

/// CCHP nutrition counseling pending: CCHP referral created 49+ days before
/// the reference date with at most one counseling session and a task that
/// is not discontinued.
///
/// The payer comparison uppercases the raw cell without trimming; a missing
/// created date excludes the row.
pub fn cchp_counseling_pending(
    table: &NormalizedTable,
    row: usize,
    reference_date: NaiveDate,
) -> bool {
    if table.text(PAYER_ORGANIZATION, row).to_uppercase() != "CCHP" {
        return false;
    }
    let Some(cutoff) = reference_date.checked_sub_days(Days::new(49)) else {
        return false;
    };
    let created_in_window = table
        .date(REFERRAL_CREATED_DATE, row)
        .is_some_and(|created| created <= cutoff);
    let sessions = table.number(COUNSELING_SESSIONS, row).unwrap_or(0.0);
    created_in_window
        && (sessions == 0.0 || sessions == 1.0)
        && !table
            .text(PENDING_TASK, row)
            .to_lowercase()
            .contains("discontinued")
}

/// Evaluate every rule over the table, producing the seven subsets in the
/// fixed summary order.
pub fn classify(table: &NormalizedTable, reference_date: NaiveDate) -> Vec<Classification> {
    TaskCategory::ALL
        .iter()
        .map(|&category| Classification {
            category,
            rows: matching_rows(table, category, reference_date),
        })
        .collect()
}

fn matching_rows(
    table: &NormalizedTable,
    category: TaskCategory,
    reference_date: NaiveDate,
) -> Vec<usize> {
    (0..table.height())
        .filter(|&row| match category {
            TaskCategory::InitialMtgDelivery => initial_mtg_pending(table, row),
            TaskCategory::OngoingMtgDelivery => ongoing_mtg_pending(table, row),
            TaskCategory::NutritionalAssessment => nutritional_assessment_pending(table, row),
            TaskCategory::SpeakToMember => speak_to_member_pending(table, row),
            TaskCategory::TarApproval => tar_approval_pending(table, row),
            TaskCategory::NutritionCounseling => {
                cchp_counseling_pending(table, row, reference_date)
            }
            TaskCategory::ReauthNotSubmitted => {
                assess_reauth(table, row, reference_date) == ReauthAssessment::Pending
            }
        })
        .collect()
}
