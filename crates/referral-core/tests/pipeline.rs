//! End-to-end pipeline scenarios over small hand-built tables.

mod common;

use common::{reference_date, referral_table};
use referral_core::process_referrals;
use referral_model::TaskCategory;
use referral_model::columns::{
    BOXES_SENT, LAST_ACTIVITY_DATE, PAYER_ORGANIZATION, PENDING_TASK, REAUTH_STATUS,
    REFERRAL_START_DATE,
};

#[test]
fn mtg_row_lands_in_exactly_one_delivery_subset() {
    // Ten days pending; row 0 has no box sent yet, row 1 has two.
    let table = referral_table(&[
        &[
            (PENDING_TASK, "MTG Box Delivery"),
            (LAST_ACTIVITY_DATE, "2025-06-08"),
            (BOXES_SENT, "0"),
        ],
        &[
            (PENDING_TASK, "MTG Box Delivery"),
            (LAST_ACTIVITY_DATE, "2025-06-08"),
            (BOXES_SENT, "2"),
        ],
    ]);
    let processed = process_referrals(&table, reference_date()).unwrap();

    let rows_for = |category: TaskCategory| {
        processed
            .subsets
            .iter()
            .find(|subset| subset.category == category)
            .unwrap()
            .rows
            .clone()
    };
    assert_eq!(rows_for(TaskCategory::InitialMtgDelivery), vec![0]);
    assert_eq!(rows_for(TaskCategory::OngoingMtgDelivery), vec![1]);
}

#[test]
fn php_reauth_scenario_flags_at_five_months() {
    let table = referral_table(&[&[
        (PAYER_ORGANIZATION, "PHP"),
        (REAUTH_STATUS, "NA"),
        (PENDING_TASK, "Speak to Member"),
        (REFERRAL_START_DATE, "2025-01-18"),
    ]]);
    let processed = process_referrals(&table, reference_date()).unwrap();

    let reauth = processed
        .subsets
        .iter()
        .find(|subset| subset.category == TaskCategory::ReauthNotSubmitted)
        .unwrap();
    assert_eq!(reauth.rows, vec![0]);
}

#[test]
fn subsets_overlap_when_a_row_matches_two_rules() {
    // One row flagged both for TAR approval and reauthorization.
    let table = referral_table(&[&[
        (PENDING_TASK, "TAR Approval"),
        (LAST_ACTIVITY_DATE, "2025-06-10"),
        (PAYER_ORGANIZATION, "CCHP"),
        (REAUTH_STATUS, "NA"),
        (REFERRAL_START_DATE, "2025-01-01"),
    ]]);
    let processed = process_referrals(&table, reference_date()).unwrap();

    let counts: Vec<usize> = processed.summary.iter().map(|row| row.count).collect();
    assert_eq!(counts, vec![0, 0, 0, 0, 1, 0, 1]);
}

#[test]
fn summary_keeps_the_fixed_category_order() {
    let table = referral_table(&[&[]]);
    let processed = process_referrals(&table, reference_date()).unwrap();

    let categories: Vec<TaskCategory> =
        processed.summary.iter().map(|row| row.category).collect();
    assert_eq!(categories, TaskCategory::ALL.to_vec());
    assert!(processed.summary.iter().all(|row| row.count == 0));
}

#[test]
fn summary_counts_match_subset_sizes() {
    let table = referral_table(&[
        &[
            (PENDING_TASK, "Speak to Member"),
            (LAST_ACTIVITY_DATE, "2025-06-04"),
        ],
        &[
            (PENDING_TASK, "Speak to Member"),
            (LAST_ACTIVITY_DATE, "2025-05-01"),
        ],
        &[(PENDING_TASK, "Speak to Member")],
    ]);
    let processed = process_referrals(&table, reference_date()).unwrap();

    for (summary, subset) in processed.summary.iter().zip(&processed.subsets) {
        assert_eq!(summary.category, subset.category);
        assert_eq!(summary.count, subset.count());
    }
    let speak = &processed.subsets[3];
    assert_eq!(speak.category, TaskCategory::SpeakToMember);
    assert_eq!(speak.rows, vec![0, 1]);
}

#[test]
fn total_records_reports_the_table_height() {
    let table = referral_table(&[&[], &[], &[]]);
    let processed = process_referrals(&table, reference_date()).unwrap();
    assert_eq!(processed.total_records(), 3);
    assert_eq!(processed.reference_date, reference_date());
}
