//! Rule evaluation for the referral dashboard.
//!
//! Column validation, type normalization, the seven pending-task
//! predicates, and summary aggregation over one uploaded referral export.

pub mod dates;
pub mod frame;
pub mod normalize;
pub mod pipeline;
pub mod reauth;
pub mod rules;
pub mod summary;
pub mod validate;

pub use dates::{
    add_months_clamped, add_weeks, days_between, format_iso_date, parse_flexible_date,
};
pub use frame::NormalizedTable;
pub use normalize::{TYPE_PROBE_SAMPLE, is_missing_marker, normalize};
pub use pipeline::{ProcessedReferrals, default_reference_date, process_referrals};
pub use reauth::{ReauthAssessment, assess_reauth};
pub use rules::{
    Classification, cchp_counseling_pending, classify, initial_mtg_pending,
    nutritional_assessment_pending, ongoing_mtg_pending, speak_to_member_pending,
    tar_approval_pending,
};
pub use summary::summarize;
pub use validate::validate_columns;
