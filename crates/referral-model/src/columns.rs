//! Column names of the referral export.
//!
//! The source spreadsheet is an operations export with a fixed header row.
//! Column matching is exact after whitespace trimming; no rename guessing.

/// Payer organization for a referral.
pub const PAYER_ORGANIZATION: &str = "Payer Organization";
/// Member identifier assigned by the care platform.
pub const MEMBER_ID: &str = "Implify Member ID";
/// Date the referral was created.
pub const REFERRAL_CREATED_DATE: &str = "Referral Created Date";
/// Date services under the referral started.
pub const REFERRAL_START_DATE: &str = "Referral Start Date";
/// Date the referral authorization ends.
pub const REFERRAL_END_DATE: &str = "Referral End Date";
/// Description of the most recent completed activity.
pub const LAST_ACTIVITY_COMPLETED: &str = "Last Activity Completed";
/// Date of the most recent activity on the referral.
pub const LAST_ACTIVITY_DATE: &str = "Last Activity Date";
/// The next required workflow action.
pub const PENDING_TASK: &str = "Pending Task/ Next Task";
/// Derived: whole days elapsed since the last activity. Recomputed every run.
pub const DAYS_IN_CURRENT_ACTIVITY: &str = "Day(s) in Current Activity";
/// Date the most recent grocery box was delivered.
pub const LAST_DELIVERED_BOX_DATE: &str = "Date of Last Delivered box";
/// Count of grocery boxes successfully sent.
pub const BOXES_SENT: &str = "Number of Grocery Boxes Successfully Sent";
/// Count of completed nutrition counseling sessions.
pub const COUNSELING_SESSIONS: &str = "Number of Nutrition Counseling Sessions Completed";
/// Reauthorization workflow status ("NA" until submitted).
pub const REAUTH_STATUS: &str = "Re-authorization Status";

/// Every column the export must contain, in source order.
///
/// [`DAYS_IN_CURRENT_ACTIVITY`] is required on input even though the
/// normalizer recomputes it from the reference date.
pub const REQUIRED_COLUMNS: [&str; 29] = [
    PAYER_ORGANIZATION,
    MEMBER_ID,
    "Zip Code",
    "County",
    REFERRAL_CREATED_DATE,
    REFERRAL_START_DATE,
    REFERRAL_END_DATE,
    "ECM Enrollment",
    "Condition",
    "Service Type",
    LAST_ACTIVITY_COMPLETED,
    LAST_ACTIVITY_DATE,
    PENDING_TASK,
    DAYS_IN_CURRENT_ACTIVITY,
    LAST_DELIVERED_BOX_DATE,
    "Box Type",
    BOXES_SENT,
    "Outreach Attempt within 48 Hours of Referral",
    "Number of Outreach Attempts by GGH",
    "Outreach Method",
    COUNSELING_SESSIONS,
    "Need TAR Submission",
    "TAR Submission Status",
    "Claims Submitted",
    "Outstanding Claims: CHW",
    "Outstanding Claims: MTG/MTM",
    "Outstanding Claims: Nutritional Counseling",
    "Ready for Re-authorization",
    REAUTH_STATUS,
];

/// Columns parsed to dates during normalization.
pub const DATE_COLUMNS: [&str; 5] = [
    REFERRAL_START_DATE,
    REFERRAL_CREATED_DATE,
    LAST_ACTIVITY_DATE,
    REFERRAL_END_DATE,
    LAST_DELIVERED_BOX_DATE,
];

/// Columns parsed to numbers during normalization (missing defaults to zero).
pub const NUMERIC_COLUMNS: [&str; 2] = [BOXES_SENT, COUNSELING_SESSIONS];

/// Columns coerced to strings during normalization (never a missing marker).
pub const TEXT_COLUMNS: [&str; 4] = [
    PENDING_TASK,
    PAYER_ORGANIZATION,
    REAUTH_STATUS,
    LAST_ACTIVITY_COMPLETED,
];
