//! Data model for the referral dashboard.
//!
//! Column names of the source export, payer and task-category enums, the
//! summary row shape, and the error taxonomy shared by every crate.

pub mod columns;
pub mod enums;
pub mod error;
pub mod summary;

pub use enums::{PayerOrg, TaskCategory};
pub use error::{ReferralError, Result};
pub use summary::SummaryRow;
