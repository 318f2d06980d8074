//! Library components for the referral dashboard CLI.

pub mod logging;
pub mod pipeline;
