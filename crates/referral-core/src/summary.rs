//! Pending-tasks summary aggregation.

use referral_model::SummaryRow;

use crate::rules::Classification;

/// Pair each classification subset with its count, preserving the fixed
/// category order. Counts are plain cardinalities; a row in two subsets
/// contributes to both.
pub fn summarize(subsets: &[Classification]) -> Vec<SummaryRow> {
    subsets
        .iter()
        .map(|subset| SummaryRow::new(subset.category, subset.count()))
        .collect()
}
