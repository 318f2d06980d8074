use serde::{Deserialize, Serialize};

use crate::enums::TaskCategory;

/// One row of the pending-tasks summary: category, subset size, and the
/// fixed definition text. Order is fixed by [`TaskCategory::ALL`] and does
/// not depend on the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub category: TaskCategory,
    pub count: usize,
}

impl SummaryRow {
    pub fn new(category: TaskCategory, count: usize) -> Self {
        Self { category, count }
    }

    pub fn display_name(&self) -> &'static str {
        self.category.display_name()
    }

    pub fn definition(&self) -> &'static str {
        self.category.definition()
    }
}
