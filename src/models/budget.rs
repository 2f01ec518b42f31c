use serde::{Deserialize, Serialize};

/// Global maximum-price ceiling. Single instance, last-write-wins.
///
/// `None` or a non-positive value means "no limit"; the interpretation
/// happens at read time in [`crate::services::budget::within_budget`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BudgetSettings {
    pub max_budget: Option<f64>,
}
