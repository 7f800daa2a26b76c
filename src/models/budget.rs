//! Budget result types
//!
//! Small tagged records produced by the budget arithmetic: the status
//! classification, the feasibility verdict, and the suggested allocation
//! entries. `BudgetData` bundles the raw inputs for one-shot callers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::Expense;

/// The three-way classification of a remaining budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    /// Money left over after expenses
    Positive,
    /// Exactly balanced
    Warning,
    /// Over budget
    Negative,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Warning => write!(f, "warning"),
            Self::Negative => write!(f, "negative"),
        }
    }
}

/// Status classification with a human-readable message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub status: BudgetStatus,
    pub message: String,
}

/// Feasibility verdict: can income cover the fixed expenses alone?
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityReport {
    pub is_valid: bool,
    pub message: String,
}

/// One entry of the suggested allocation table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAllocation {
    /// Allocation bucket name (Housing, Utilities, ...)
    pub category: &'static str,
    /// Fraction of income assigned to this bucket
    pub rate: f64,
    /// Dollar amount: income * rate
    pub amount: f64,
}

/// The raw inputs of a budget calculation
///
/// `savings` is carried for shape compatibility with callers that track a
/// savings figure; none of the arithmetic reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetData {
    pub income: f64,
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub savings: f64,
}

impl BudgetData {
    /// Create a budget from income and expenses
    pub fn new(income: f64, expenses: Vec<Expense>) -> Self {
        Self {
            income,
            expenses,
            savings: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseCategory;

    #[test]
    fn test_status_display() {
        assert_eq!(BudgetStatus::Positive.to_string(), "positive");
        assert_eq!(BudgetStatus::Warning.to_string(), "warning");
        assert_eq!(BudgetStatus::Negative.to_string(), "negative");
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&BudgetStatus::Negative).unwrap();
        assert_eq!(json, "\"negative\"");
    }

    #[test]
    fn test_budget_data_new() {
        let data = BudgetData::new(
            3000.0,
            vec![Expense::new("Rent", 1200.0, ExpenseCategory::Fixed)],
        );
        assert_eq!(data.income, 3000.0);
        assert_eq!(data.expenses.len(), 1);
        assert_eq!(data.savings, 0.0);
    }
}
