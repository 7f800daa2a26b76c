//! Budget arithmetic
//!
//! The computational core: totals, remaining budget, status classification,
//! recommended savings, suggested allocation, and feasibility. Every function
//! here is pure and total over its inputs; callers are expected to supply
//! non-negative income and validated expenses, and nothing re-checks that.

use crate::models::{
    BudgetStatus, CategoryAllocation, Expense, ExpenseCategory, FeasibilityReport, StatusReport,
};

/// Income below this gets the reduced savings rate
const LOW_INCOME_THRESHOLD: f64 = 2000.0;
/// Income above this gets the boosted savings rate
const HIGH_INCOME_THRESHOLD: f64 = 5000.0;

const LOW_INCOME_SAVINGS_RATE: f64 = 0.10;
const DEFAULT_SAVINGS_RATE: f64 = 0.20;
const HIGH_INCOME_SAVINGS_RATE: f64 = 0.25;

/// Suggested allocation percentages; rates sum to 1.0
const ALLOCATION_TABLE: [(&str, f64); 7] = [
    ("Housing", 0.30),
    ("Utilities", 0.10),
    ("Food", 0.15),
    ("Transportation", 0.10),
    ("Savings", 0.20),
    ("Entertainment", 0.05),
    ("Other", 0.10),
];

/// Sum of all expense amounts; empty list sums to zero
pub fn total_expenses(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Sum of amounts for one category
pub fn total_by_category(expenses: &[Expense], category: ExpenseCategory) -> f64 {
    expenses
        .iter()
        .filter(|e| e.category == category)
        .map(|e| e.amount)
        .sum()
}

/// Income minus total expenses; may be negative
pub fn remaining_budget(income: f64, expenses: &[Expense]) -> f64 {
    income - total_expenses(expenses)
}

/// Classify the remaining budget by sign
///
/// The balanced branch compares against exactly 0.0: decimal amounts whose
/// sum is mathematically zero but not bit-exact zero land in the adjacent
/// branch instead.
pub fn classify_budget(remaining: f64) -> StatusReport {
    if remaining > 0.0 {
        StatusReport {
            status: BudgetStatus::Positive,
            message: format!(
                "You have ${:.2} remaining for savings or additional expenses.",
                remaining
            ),
        }
    } else if remaining == 0.0 {
        StatusReport {
            status: BudgetStatus::Warning,
            message: "Your budget is exactly balanced. Consider allocating more to savings."
                .to_string(),
        }
    } else {
        StatusReport {
            status: BudgetStatus::Negative,
            message: format!(
                "You're over budget by ${:.2}. Consider reducing expenses.",
                remaining.abs()
            ),
        }
    }
}

/// Recommended monthly savings based on a tiered rate
///
/// Incomes of exactly 2000 or 5000 take the default 20% tier.
pub fn recommended_savings(income: f64) -> f64 {
    let rate = if income < LOW_INCOME_THRESHOLD {
        LOW_INCOME_SAVINGS_RATE
    } else if income > HIGH_INCOME_THRESHOLD {
        HIGH_INCOME_SAVINGS_RATE
    } else {
        DEFAULT_SAVINGS_RATE
    };

    income * rate
}

/// Suggested allocation of income across standard buckets
///
/// Independent of actual expenses; entries are returned in table order.
pub fn suggested_allocation(income: f64) -> Vec<CategoryAllocation> {
    ALLOCATION_TABLE
        .iter()
        .map(|&(category, rate)| CategoryAllocation {
            category,
            rate,
            amount: income * rate,
        })
        .collect()
}

/// Check whether income covers the fixed expenses alone
pub fn validate_feasibility(income: f64, expenses: &[Expense]) -> FeasibilityReport {
    let essential = total_by_category(expenses, ExpenseCategory::Fixed);

    if essential > income {
        FeasibilityReport {
            is_valid: false,
            message: format!(
                "Your essential expenses (${:.2}) exceed your income (${:.2}).",
                essential, income
            ),
        }
    } else {
        FeasibilityReport {
            is_valid: true,
            message: "Your budget appears feasible.".to_string(),
        }
    }
}

/// Derived totals for one income/expenses snapshot
///
/// The page root recomputes this after every mutation; the summary view and
/// the one-shot CLI render from it.
#[derive(Debug, Clone)]
pub struct BudgetOverview {
    pub income: f64,
    pub total_expenses: f64,
    pub fixed_expenses: f64,
    pub variable_expenses: f64,
    pub remaining: f64,
    pub status: StatusReport,
}

impl BudgetOverview {
    /// Fraction of income consumed by expenses, as a percentage capped at 100
    ///
    /// Used for the budget-used gauge; zero income renders as 0%.
    pub fn used_percentage(&self) -> f64 {
        if self.income > 0.0 {
            ((self.total_expenses / self.income) * 100.0).min(100.0)
        } else {
            0.0
        }
    }

    /// Percentage of income taken by one category; zero income renders as 0%
    pub fn category_percentage(&self, category: ExpenseCategory) -> f64 {
        let amount = match category {
            ExpenseCategory::Fixed => self.fixed_expenses,
            ExpenseCategory::Variable => self.variable_expenses,
        };
        if self.income > 0.0 {
            (amount / self.income) * 100.0
        } else {
            0.0
        }
    }
}

/// Compute the full overview for an income/expenses snapshot
pub fn overview(income: f64, expenses: &[Expense]) -> BudgetOverview {
    let total = total_expenses(expenses);
    let remaining = income - total;

    BudgetOverview {
        income,
        total_expenses: total,
        fixed_expenses: total_by_category(expenses, ExpenseCategory::Fixed),
        variable_expenses: total_by_category(expenses, ExpenseCategory::Variable),
        remaining,
        status: classify_budget(remaining),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(name: &str, amount: f64, category: ExpenseCategory) -> Expense {
        Expense::new(name, amount, category)
    }

    fn sample_expenses() -> Vec<Expense> {
        vec![
            expense("Rent", 1200.0, ExpenseCategory::Fixed),
            expense("Insurance", 150.0, ExpenseCategory::Fixed),
            expense("Groceries", 400.0, ExpenseCategory::Variable),
            expense("Dining Out", 250.0, ExpenseCategory::Variable),
        ]
    }

    #[test]
    fn test_total_expenses() {
        assert_eq!(total_expenses(&[]), 0.0);
        assert_eq!(total_expenses(&sample_expenses()), 2000.0);
    }

    #[test]
    fn test_total_by_category() {
        let expenses = sample_expenses();
        assert_eq!(total_by_category(&expenses, ExpenseCategory::Fixed), 1350.0);
        assert_eq!(
            total_by_category(&expenses, ExpenseCategory::Variable),
            650.0
        );
    }

    #[test]
    fn test_category_totals_partition_the_sum() {
        let expenses = sample_expenses();
        let fixed = total_by_category(&expenses, ExpenseCategory::Fixed);
        let variable = total_by_category(&expenses, ExpenseCategory::Variable);
        assert_eq!(total_expenses(&expenses), fixed + variable);
    }

    #[test]
    fn test_remaining_budget() {
        assert_eq!(remaining_budget(3000.0, &sample_expenses()), 1000.0);
        assert_eq!(remaining_budget(1500.0, &sample_expenses()), -500.0);
    }

    #[test]
    fn test_remaining_budget_empty_list_is_income() {
        assert_eq!(remaining_budget(0.0, &[]), 0.0);
        assert_eq!(remaining_budget(2500.0, &[]), 2500.0);
        assert_eq!(remaining_budget(-100.0, &[]), -100.0);
    }

    #[test]
    fn test_classify_positive() {
        let report = classify_budget(350.0);
        assert_eq!(report.status, BudgetStatus::Positive);
        assert!(report.message.contains("$350.00 remaining"));
    }

    #[test]
    fn test_classify_balanced() {
        let report = classify_budget(0.0);
        assert_eq!(report.status, BudgetStatus::Warning);
        assert!(report.message.contains("exactly balanced"));
    }

    #[test]
    fn test_classify_negative() {
        let report = classify_budget(-200.0);
        assert_eq!(report.status, BudgetStatus::Negative);
        assert!(report.message.contains("over budget by $200.00"));
    }

    #[test]
    fn test_classify_near_zero_is_not_balanced() {
        // Exact equality: a residual from decimal arithmetic does not count
        // as balanced.
        let residual = 0.1 + 0.2 - 0.3;
        assert!(residual != 0.0);
        assert_eq!(classify_budget(residual).status, BudgetStatus::Positive);
    }

    #[test]
    fn test_recommended_savings_tiers() {
        assert_eq!(recommended_savings(1999.0), 199.9);
        assert_eq!(recommended_savings(2000.0), 400.0);
        assert_eq!(recommended_savings(5000.0), 1000.0);
        assert_eq!(recommended_savings(5001.0), 1250.25);
    }

    #[test]
    fn test_suggested_allocation_table() {
        let allocations = suggested_allocation(1000.0);
        let expected = [
            ("Housing", 300.0),
            ("Utilities", 100.0),
            ("Food", 150.0),
            ("Transportation", 100.0),
            ("Savings", 200.0),
            ("Entertainment", 50.0),
            ("Other", 100.0),
        ];

        assert_eq!(allocations.len(), expected.len());
        for (allocation, (category, amount)) in allocations.iter().zip(expected) {
            assert_eq!(allocation.category, category);
            assert_eq!(allocation.amount, amount);
        }

        let total: f64 = allocations.iter().map(|a| a.amount).sum();
        assert_eq!(total, 1000.0);
    }

    #[test]
    fn test_allocation_rates_sum_to_one() {
        let total_rate: f64 = ALLOCATION_TABLE.iter().map(|&(_, rate)| rate).sum();
        assert!((total_rate - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_feasibility_valid() {
        let expenses = vec![
            expense("Rent", 600.0, ExpenseCategory::Fixed),
            expense("Fun", 500.0, ExpenseCategory::Variable),
        ];
        let report = validate_feasibility(1000.0, &expenses);
        assert!(report.is_valid);
        assert_eq!(report.message, "Your budget appears feasible.");
    }

    #[test]
    fn test_feasibility_invalid() {
        let expenses = vec![expense("Rent", 1200.0, ExpenseCategory::Fixed)];
        let report = validate_feasibility(1000.0, &expenses);
        assert!(!report.is_valid);
        assert!(report.message.contains("$1200.00"));
        assert!(report.message.contains("$1000.00"));
    }

    #[test]
    fn test_feasibility_ignores_variable_expenses() {
        let expenses = vec![expense("Fun", 5000.0, ExpenseCategory::Variable)];
        assert!(validate_feasibility(1000.0, &expenses).is_valid);
    }

    #[test]
    fn test_overview_over_budget() {
        let expenses = vec![expense("Rent", 1200.0, ExpenseCategory::Fixed)];
        let overview = overview(1000.0, &expenses);

        assert_eq!(overview.total_expenses, 1200.0);
        assert_eq!(overview.fixed_expenses, 1200.0);
        assert_eq!(overview.variable_expenses, 0.0);
        assert_eq!(overview.remaining, -200.0);
        assert_eq!(overview.status.status, BudgetStatus::Negative);
        assert!(overview.status.message.contains("200.00"));
    }

    #[test]
    fn test_used_percentage_caps_at_100() {
        let expenses = vec![expense("Rent", 1500.0, ExpenseCategory::Fixed)];
        let overview = overview(1000.0, &expenses);
        assert_eq!(overview.used_percentage(), 100.0);
    }

    #[test]
    fn test_percentages_with_zero_income() {
        let expenses = vec![expense("Rent", 100.0, ExpenseCategory::Fixed)];
        let overview = overview(0.0, &expenses);
        assert_eq!(overview.used_percentage(), 0.0);
        assert_eq!(overview.category_percentage(ExpenseCategory::Fixed), 0.0);
    }
}
