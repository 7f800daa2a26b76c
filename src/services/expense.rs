//! Expense list editing
//!
//! UI-independent logic behind the expense editor: draft validation, list
//! append/removal, and the lenient income parser. The list itself is owned
//! by the page root; these functions are the only mutations it performs.

use crate::models::{Expense, ExpenseCategory, ExpenseId, ExpenseValidationError};

/// A draft expense as entered in a form, before validation
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    /// Raw name input
    pub name: String,
    /// Raw amount input, as typed
    pub amount: String,
    /// Selected category
    pub category: ExpenseCategory,
}

impl ExpenseDraft {
    /// Create an empty draft with the given starting category
    pub fn with_category(category: ExpenseCategory) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }

    /// Validate the draft and build an expense from it
    ///
    /// Rejects an empty or whitespace-only name, an amount that does not
    /// parse as a finite number, and an amount of zero or less. The
    /// resulting expense carries a fresh id and the trimmed name.
    pub fn validate(&self) -> Result<Expense, ExpenseValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }

        let raw = self.amount.trim();
        let raw = raw.strip_prefix('$').unwrap_or(raw);
        let amount: f64 = raw
            .parse()
            .map_err(|_| ExpenseValidationError::InvalidAmount)?;
        if !amount.is_finite() {
            return Err(ExpenseValidationError::InvalidAmount);
        }
        if amount <= 0.0 {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }

        Ok(Expense::new(name, amount, self.category))
    }
}

/// Append a validated expense, preserving prior order
pub fn add_expense(expenses: &mut Vec<Expense>, expense: Expense) {
    expenses.push(expense);
}

/// Remove the expense with the given id
///
/// Unknown ids leave the list unchanged; returns whether anything was
/// removed.
pub fn remove_expense(expenses: &mut Vec<Expense>, id: ExpenseId) -> bool {
    let before = expenses.len();
    expenses.retain(|e| e.id != id);
    expenses.len() != before
}

/// Parse an income field as typed by the user
///
/// Trims whitespace, tolerates a leading `$`, and coerces anything that
/// fails to parse to 0.0 rather than signaling an error.
pub fn parse_income(input: &str) -> f64 {
    let raw = input.trim();
    let raw = raw.strip_prefix('$').unwrap_or(raw);
    raw.parse().unwrap_or(0.0)
}
