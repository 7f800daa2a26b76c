//! Expense model
//!
//! An expense is a named amount tagged with a closed category. The `name`
//! non-empty and `amount > 0` invariants are enforced at entry time only;
//! the arithmetic functions trust their inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ExpenseId;

/// Expense category: a closed, exhaustive tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    /// Recurring expense assumed constant month to month (rent, insurance)
    Fixed,
    /// Expense that fluctuates month to month (groceries, entertainment)
    #[default]
    Variable,
}

impl ExpenseCategory {
    /// All categories in display order
    pub fn all() -> &'static [Self] {
        &[Self::Fixed, Self::Variable]
    }

    /// The other category (for form toggling)
    pub fn toggle(self) -> Self {
        match self {
            Self::Fixed => Self::Variable,
            Self::Variable => Self::Fixed,
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "Fixed"),
            Self::Variable => write!(f, "Variable"),
        }
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "variable" => Ok(Self::Variable),
            other => Err(format!(
                "unknown category '{}' (expected 'fixed' or 'variable')",
                other
            )),
        }
    }
}

/// A single monthly expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, used only for removal and list keying
    pub id: ExpenseId,

    /// Display name
    pub name: String,

    /// Amount in dollars; positive by construction
    pub amount: f64,

    /// Fixed or variable
    pub category: ExpenseCategory,

    /// When the expense was entered
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense with a fresh id
    pub fn new(name: impl Into<String>, amount: f64, category: ExpenseCategory) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            category,
            created_at: Utc::now(),
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }
        if !self.amount.is_finite() {
            return Err(ExpenseValidationError::InvalidAmount);
        }
        if self.amount <= 0.0 {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (${:.2}, {})", self.name, self.amount, self.category)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    InvalidAmount,
    NonPositiveAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::InvalidAmount => write!(f, "Amount must be a number"),
            Self::NonPositiveAmount => write!(f, "Amount must be greater than zero"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
