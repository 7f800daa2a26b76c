//! Core data models for finflow
//!
//! This module contains the data structures that represent the budgeting
//! domain: expenses, budget inputs, and the small tagged records the
//! arithmetic produces.

pub mod budget;
pub mod expense;
pub mod ids;

pub use budget::{BudgetData, BudgetStatus, CategoryAllocation, FeasibilityReport, StatusReport};
pub use expense::{Expense, ExpenseCategory, ExpenseValidationError};
pub use ids::ExpenseId;
