//! Business logic layer
//!
//! `budget` holds the pure arithmetic; `expense` holds the list-editing
//! operations and input parsing that sit between the UI and the models.

pub mod budget;
pub mod expense;

pub use budget::{overview, BudgetOverview};
pub use expense::ExpenseDraft;
