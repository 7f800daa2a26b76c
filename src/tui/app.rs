//! Application state for the TUI
//!
//! The App struct is the page root: it owns the income and expense list as
//! the single source of truth and recomputes the derived overview inside
//! every mutating method. Views and dialogs read from it; dialogs hold
//! draft input only and commit through the methods here.

use crate::config::Settings;
use crate::models::{Expense, ExpenseId};
use crate::services::budget::{self, BudgetOverview};
use crate::services::expense;

use super::dialogs::expense::ExpenseFormState;
use super::dialogs::income::IncomeFormState;

/// How many ticks a transient status message stays visible
const STATUS_TICKS: u8 = 20;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Income,
    AddExpense,
    Help,
    Explanation,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Monthly income
    pub income: f64,

    /// Ordered expense list; new entries append at the end
    pub expenses: Vec<Expense>,

    /// Derived totals, recomputed on every mutation
    pub overview: BudgetOverview,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected expense index in the list
    pub selected_expense_index: usize,

    /// Whether the summary shows the suggested allocation table
    pub show_allocation: bool,

    /// Transient status message
    pub status_message: Option<String>,

    /// Remaining ticks before the status message expires
    status_ticks: u8,

    /// Income dialog state
    pub income_form: IncomeFormState,

    /// Add-expense dialog state
    pub expense_form: ExpenseFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            should_quit: false,
            income: 0.0,
            expenses: Vec::new(),
            overview: budget::overview(0.0, &[]),
            active_dialog: ActiveDialog::default(),
            selected_expense_index: 0,
            show_allocation: settings.show_allocation,
            status_message: None,
            status_ticks: 0,
            income_form: IncomeFormState::default(),
            expense_form: ExpenseFormState::with_category(settings.default_category),
        }
    }

    /// Recompute the derived overview from the current income and expenses
    pub fn recompute(&mut self) {
        self.overview = budget::overview(self.income, &self.expenses);
    }

    /// Overwrite the income and recompute
    pub fn set_income(&mut self, income: f64) {
        self.income = income;
        self.recompute();
    }

    /// Append a validated expense and recompute
    pub fn add_expense(&mut self, new_expense: Expense) {
        expense::add_expense(&mut self.expenses, new_expense);
        self.recompute();
    }

    /// Remove an expense by id and recompute; returns whether it existed
    pub fn remove_expense(&mut self, id: ExpenseId) -> bool {
        let removed = expense::remove_expense(&mut self.expenses, id);
        if removed {
            self.clamp_selection();
            self.recompute();
        }
        removed
    }

    /// Remove the currently selected expense; returns its name if any
    pub fn remove_selected(&mut self) -> Option<String> {
        let target = self.expenses.get(self.selected_expense_index)?;
        let id = target.id;
        let name = target.name.clone();
        self.remove_expense(id).then_some(name)
    }

    fn clamp_selection(&mut self) {
        if self.selected_expense_index >= self.expenses.len() {
            self.selected_expense_index = self.expenses.len().saturating_sub(1);
        }
    }

    /// Move selection up in the expense list
    pub fn move_up(&mut self) {
        if self.selected_expense_index > 0 {
            self.selected_expense_index -= 1;
        }
    }

    /// Move selection down in the expense list
    pub fn move_down(&mut self) {
        if self.selected_expense_index + 1 < self.expenses.len() {
            self.selected_expense_index += 1;
        }
    }

    /// Toggle the suggested allocation table in the summary
    pub fn toggle_allocation(&mut self) {
        self.show_allocation = !self.show_allocation;
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a transient status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_ticks = STATUS_TICKS;
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_ticks = 0;
    }

    /// Advance one tick; expires the status message when its time is up
    pub fn on_tick(&mut self) {
        if self.status_message.is_some() {
            self.status_ticks = self.status_ticks.saturating_sub(1);
            if self.status_ticks == 0 {
                self.status_message = None;
            }
        }
    }

    /// Open a dialog, initializing its draft state
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match dialog {
            ActiveDialog::Income => {
                self.income_form.init_from(self.income);
            }
            ActiveDialog::AddExpense => {
                self.expense_form = ExpenseFormState::with_category(self.settings.default_category);
            }
            _ => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }
}
