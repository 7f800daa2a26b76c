//! Event handler for the TUI
//!
//! Routes keyboard events to the active dialog or the normal-mode
//! bindings, and advances tick-based state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.on_tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    handle_normal_key(app, key)
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Income => {
            dialogs::income::handle_key(app, key);
        }
        ActiveDialog::AddExpense => {
            dialogs::expense::handle_key(app, key);
        }
        ActiveDialog::Help | ActiveDialog::Explanation => {
            // Any key closes the informational dialogs
            app.close_dialog();
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
        }

        // Help
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
        }

        // Explanation panel
        KeyCode::Char('e') => {
            app.open_dialog(ActiveDialog::Explanation);
        }

        // Income entry
        KeyCode::Char('i') => {
            app.open_dialog(ActiveDialog::Income);
        }

        // Add expense
        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.open_dialog(ActiveDialog::AddExpense);
        }

        // Remove selected expense
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(name) = app.remove_selected() {
                app.set_status(format!("Removed '{}'", name));
            }
        }

        // Toggle allocation table
        KeyCode::Char('s') => {
            app.toggle_allocation();
        }

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
        }

        KeyCode::Esc => {
            app.clear_status();
        }

        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::BudgetStatus;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_event(app, key(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn test_quit_key() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        handle_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_income_dialog_flow() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        handle_event(&mut app, key(KeyCode::Char('i'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::Income);

        type_str(&mut app, "2500");
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.active_dialog, ActiveDialog::None);
        assert_eq!(app.income, 2500.0);
        assert_eq!(app.overview.remaining, 2500.0);
    }

    #[test]
    fn test_add_expense_flow_over_budget() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.set_income(1000.0);

        handle_event(&mut app, key(KeyCode::Char('a'))).unwrap();
        type_str(&mut app, "Rent");
        handle_event(&mut app, key(KeyCode::Tab)).unwrap();
        type_str(&mut app, "1200");
        handle_event(&mut app, key(KeyCode::Tab)).unwrap();
        handle_event(&mut app, key(KeyCode::Char(' '))).unwrap(); // Variable -> Fixed
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();

        // Dialog stays open with cleared fields; budget reflects the add
        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);
        assert_eq!(app.expenses.len(), 1);
        assert_eq!(app.expenses[0].name, "Rent");
        assert_eq!(app.overview.remaining, -200.0);
        assert_eq!(app.overview.status.status, BudgetStatus::Negative);
        assert!(app.overview.status.message.contains("200.00"));
    }

    #[test]
    fn test_invalid_draft_is_refused() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        handle_event(&mut app, key(KeyCode::Char('a'))).unwrap();
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();

        assert!(app.expenses.is_empty());
        assert!(app.expense_form.error_message.is_some());
    }

    #[test]
    fn test_remove_key_on_selection() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.set_income(1000.0);
        app.add_expense(crate::models::Expense::new(
            "Rent",
            500.0,
            crate::models::ExpenseCategory::Fixed,
        ));

        handle_event(&mut app, key(KeyCode::Char('d'))).unwrap();
        assert!(app.expenses.is_empty());
        assert_eq!(app.overview.remaining, 1000.0);
        assert!(app.status_message.as_deref().unwrap().contains("Rent"));
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        handle_event(&mut app, key(KeyCode::Char('?'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::Help);

        handle_event(&mut app, key(KeyCode::Char('x'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::None);
    }
}
