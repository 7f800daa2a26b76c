//! TUI views module
//!
//! Contains the two main panels (budget input, summary) and the status bar.

pub mod expenses;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    expenses::render(frame, app, layout.input);
    summary::render(frame, app, layout.summary);
    status_bar::render(frame, app, layout.status_bar);

    // Render dialog if active
    match app.active_dialog {
        ActiveDialog::Income => dialogs::income::render(frame, app),
        ActiveDialog::AddExpense => dialogs::expense::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::Explanation => dialogs::explanation::render(frame),
        ActiveDialog::None => {}
    }
}
