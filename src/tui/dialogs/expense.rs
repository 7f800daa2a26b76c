//! Add-expense dialog
//!
//! Modal form for entering a new expense: name, amount, and category, with
//! Tab navigation and inline validation. A successful add clears the draft
//! and keeps the dialog open so several expenses can be entered in a row.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::ExpenseCategory;
use crate::services::expense::ExpenseDraft;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

use super::render_input_with_cursor;

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Name,
    Amount,
    Category,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Name,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Category,
            Self::Amount => Self::Name,
            Self::Category => Self::Amount,
        }
    }
}

/// State for the add-expense dialog
#[derive(Debug, Clone, Default)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: ExpenseField,
    /// Name input
    pub name_input: String,
    /// Name cursor position
    pub name_cursor: usize,
    /// Amount input
    pub amount_input: String,
    /// Amount cursor position
    pub amount_cursor: usize,
    /// Selected category
    pub category: ExpenseCategory,
    /// Error message from the last rejected submission
    pub error_message: Option<String>,
}

impl ExpenseFormState {
    /// Create an empty form starting on the given category
    pub fn with_category(category: ExpenseCategory) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }

    /// Move to next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Move to previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Toggle the category selection
    pub fn toggle_category(&mut self) {
        self.category = self.category.toggle();
        self.error_message = None;
    }

    /// Insert character into the focused field
    ///
    /// The amount field accepts digits and a decimal point only.
    pub fn insert_char(&mut self, c: char) {
        match self.focused_field {
            ExpenseField::Name => {
                self.name_input.insert(self.name_cursor, c);
                self.name_cursor += 1;
                self.error_message = None;
            }
            ExpenseField::Amount => {
                if c.is_ascii_digit() || c == '.' {
                    self.amount_input.insert(self.amount_cursor, c);
                    self.amount_cursor += 1;
                    self.error_message = None;
                }
            }
            ExpenseField::Category => {}
        }
    }

    /// Delete character before cursor in the focused field
    pub fn backspace(&mut self) {
        match self.focused_field {
            ExpenseField::Name => {
                if self.name_cursor > 0 {
                    self.name_cursor -= 1;
                    self.name_input.remove(self.name_cursor);
                    self.error_message = None;
                }
            }
            ExpenseField::Amount => {
                if self.amount_cursor > 0 {
                    self.amount_cursor -= 1;
                    self.amount_input.remove(self.amount_cursor);
                    self.error_message = None;
                }
            }
            ExpenseField::Category => {}
        }
    }

    /// Move cursor left in the focused field
    pub fn move_left(&mut self) {
        match self.focused_field {
            ExpenseField::Name => {
                if self.name_cursor > 0 {
                    self.name_cursor -= 1;
                }
            }
            ExpenseField::Amount => {
                if self.amount_cursor > 0 {
                    self.amount_cursor -= 1;
                }
            }
            ExpenseField::Category => self.toggle_category(),
        }
    }

    /// Move cursor right in the focused field
    pub fn move_right(&mut self) {
        match self.focused_field {
            ExpenseField::Name => {
                if self.name_cursor < self.name_input.len() {
                    self.name_cursor += 1;
                }
            }
            ExpenseField::Amount => {
                if self.amount_cursor < self.amount_input.len() {
                    self.amount_cursor += 1;
                }
            }
            ExpenseField::Category => self.toggle_category(),
        }
    }

    /// Build a draft from the current inputs
    pub fn to_draft(&self) -> ExpenseDraft {
        ExpenseDraft {
            name: self.name_input.clone(),
            amount: self.amount_input.clone(),
            category: self.category,
        }
    }

    /// Clear the text fields for the next entry, keeping the category
    pub fn clear_for_next(&mut self) {
        self.name_input.clear();
        self.name_cursor = 0;
        self.amount_input.clear();
        self.amount_cursor = 0;
        self.focused_field = ExpenseField::Name;
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the add-expense dialog
pub fn render(frame: &mut Frame, app: &App) {
    let state = &app.expense_form;

    let area = centered_rect_fixed(55, 14, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Expense ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name label
            Constraint::Length(1), // Name input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Amount label
            Constraint::Length(1), // Amount input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Category label
            Constraint::Length(1), // Category selector
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Description:",
            label_style(state.focused_field == ExpenseField::Name),
        )),
        chunks[0],
    );
    let name_line = render_input_with_cursor(
        "",
        &state.name_input,
        state.name_cursor,
        state.focused_field == ExpenseField::Name,
    );
    frame.render_widget(Paragraph::new(name_line), chunks[1]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Amount:",
            label_style(state.focused_field == ExpenseField::Amount),
        )),
        chunks[3],
    );
    let amount_line = render_input_with_cursor(
        "$",
        &state.amount_input,
        state.amount_cursor,
        state.focused_field == ExpenseField::Amount,
    );
    frame.render_widget(Paragraph::new(amount_line), chunks[4]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Category:",
            label_style(state.focused_field == ExpenseField::Category),
        )),
        chunks[6],
    );
    frame.render_widget(Paragraph::new(category_line(state)), chunks[7]);

    if let Some(ref error) = state.error_message {
        let error_line = Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[9]);
    }

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Close  "),
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Fields  "),
        Span::styled("[←/→]", Style::default().fg(Color::Cyan)),
        Span::raw(" Category"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[10]);
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    }
}

fn category_line(state: &ExpenseFormState) -> Line<'static> {
    let focused = state.focused_field == ExpenseField::Category;
    let arrow_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![Span::styled("◀ ", arrow_style)];
    for (i, category) in ExpenseCategory::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *category == state.category {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(category.to_string(), style));
    }
    spans.push(Span::styled(" ▶", arrow_style));

    Line::from(spans)
}

/// Handle key events for the add-expense dialog
pub fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) -> bool {
    use crossterm::event::KeyCode;

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }

        KeyCode::Tab | KeyCode::Down => {
            app.expense_form.next_field();
            true
        }

        KeyCode::BackTab | KeyCode::Up => {
            app.expense_form.prev_field();
            true
        }

        KeyCode::Enter => {
            submit(app);
            true
        }

        KeyCode::Char(' ')
            if app.expense_form.focused_field == ExpenseField::Category =>
        {
            app.expense_form.toggle_category();
            true
        }

        KeyCode::Char(c) => {
            app.expense_form.insert_char(c);
            true
        }

        KeyCode::Backspace => {
            app.expense_form.backspace();
            true
        }

        KeyCode::Left => {
            app.expense_form.move_left();
            true
        }

        KeyCode::Right => {
            app.expense_form.move_right();
            true
        }

        _ => false,
    }
}

fn submit(app: &mut App) {
    match app.expense_form.to_draft().validate() {
        Ok(expense) => {
            let name = expense.name.clone();
            app.add_expense(expense);
            app.expense_form.clear_for_next();
            app.set_status(format!("Added '{}'", name));
        }
        Err(e) => {
            app.expense_form.set_error(e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycling() {
        assert_eq!(ExpenseField::Name.next(), ExpenseField::Amount);
        assert_eq!(ExpenseField::Category.next(), ExpenseField::Name);
        assert_eq!(ExpenseField::Name.prev(), ExpenseField::Category);
    }

    #[test]
    fn test_amount_field_filters_input() {
        let mut state = ExpenseFormState::with_category(ExpenseCategory::Variable);
        state.focused_field = ExpenseField::Amount;
        for c in "12x.5!".chars() {
            state.insert_char(c);
        }
        assert_eq!(state.amount_input, "12.5");
    }

    #[test]
    fn test_name_field_accepts_anything() {
        let mut state = ExpenseFormState::with_category(ExpenseCategory::Variable);
        for c in "Rent #2".chars() {
            state.insert_char(c);
        }
        assert_eq!(state.name_input, "Rent #2");
    }

    #[test]
    fn test_clear_for_next_keeps_category() {
        let mut state = ExpenseFormState::with_category(ExpenseCategory::Fixed);
        state.name_input = "Rent".into();
        state.amount_input = "1200".into();
        state.focused_field = ExpenseField::Category;

        state.clear_for_next();
        assert!(state.name_input.is_empty());
        assert!(state.amount_input.is_empty());
        assert_eq!(state.focused_field, ExpenseField::Name);
        assert_eq!(state.category, ExpenseCategory::Fixed);
    }

    #[test]
    fn test_to_draft() {
        let mut state = ExpenseFormState::with_category(ExpenseCategory::Fixed);
        state.name_input = "Rent".into();
        state.amount_input = "1200".into();

        let expense = state.to_draft().validate().unwrap();
        assert_eq!(expense.name, "Rent");
        assert_eq!(expense.amount, 1200.0);
        assert_eq!(expense.category, ExpenseCategory::Fixed);
    }
}
