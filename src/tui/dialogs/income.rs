//! Income dialog
//!
//! A dialog for entering the monthly income. Anything that fails to parse
//! as a number commits as zero, matching how the income field has always
//! behaved in this calculator.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::display::format_currency;
use crate::services::expense::parse_income;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

use super::render_input_with_cursor;

/// State for the income dialog
#[derive(Debug, Clone, Default)]
pub struct IncomeFormState {
    /// Amount input, as typed
    pub amount_input: String,
    /// Cursor position
    pub cursor: usize,
}

impl IncomeFormState {
    /// Initialize the input from the current income
    pub fn init_from(&mut self, income: f64) {
        if income == 0.0 {
            self.amount_input = String::new();
        } else {
            self.amount_input = format!("{:.2}", income);
        }
        self.cursor = self.amount_input.len();
    }

    /// Insert a character (digits and a decimal point only)
    pub fn insert_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' {
            self.amount_input.insert(self.cursor, c);
            self.cursor += 1;
        }
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.amount_input.remove(self.cursor);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.amount_input.len() {
            self.cursor += 1;
        }
    }

    /// Clear the input
    pub fn clear(&mut self) {
        self.amount_input.clear();
        self.cursor = 0;
    }
}

/// Render the income dialog
pub fn render(frame: &mut Frame, app: &App) {
    let state = &app.income_form;

    let area = centered_rect_fixed(50, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Monthly Income ")
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
            Constraint::Length(1), // Current income
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Amount label
            Constraint::Length(1), // Amount input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    let current_line = Line::from(vec![
        Span::styled("Current:  ", Style::default().fg(Color::Yellow)),
        Span::styled(
            format_currency(app.income, &app.settings.currency_symbol),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(current_line), chunks[0]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "New amount (after taxes):",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        chunks[2],
    );

    let amount_line = render_input_with_cursor("$", &state.amount_input, state.cursor, true);
    frame.render_widget(Paragraph::new(amount_line), chunks[3]);

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel  "),
        Span::styled("[Ctrl+u]", Style::default().fg(Color::Cyan)),
        Span::raw(" Clear"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[5]);
}

/// Handle key events for the income dialog
pub fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) -> bool {
    use crossterm::event::{KeyCode, KeyModifiers};

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }

        KeyCode::Enter => {
            let income = parse_income(&app.income_form.amount_input);
            app.set_income(income);
            app.close_dialog();
            app.set_status(format!(
                "Income set to {}",
                format_currency(income, &app.settings.currency_symbol)
            ));
            true
        }

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.income_form.clear();
            true
        }

        KeyCode::Char(c) => {
            app.income_form.insert_char(c);
            true
        }

        KeyCode::Backspace => {
            app.income_form.backspace();
            true
        }

        KeyCode::Left => {
            app.income_form.move_left();
            true
        }

        KeyCode::Right => {
            app.income_form.move_right();
            true
        }

        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_from_zero_income_is_empty() {
        let mut state = IncomeFormState::default();
        state.init_from(0.0);
        assert_eq!(state.amount_input, "");
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_init_from_existing_income() {
        let mut state = IncomeFormState::default();
        state.init_from(2500.5);
        assert_eq!(state.amount_input, "2500.50");
        assert_eq!(state.cursor, 7);
    }

    #[test]
    fn test_insert_filters_non_numeric() {
        let mut state = IncomeFormState::default();
        state.insert_char('1');
        state.insert_char('a');
        state.insert_char('.');
        state.insert_char('5');
        assert_eq!(state.amount_input, "1.5");
    }

    #[test]
    fn test_backspace_and_cursor() {
        let mut state = IncomeFormState::default();
        state.insert_char('1');
        state.insert_char('2');
        state.move_left();
        state.backspace();
        assert_eq!(state.amount_input, "2");
        assert_eq!(state.cursor, 0);
    }
}
