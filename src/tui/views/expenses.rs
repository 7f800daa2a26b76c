//! Budget input view
//!
//! Left panel: the monthly income header and the expense table with the
//! current selection.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::{format_currency, truncate};
use crate::tui::app::App;
use crate::tui::layout::InputLayout;

/// Render the input panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = InputLayout::new(area);

    render_income_header(frame, app, layout.income);
    render_expense_table(frame, app, layout.expenses);
}

/// Render the monthly income header
fn render_income_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Monthly Income ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let line = Line::from(vec![
        Span::styled(
            format_currency(app.income, &app.settings.currency_symbol),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("[i] Edit", Style::default().fg(Color::Yellow)),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the expense table
fn render_expense_table(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" Expenses ({}) ", app.expenses.len()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    if app.expenses.is_empty() {
        let text = Paragraph::new("No expenses yet. Press [a] to add one.")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let symbol = app.settings.currency_symbol.as_str();
    let rows: Vec<Row> = app
        .expenses
        .iter()
        .map(|expense| {
            let category_style = match expense.category {
                crate::models::ExpenseCategory::Fixed => Style::default().fg(Color::Magenta),
                crate::models::ExpenseCategory::Variable => Style::default().fg(Color::Blue),
            };

            Row::new(vec![
                Cell::from(truncate(&expense.name, 24)),
                Cell::from(expense.category.to_string()).style(category_style),
                Cell::from(format_currency(expense.amount, symbol)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(16),    // Name
        Constraint::Length(10), // Category
        Constraint::Length(12), // Amount
    ];

    let header = Row::new(vec![
        Cell::from("Name").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_expense_index.min(
        app.expenses.len().saturating_sub(1),
    )));

    frame.render_stateful_widget(table, area, &mut state);
}
