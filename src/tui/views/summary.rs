//! Summary view
//!
//! Right panel: derived totals, a budget-used gauge, the status line, the
//! fixed/variable breakdown, recommended savings, feasibility, and the
//! optional suggested allocation table. Everything here is read from the
//! overview the page root recomputed on the last mutation.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::display::{format_bar, format_currency, format_percentage};
use crate::models::{BudgetStatus, ExpenseCategory};
use crate::services::budget;
use crate::tui::app::App;
use crate::tui::layout::SummaryLayout;

/// Color used for a budget status everywhere in the summary
fn status_color(status: BudgetStatus) -> Color {
    match status {
        BudgetStatus::Positive => Color::Green,
        BudgetStatus::Warning => Color::Yellow,
        BudgetStatus::Negative => Color::Red,
    }
}

/// Render the summary panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = SummaryLayout::new(area);

    render_overview(frame, app, layout.overview);
    render_gauge(frame, app, layout.gauge);
    render_breakdown(frame, app, layout.breakdown);
}

/// Render the totals and status message
fn render_overview(frame: &mut Frame, app: &App, area: Rect) {
    let overview = &app.overview;
    let symbol = app.settings.currency_symbol.as_str();
    let color = status_color(overview.status.status);

    let block = Block::default()
        .title(" Budget Overview ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let lines = vec![
        amount_line("Income", overview.income, symbol, Color::White),
        amount_line("Total expenses", overview.total_expenses, symbol, Color::White),
        amount_line("Remaining", overview.remaining, symbol, color),
        Line::from(""),
        Line::from(Span::styled(
            overview.status.message.clone(),
            Style::default().fg(color),
        )),
        Line::from(""),
        amount_line(
            "Recommended savings",
            budget::recommended_savings(overview.income),
            symbol,
            Color::Cyan,
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn amount_line(label: &str, amount: f64, symbol: &str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<20}", label),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!("{:>12}", format_currency(amount, symbol)),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Render the budget-used gauge
fn render_gauge(frame: &mut Frame, app: &App, area: Rect) {
    let overview = &app.overview;
    let pct = overview.used_percentage();

    let block = Block::default()
        .title(" Budget Used ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(status_color(overview.status.status)))
        .ratio((pct / 100.0).clamp(0.0, 1.0))
        .label(format_percentage(pct));

    frame.render_widget(gauge, area);
}

/// Render the category breakdown, feasibility, and allocation table
fn render_breakdown(frame: &mut Frame, app: &App, area: Rect) {
    let overview = &app.overview;
    let symbol = app.settings.currency_symbol.as_str();

    let block = Block::default()
        .title(" Breakdown ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let bar_max = overview.total_expenses.max(overview.income);
    let mut lines = vec![
        breakdown_line(
            "Fixed",
            overview.fixed_expenses,
            overview.category_percentage(ExpenseCategory::Fixed),
            bar_max,
            symbol,
            Color::Magenta,
        ),
        breakdown_line(
            "Variable",
            overview.variable_expenses,
            overview.category_percentage(ExpenseCategory::Variable),
            bar_max,
            symbol,
            Color::Blue,
        ),
    ];

    let feasibility = budget::validate_feasibility(overview.income, &app.expenses);
    if !feasibility.is_valid {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            feasibility.message,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    if app.show_allocation {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Suggested allocation  [s] hide",
            Style::default().fg(Color::Yellow),
        )));
        for allocation in budget::suggested_allocation(overview.income) {
            lines.push(Line::from(vec![
                Span::raw(format!("  {:<15}", allocation.category)),
                Span::styled(
                    format!("{:>11}", format_currency(allocation.amount, symbol)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("  {:>4}", format_percentage(allocation.rate * 100.0)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
    } else {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[s] show suggested allocation",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn breakdown_line(
    label: &str,
    amount: f64,
    pct_of_income: f64,
    bar_max: f64,
    symbol: &str,
    color: Color,
) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<9}", label), Style::default().fg(color)),
        Span::raw(format_bar(amount, bar_max, 14)),
        Span::styled(
            format!(" {:>11}", format_currency(amount, symbol)),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("  {} of income", format_percentage(pct_of_income)),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}
