//! Calculation explanation dialog
//!
//! A static panel describing how each number in the summary is derived.
//! Informational only; reads no budget state.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the explanation dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(70, 80, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" How the Numbers Are Computed ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        heading("Totals"),
        body("Every expense amount is summed; fixed and variable expenses"),
        body("are also totaled separately for the breakdown."),
        Line::from(""),
        heading("Remaining budget"),
        body("Income minus total expenses. The result may be negative; it"),
        body("is never clamped."),
        Line::from(""),
        heading("Status"),
        body("Positive remaining means money is left for savings, exactly"),
        body("zero means the budget is balanced, and negative means the"),
        body("budget is overspent by that amount."),
        Line::from(""),
        heading("Recommended savings"),
        body("A tiered rate applied to income: 10% below $2,000, 25% above"),
        body("$5,000, and 20% otherwise (including exactly $2,000 and"),
        body("$5,000)."),
        Line::from(""),
        heading("Suggested allocation"),
        body("A fixed percentage table applied to income: Housing 30%,"),
        body("Utilities 10%, Food 15%, Transportation 10%, Savings 20%,"),
        body("Entertainment 5%, Other 10%. It does not look at the actual"),
        body("expense list."),
        Line::from(""),
        heading("Feasibility"),
        body("The budget is feasible when income covers the fixed expenses"),
        body("alone; variable spending can be cut, rent cannot."),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

fn body(text: &'static str) -> Line<'static> {
    Line::from(Span::raw(format!("  {}", text)))
}
