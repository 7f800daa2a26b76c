//! Help dialog
//!
//! Shows keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(55, 65, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        section("Budget"),
        Line::from(""),
        key_line("i", "Set monthly income"),
        key_line("a/n", "Add an expense"),
        key_line("d/Del", "Remove selected expense"),
        key_line("j/k", "Move selection up/down"),
        Line::from(""),
        section("Summary"),
        Line::from(""),
        key_line("s", "Toggle suggested allocation table"),
        key_line("e", "Explain how the numbers are computed"),
        Line::from(""),
        section("General"),
        Line::from(""),
        key_line("?", "Show/hide this help"),
        key_line("Esc", "Close dialog / clear message"),
        key_line("q", "Quit"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Format a key binding line
fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<8}", key), Style::default().fg(Color::Cyan)),
        Span::raw(description),
    ])
}
