//! Status bar view
//!
//! Shows the remaining budget, any transient status message, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::display::format_currency;
use crate::models::BudgetStatus;
use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let overview = &app.overview;

    let remaining_color = match overview.status.status {
        BudgetStatus::Positive => Color::Green,
        BudgetStatus::Warning => Color::Yellow,
        BudgetStatus::Negative => Color::Red,
    };

    let mut spans = vec![
        Span::styled(" Remaining: ", Style::default().fg(Color::White)),
        Span::styled(
            format_currency(overview.remaining, &app.settings.currency_symbol),
            Style::default()
                .fg(remaining_color)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    // Status message if any
    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = " q:Quit  ?:Help  i:Income  a:Add  d:Remove ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    let line = Line::from(spans);
    frame.render_widget(Paragraph::new(line), area);
}
