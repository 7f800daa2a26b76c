//! Modal dialogs
//!
//! Each dialog owns a small draft-state struct held on the App, a render
//! function, and a key handler. Committing always goes through an App
//! method; no dialog mutates the budget state directly.

pub mod expense;
pub mod explanation;
pub mod help;
pub mod income;

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Render a one-line text input with a block cursor
pub(crate) fn render_input_with_cursor(
    prefix: &str,
    value: &str,
    cursor: usize,
    focused: bool,
) -> Line<'static> {
    let mut spans = vec![];

    if !prefix.is_empty() {
        spans.push(Span::raw(prefix.to_string()));
    }

    if focused {
        let cursor_pos = cursor.min(value.len());
        let (before, after) = value.split_at(cursor_pos);

        spans.push(Span::styled(
            before.to_string(),
            Style::default().fg(Color::White),
        ));

        let cursor_char = after.chars().next().unwrap_or(' ');
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));

        if after.len() > 1 {
            spans.push(Span::styled(
                after[1..].to_string(),
                Style::default().fg(Color::White),
            ));
        }
    } else {
        spans.push(Span::styled(
            value.to_string(),
            Style::default().fg(Color::White),
        ));
    }

    Line::from(spans)
}
