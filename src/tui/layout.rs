//! Layout definitions for the TUI
//!
//! Two-panel layout: budget input (income + expense list) on the left,
//! computed summary on the right, status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Input panel (income and expense list)
    pub input: Rect,
    /// Summary panel (derived totals and breakdown)
    pub summary: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(45), // Input
                Constraint::Percentage(55), // Summary
            ])
            .split(vertical[0]);

        Self {
            input: horizontal[0],
            summary: horizontal[1],
            status_bar: vertical[1],
        }
    }
}

/// Layout for the input panel
pub struct InputLayout {
    /// Income header
    pub income: Rect,
    /// Expense table
    pub expenses: Rect,
}

impl InputLayout {
    /// Calculate input panel layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Income header
                Constraint::Min(3),    // Expenses
            ])
            .split(area);

        Self {
            income: chunks[0],
            expenses: chunks[1],
        }
    }
}

/// Layout for the summary panel
pub struct SummaryLayout {
    /// Overview totals
    pub overview: Rect,
    /// Budget-used gauge
    pub gauge: Rect,
    /// Category breakdown and allocation
    pub breakdown: Rect,
}

impl SummaryLayout {
    /// Calculate summary panel layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9), // Overview
                Constraint::Length(3), // Gauge
                Constraint::Min(3),    // Breakdown
            ])
            .split(area);

        Self {
            overview: chunks[0],
            gauge: chunks[1],
            breakdown: chunks[2],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
