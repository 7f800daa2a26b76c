//! Formatting utilities for terminal output
//!
//! Shared by the TUI views and the one-shot CLI commands.

/// Format an amount with a currency symbol, negative values as "-$X.XX"
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let prefix: String = s.chars().take(max_len - 3).collect();
        format!("{}...", prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5, "$"), "$1234.50");
        assert_eq!(format_currency(0.0, "$"), "$0.00");
        assert_eq!(format_currency(-200.0, "$"), "-$200.00");
        assert_eq!(format_currency(-10.5, "€"), "-€10.50");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(7.25), "7.2%");
        assert_eq!(format_percentage(42.6), "43%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
        assert_eq!(format_bar(50.0, 100.0, 4), "██░░");
        assert_eq!(format_bar(150.0, 100.0, 4), "████");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long expense name", 10), "a very ...");
    }
}
