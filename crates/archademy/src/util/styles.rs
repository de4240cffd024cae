//! Common styling utilities for TUI components

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Accent color for the course (headers, emphasized curve, active step)
pub const ACCENT_COLOR: Color = Color::Green;

/// Standard color for focused panels
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text and de-emphasized content
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for section headers inside lesson content
pub const HEADER_COLOR: Color = Color::Cyan;

/// Standard color for errors and cautions
pub const CAUTION_COLOR: Color = Color::Red;

/// Create a block with a title that shows focused state via border color.
///
/// When focused, the border is yellow. When unfocused, it's the default
/// color.
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

/// Create a block with title and bottom help text that shows focused state.
///
/// The help text is only shown when the panel is focused.
pub fn focused_block_with_help(title: &str, focused: bool, help_text: &str) -> Block<'static> {
    let mut block = focused_block(title, focused);

    if focused && !help_text.is_empty() {
        block = block.title_bottom(Line::from(format!(" {} ", help_text)).fg(HELP_COLOR));
    }

    block
}

/// Format a whole-dollar amount with thousands separators, e.g. `$1,200`
pub fn format_dollars(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let formatted: String = grouped.chars().rev().collect();
    format!("${}", formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_block_has_title() {
        let block = focused_block("Rule Lab", true);
        assert!(format!("{:?}", block).contains("Rule Lab"));
    }

    #[test]
    fn test_format_dollars_groups_thousands() {
        assert_eq!(format_dollars(0), "$0");
        assert_eq!(format_dollars(600), "$600");
        assert_eq!(format_dollars(1_200), "$1,200");
        assert_eq!(format_dollars(2_000), "$2,000");
    }
}
