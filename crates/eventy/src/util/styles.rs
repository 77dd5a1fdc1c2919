//! Common styling utilities for TUI components

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for focused panels
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Standard color for success notifications
pub const SUCCESS_COLOR: Color = Color::Green;

/// Standard color for error notifications
pub const ERROR_COLOR: Color = Color::Red;

/// Standard color for in-flight/busy indicators
pub const BUSY_COLOR: Color = Color::Yellow;

/// Create a block with a title that shows focused state via border color.
///
/// When focused, the border is yellow. When unfocused, it's the default color.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_block_has_correct_title() {
        let block = focused_block("Test", true);
        assert!(format!("{:?}", block).contains("Test"));
    }
}
