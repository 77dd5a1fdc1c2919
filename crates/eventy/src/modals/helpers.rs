//! Shared rendering helpers for modal widgets.

use std::rc::Rc;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect;

/// Render a line of text with a block cursor at `cursor_pos`.
pub fn render_cursor_line(display_value: &str, cursor_pos: usize, prefix: &str) -> Line<'static> {
    let mut spans = Vec::new();

    if !prefix.is_empty() {
        spans.push(Span::raw(prefix.to_string()));
    }

    let chars: Vec<char> = display_value.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if i == cursor_pos {
            spans.push(Span::styled(
                c.to_string(),
                Style::default().bg(Color::White).fg(Color::Black),
            ));
        } else {
            spans.push(Span::raw(c.to_string()));
        }
    }

    // Cursor past the end renders as a trailing block
    if cursor_pos >= chars.len() {
        spans.push(Span::styled(
            " ",
            Style::default().bg(Color::White).fg(Color::Black),
        ));
    }

    Line::from(spans)
}

/// Result of scroll calculation for text wider than its container.
pub struct ScrolledView {
    /// The visible portion of the text
    pub display_value: String,
    /// The cursor position within the visible portion
    pub cursor_pos: usize,
}

/// Calculate horizontal scroll for a text input wider than `max_width`,
/// keeping the cursor centered in the visible slice. `cursor` is a character
/// index; slicing is done per character so multi-byte text never splits.
pub fn calculate_scroll(value: &str, cursor: usize, max_width: usize) -> ScrolledView {
    let input_width = max_width.saturating_sub(2);
    let chars: Vec<char> = value.chars().collect();
    let cursor = cursor.min(chars.len());

    if chars.len() <= input_width {
        return ScrolledView {
            display_value: value.to_string(),
            cursor_pos: cursor,
        };
    }

    let start = cursor.saturating_sub(input_width / 2);
    let end = (start + input_width).min(chars.len());
    let start = end.saturating_sub(input_width);

    ScrolledView {
        display_value: chars[start..end].iter().collect(),
        cursor_pos: cursor - start,
    }
}

/// Layout information for a rendered modal frame.
pub struct ModalFrame {
    /// The inner area (inside the border)
    pub inner: Rect,
    /// The layout chunks for content placement
    pub chunks: Rc<[Rect]>,
}

/// Render a standard modal frame: centered, cleared background, titled
/// border, and a vertical layout from `constraints`.
pub fn render_modal_frame(
    frame: &mut Frame,
    title: &str,
    width: u16,
    height: u16,
    border_color: Color,
    constraints: &[Constraint],
) -> ModalFrame {
    let modal_area = centered_rect(width, height, frame.area());

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", title));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    ModalFrame { inner, chunks }
}

/// Builder for one line of key-binding help with consistent styling.
pub struct HelpText {
    pub(crate) items: Vec<(String, Color, String)>,
    separator: String,
}

impl HelpText {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            separator: "  ".to_string(),
        }
    }

    /// Add a key-description pair, e.g. `.key("[Enter]", Color::Green, "Confirm")`.
    pub fn key(mut self, key: &str, color: Color, desc: &str) -> Self {
        self.items.push((key.to_string(), color, desc.to_string()));
        self
    }

    pub fn build(self) -> Paragraph<'static> {
        let mut spans: Vec<Span> = Vec::new();

        for (i, (key, color, desc)) in self.items.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(self.separator.clone()));
            }
            spans.push(Span::styled(key, Style::default().fg(color)));
            spans.push(Span::raw(format!(" {}", desc)));
        }

        Paragraph::new(Line::from(spans))
    }

    pub fn build_centered(self) -> Paragraph<'static> {
        self.build().alignment(Alignment::Center)
    }
}

impl Default for HelpText {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for multi-line help text.
pub struct MultiLineHelp {
    lines: Vec<Vec<(String, Color, String)>>,
}

impl MultiLineHelp {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn line(mut self, help: HelpText) -> Self {
        self.lines.push(help.items);
        self
    }

    pub fn build(self) -> Paragraph<'static> {
        let separator = "  ";
        let lines: Vec<Line> = self
            .lines
            .into_iter()
            .map(|items| {
                let mut spans: Vec<Span> = Vec::new();
                for (i, (key, color, desc)) in items.into_iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::raw(separator.to_string()));
                    }
                    spans.push(Span::styled(key, Style::default().fg(color)));
                    spans.push(Span::raw(format!(" {}", desc)));
                }
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
    }
}

impl Default for MultiLineHelp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_scroll_short_text() {
        let result = calculate_scroll("hello", 3, 20);
        assert_eq!(result.display_value, "hello");
        assert_eq!(result.cursor_pos, 3);
    }

    #[test]
    fn test_calculate_scroll_long_text() {
        let value = "a rather long address that needs horizontal scrolling";
        let result = calculate_scroll(value, 25, 15);
        assert!(result.display_value.len() <= 13); // 15 - 2
        assert!(result.cursor_pos < result.display_value.len() + 1);
    }

    #[test]
    fn test_calculate_scroll_multibyte_text() {
        let value = "شارع التسعين الجنوبي، التجمع الخامس، القاهرة";
        let chars = value.chars().count();
        let result = calculate_scroll(value, chars, 15);
        assert_eq!(result.display_value.chars().count(), 13);
        assert_eq!(result.cursor_pos, 13);
    }

    #[test]
    fn test_render_cursor_line_middle() {
        let line = render_cursor_line("hello", 2, "");
        assert_eq!(line.spans.len(), 5); // h, e, [l], l, o
    }

    #[test]
    fn test_render_cursor_line_end() {
        let line = render_cursor_line("hi", 2, "");
        assert_eq!(line.spans.len(), 3); // h, i, [cursor block]
    }
}
