use super::{Component, EventResult};
use crate::state::{AppState, TabId};
use crate::util::styles::{BUSY_COLOR, ERROR_COLOR, HELP_COLOR, SUCCESS_COLOR};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn help_text(state: &AppState) -> &'static str {
        match state.active_tab {
            TabId::Create => {
                "n/p: next/prev step | Enter: edit | 1-3: tabs | Esc: clear notice | q: quit"
            }
            TabId::Events => {
                "j/k: navigate | Tab: panel | r: refresh | f: favorite | a: attend | q: quit"
            }
            TabId::Favorites => "j/k: navigate | r: refresh | f: unfavorite | q: quit",
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut spans = Vec::new();

        if state.is_busy() {
            spans.push(Span::styled("⏳ working… ", Style::default().fg(BUSY_COLOR)));
        }

        if let Some(error) = &state.error_message {
            spans.push(Span::styled("Error: ", Style::default().fg(ERROR_COLOR)));
            spans.push(Span::raw(error.as_str()));
        } else if let Some(status) = &state.status_message {
            spans.push(Span::styled(
                status.as_str(),
                Style::default().fg(SUCCESS_COLOR),
            ));
        } else {
            spans.push(Span::styled(
                Self::help_text(state),
                Style::default().fg(HELP_COLOR),
            ));
        }

        let paragraph =
            Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
