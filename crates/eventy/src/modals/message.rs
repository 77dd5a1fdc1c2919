//! Dismissable notice, success or error.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Constraint,
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
};

use crate::state::MessageModal;
use crate::util::styles::{ERROR_COLOR, SUCCESS_COLOR};

use super::ModalResult;
use super::helpers::{HelpText, render_modal_frame};

const NOTICE_WIDTH: u16 = 50;
// Border, two spacers, and the help row around the message body.
const NOTICE_CHROME: u16 = 6;

pub fn render_message_modal(frame: &mut Frame, modal: &MessageModal) {
    let wrap_width = NOTICE_WIDTH.saturating_sub(4).max(1) as usize;
    let body_lines = modal.message.chars().count().div_ceil(wrap_width).max(1) as u16;
    let height = (NOTICE_CHROME + body_lines).min(frame.area().height.saturating_sub(2));

    let accent = if modal.is_error {
        ERROR_COLOR
    } else {
        SUCCESS_COLOR
    };

    let mf = render_modal_frame(
        frame,
        &modal.title,
        NOTICE_WIDTH,
        height,
        accent,
        &[
            Constraint::Length(1), // Spacing
            Constraint::Min(1),    // Message
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Help text
        ],
    );

    let body_style = if modal.is_error {
        Style::default().fg(ERROR_COLOR)
    } else {
        Style::default()
    };
    frame.render_widget(
        Paragraph::new(modal.message.as_str())
            .style(body_style)
            .wrap(Wrap { trim: true }),
        mf.chunks[1],
    );

    let help = HelpText::new()
        .key("[Enter/Esc]", Color::Yellow, "Dismiss")
        .build();
    frame.render_widget(help, mf.chunks[3]);
}

pub fn handle_message_key(key: KeyEvent) -> ModalResult {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
        ModalResult::Cancelled
    } else {
        ModalResult::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_keys() {
        assert_eq!(
            handle_message_key(KeyEvent::from(KeyCode::Enter)),
            ModalResult::Cancelled
        );
        assert_eq!(
            handle_message_key(KeyEvent::from(KeyCode::Esc)),
            ModalResult::Cancelled
        );
        assert_eq!(
            handle_message_key(KeyEvent::from(KeyCode::Char('x'))),
            ModalResult::Continue
        );
    }
}
