//! Yes/no confirmation, currently only in front of joining an event.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Constraint,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::state::ConfirmModal;
use crate::util::styles::{ERROR_COLOR, SUCCESS_COLOR};

use super::ModalResult;
use super::helpers::{HelpText, render_modal_frame};

const CONFIRM_WIDTH: u16 = 60;
const CONFIRM_HEIGHT: u16 = 10;

pub fn render_confirm_modal(frame: &mut Frame, modal: &ConfirmModal) {
    let mf = render_modal_frame(
        frame,
        &modal.title,
        CONFIRM_WIDTH,
        CONFIRM_HEIGHT,
        ERROR_COLOR,
        &[
            Constraint::Length(1), // Spacing
            Constraint::Min(2),    // Message
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Help text
        ],
    );

    let message = Paragraph::new(Line::from(Span::styled(
        &modal.message,
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: true });
    frame.render_widget(message, mf.chunks[1]);

    let help = HelpText::new()
        .key("[y]", ERROR_COLOR, "Confirm")
        .key("[n/Esc]", SUCCESS_COLOR, "Cancel")
        .build();
    frame.render_widget(help, mf.chunks[3]);
}

pub fn handle_confirm_key(key: KeyEvent, modal: &ConfirmModal) -> ModalResult {
    match key.code {
        KeyCode::Char('y' | 'Y') => ModalResult::Confirmed(modal.action, Vec::new()),
        KeyCode::Char('n' | 'N') | KeyCode::Esc => ModalResult::Cancelled,
        _ => ModalResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{BrowseAction, ModalAction};

    fn join_confirm() -> ConfirmModal {
        ConfirmModal::new(
            "Join Event",
            "Join \"Cairo Tech Meetup\"?",
            ModalAction::Browse(BrowseAction::ConfirmAttend { index: 0 }),
        )
    }

    #[test]
    fn test_y_confirms_with_carried_action() {
        let result = handle_confirm_key(KeyEvent::from(KeyCode::Char('y')), &join_confirm());
        assert_eq!(
            result,
            ModalResult::Confirmed(
                ModalAction::Browse(BrowseAction::ConfirmAttend { index: 0 }),
                Vec::new()
            )
        );
    }

    #[test]
    fn test_n_and_escape_cancel() {
        let modal = join_confirm();
        assert_eq!(
            handle_confirm_key(KeyEvent::from(KeyCode::Char('n')), &modal),
            ModalResult::Cancelled
        );
        assert_eq!(
            handle_confirm_key(KeyEvent::from(KeyCode::Esc), &modal),
            ModalResult::Cancelled
        );
    }
}
