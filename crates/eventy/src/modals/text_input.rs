//! Single-line text prompt, used for address search, custom categories, and
//! image paths.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::TextInputModal;
use crate::util::styles::SUCCESS_COLOR;

use super::ModalResult;
use super::helpers::{HelpText, calculate_scroll, render_cursor_line, render_modal_frame};

const PROMPT_WIDTH: u16 = 60;
const PROMPT_HEIGHT: u16 = 9;

pub fn render_text_input_modal(frame: &mut Frame, modal: &TextInputModal) {
    let mf = render_modal_frame(
        frame,
        &modal.title,
        PROMPT_WIDTH,
        PROMPT_HEIGHT,
        Color::Cyan,
        &[
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Prompt
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Input field
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Help text
        ],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            &modal.prompt,
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        mf.chunks[1],
    );

    // "> " prefix eats two columns of the input row
    let input_width = (mf.chunks[3].width as usize).saturating_sub(2);
    let scrolled = calculate_scroll(&modal.value, modal.cursor_chars(), input_width + 2);
    frame.render_widget(
        Paragraph::new(render_cursor_line(
            &scrolled.display_value,
            scrolled.cursor_pos,
            "> ",
        )),
        mf.chunks[3],
    );

    let help = HelpText::new()
        .key("[Enter]", SUCCESS_COLOR, "Confirm")
        .key("[Esc]", Color::Yellow, "Cancel")
        .build();
    frame.render_widget(help, mf.chunks[5]);
}

pub fn handle_text_input_key(key: KeyEvent, modal: &mut TextInputModal) -> ModalResult {
    match key.code {
        KeyCode::Enter => {
            return ModalResult::Confirmed(modal.action, vec![modal.value.clone()]);
        }
        KeyCode::Esc => return ModalResult::Cancelled,
        KeyCode::Backspace => modal.backspace(),
        KeyCode::Delete => modal.delete(),
        KeyCode::Left => modal.move_cursor_left(),
        KeyCode::Right => modal.move_cursor_right(),
        KeyCode::Home => modal.move_cursor_home(),
        KeyCode::End => modal.move_cursor_end(),
        KeyCode::Char(c) => modal.insert_char(c),
        _ => {}
    }
    ModalResult::Continue
}
