//! Multi-field form, used by the wizard step editors and the login dialog.
//!
//! Two key modes: navigation moves between fields, editing types into the
//! focused one. Submit is reachable from both.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{FieldType, FormField, FormModal};
use crate::util::styles::{FOCUS_COLOR, HELP_COLOR, SUCCESS_COLOR};

use super::ModalResult;
use super::helpers::{HelpText, MultiLineHelp, calculate_scroll, render_cursor_line, render_modal_frame};

const FORM_WIDTH: u16 = 70;
// Label row plus a bordered input box per field.
const FIELD_ROWS: u16 = 4;

pub fn render_form_modal(frame: &mut Frame, modal: &FormModal) {
    let height = (modal.fields.len() as u16 * FIELD_ROWS + 10).min(35);

    let mut constraints = vec![Constraint::Length(1)]; // Top spacing
    constraints.extend(modal.fields.iter().map(|_| Constraint::Length(FIELD_ROWS)));
    constraints.push(Constraint::Min(1)); // Spacing
    constraints.push(Constraint::Length(2)); // Help text (2 lines)

    let mf = render_modal_frame(
        frame,
        &modal.title,
        FORM_WIDTH,
        height,
        Color::Cyan,
        &constraints,
    );

    for (idx, field) in modal.fields.iter().enumerate() {
        let is_focused = idx == modal.focused_field;
        render_field(frame, mf.chunks[idx + 1], field, is_focused, modal.editing);
    }

    let help = if modal.editing {
        MultiLineHelp::new()
            .line(
                HelpText::new()
                    .key("EDITING:", Color::Cyan, "Type to enter text")
                    .key("[F10/Ctrl+S]", Color::Cyan, "Submit"),
            )
            .line(
                HelpText::new()
                    .key("[Enter]", SUCCESS_COLOR, "Done field")
                    .key("[Esc]", Color::Yellow, "Cancel"),
            )
            .build()
    } else {
        MultiLineHelp::new()
            .line(
                HelpText::new()
                    .key("[j/k/Tab]", HELP_COLOR, "Navigate")
                    .key("[Enter]", SUCCESS_COLOR, "Edit field"),
            )
            .line(
                HelpText::new()
                    .key("[F10/Ctrl+S]", Color::Cyan, "Submit")
                    .key("[Esc]", Color::Yellow, "Cancel"),
            )
            .build()
    };
    frame.render_widget(help, mf.chunks[modal.fields.len() + 2]);
}

fn render_field(frame: &mut Frame, area: Rect, field: &FormField, is_focused: bool, is_editing: bool) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(3)])
        .split(area);

    let label_style = if is_focused {
        Style::default()
            .fg(FOCUS_COLOR)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(&field.label, label_style))),
        rows[0],
    );

    let (border_color, fg_color) = match field.field_type {
        FieldType::ReadOnly => (HELP_COLOR, HELP_COLOR),
        _ if is_focused && is_editing => (Color::Cyan, Color::White),
        _ if is_focused => (FOCUS_COLOR, Color::White),
        _ => (HELP_COLOR, Color::White),
    };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let input_inner = input_block.inner(rows[1]);
    frame.render_widget(input_block, rows[1]);

    if is_focused && is_editing && field.field_type != FieldType::ReadOnly {
        let shown = display_value(field);
        let input_width = (input_inner.width as usize).saturating_sub(1);
        let scrolled = calculate_scroll(&shown, field.cursor_chars(), input_width + 2);
        frame.render_widget(
            Paragraph::new(render_cursor_line(
                &scrolled.display_value,
                scrolled.cursor_pos,
                "",
            )),
            input_inner,
        );
    } else {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                display_value(field),
                Style::default().fg(fg_color),
            ))),
            input_inner,
        );
    }
}

fn display_value(field: &FormField) -> String {
    match field.field_type {
        // Password values never render in the clear
        FieldType::Password => "•".repeat(field.value.chars().count()),
        _ => field.value.clone(),
    }
}

pub fn handle_form_key(key: KeyEvent, modal: &mut FormModal) -> ModalResult {
    if is_submit_key(key) {
        return ModalResult::Confirmed(modal.action, field_values(modal));
    }
    if modal.editing {
        handle_editing_key(key, modal)
    } else {
        handle_navigation_key(key, modal)
    }
}

/// Submit works from both editing and navigation mode; Ctrl+Enter is
/// unreliable in some terminals, so Ctrl+S and F10 are accepted too.
fn is_submit_key(key: KeyEvent) -> bool {
    matches!(
        (key.code, key.modifiers.contains(KeyModifiers::CONTROL)),
        (KeyCode::Enter, true) | (KeyCode::Char('s'), true)
    ) || key.code == KeyCode::F(10)
}

fn handle_editing_key(key: KeyEvent, modal: &mut FormModal) -> ModalResult {
    let field = &mut modal.fields[modal.focused_field];
    match key.code {
        KeyCode::Enter | KeyCode::Esc => modal.editing = false,
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Left => field.move_cursor_left(),
        KeyCode::Right => field.move_cursor_right(),
        KeyCode::Home => field.move_cursor_home(),
        KeyCode::End => field.move_cursor_end(),
        KeyCode::Char(c) if field.field_type != FieldType::ReadOnly => field.insert_char(c),
        _ => {}
    }
    ModalResult::Continue
}

fn handle_navigation_key(key: KeyEvent, modal: &mut FormModal) -> ModalResult {
    match key.code {
        KeyCode::Enter | KeyCode::Char('e') => {
            let field = &mut modal.fields[modal.focused_field];
            if field.field_type != FieldType::ReadOnly {
                field.move_cursor_end();
                modal.editing = true;
            }
            ModalResult::Continue
        }
        KeyCode::Esc => ModalResult::Cancelled,
        KeyCode::Tab | KeyCode::Char('j') | KeyCode::Down => {
            focus_step(modal, true);
            ModalResult::Continue
        }
        KeyCode::BackTab | KeyCode::Char('k') | KeyCode::Up => {
            focus_step(modal, false);
            ModalResult::Continue
        }
        _ => ModalResult::Continue,
    }
}

/// Move focus to the next editable field, skipping read-only ones.
fn focus_step(modal: &mut FormModal, forward: bool) {
    let count = modal.fields.len();
    let start = modal.focused_field;
    loop {
        modal.focused_field = if forward {
            (modal.focused_field + 1) % count
        } else {
            modal.focused_field.checked_sub(1).unwrap_or(count - 1)
        };
        if modal.fields[modal.focused_field].field_type != FieldType::ReadOnly
            || modal.focused_field == start
        {
            break;
        }
    }
}

/// One value per field, in declaration order, carried verbatim.
fn field_values(modal: &FormModal) -> Vec<String> {
    modal.fields.iter().map(|f| f.value.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ModalAction;

    fn login_form() -> FormModal {
        FormModal::new(
            "Log In",
            vec![
                FormField::text("Email", "nour@example.com"),
                FormField::password("Password"),
            ],
            ModalAction::LOGIN,
        )
    }

    #[test]
    fn test_password_field_renders_masked() {
        let mut form = login_form();
        form.fields[1].value = "secret".to_string();
        assert_eq!(display_value(&form.fields[1]), "••••••");
        assert_eq!(display_value(&form.fields[0]), "nour@example.com");
    }

    #[test]
    fn test_field_values_keep_delimiter_characters() {
        let mut form = login_form();
        form.fields[1].value = "hun|ter2".to_string();
        assert_eq!(
            field_values(&form),
            vec!["nour@example.com".to_string(), "hun|ter2".to_string()]
        );
    }

    #[test]
    fn test_f10_submits_from_navigation_mode() {
        let mut form = login_form();
        let result = handle_form_key(KeyEvent::from(KeyCode::F(10)), &mut form);
        assert!(matches!(
            result,
            ModalResult::Confirmed(ModalAction::LOGIN, _)
        ));
    }

    #[test]
    fn test_tab_cycles_fields() {
        let mut form = login_form();
        assert_eq!(form.focused_field, 0);
        handle_form_key(KeyEvent::from(KeyCode::Tab), &mut form);
        assert_eq!(form.focused_field, 1);
        handle_form_key(KeyEvent::from(KeyCode::Tab), &mut form);
        assert_eq!(form.focused_field, 0);
    }

    #[test]
    fn test_editing_accepts_multibyte_input() {
        let mut form = login_form();
        handle_form_key(KeyEvent::from(KeyCode::Enter), &mut form);
        assert!(form.editing);
        handle_form_key(KeyEvent::from(KeyCode::Char('م')), &mut form);
        handle_form_key(KeyEvent::from(KeyCode::Char('ص')), &mut form);
        handle_form_key(KeyEvent::from(KeyCode::Backspace), &mut form);
        assert_eq!(form.fields[0].value, "nour@example.comم");
    }
}
