//! Option picker for categories, visibility, and recurrence.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
};

use crate::state::PickerModal;
use crate::util::styles::{FOCUS_COLOR, HELP_COLOR, SUCCESS_COLOR};

use super::ModalResult;
use super::helpers::{HelpText, MultiLineHelp, render_modal_frame};

const PICKER_WIDTH: u16 = 60;

pub fn render_picker_modal(frame: &mut Frame, modal: &PickerModal) {
    let list_height = (modal.options.len() as u16).clamp(3, 12);
    // List plus title, borders, help, and padding.
    let height = list_height + 7;

    let mf = render_modal_frame(
        frame,
        &modal.title,
        PICKER_WIDTH,
        height,
        Color::Cyan,
        &[
            Constraint::Length(1), // Spacing
            Constraint::Min(1),    // Options list
            Constraint::Length(1), // Spacing
            Constraint::Length(2), // Help text (2 lines)
        ],
    );

    let items: Vec<ListItem> = modal
        .options
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let highlighted = idx == modal.selected_index;
            let marker = if highlighted { "> " } else { "  " };
            let style = if highlighted {
                Style::default()
                    .fg(FOCUS_COLOR)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!("{marker}{option}"),
                style,
            )))
        })
        .collect();
    frame.render_widget(List::new(items), mf.chunks[1]);

    let help = MultiLineHelp::new()
        .line(HelpText::new().key("[j/k/↑/↓]", HELP_COLOR, "Navigate"))
        .line(
            HelpText::new()
                .key("[Enter]", SUCCESS_COLOR, "Select")
                .key("[Esc]", Color::Yellow, "Cancel"),
        )
        .build();
    frame.render_widget(help, mf.chunks[3]);
}

pub fn handle_picker_key(key: KeyEvent, modal: &mut PickerModal) -> ModalResult {
    let option_count = modal.options.len();
    match key.code {
        KeyCode::Enter => {
            return match modal.options.get(modal.selected_index) {
                Some(selected) => ModalResult::Confirmed(modal.action, vec![selected.clone()]),
                None => ModalResult::Cancelled,
            };
        }
        KeyCode::Esc => return ModalResult::Cancelled,
        KeyCode::Char('j') | KeyCode::Down if option_count > 0 => {
            modal.selected_index = (modal.selected_index + 1) % option_count;
        }
        KeyCode::Char('k') | KeyCode::Up if option_count > 0 => {
            modal.selected_index = modal
                .selected_index
                .checked_sub(1)
                .unwrap_or(option_count - 1);
        }
        KeyCode::Home => modal.selected_index = 0,
        KeyCode::End if option_count > 0 => modal.selected_index = option_count - 1,
        _ => {}
    }
    ModalResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ModalAction;
    use eventy_core::category::picker_options;

    #[test]
    fn test_enter_confirms_highlighted_option() {
        let mut modal = PickerModal::new(
            "Category",
            picker_options().iter().map(|s| s.to_string()).collect(),
            ModalAction::PICK_CATEGORY,
        );
        modal.selected_index = 1;
        let result = handle_picker_key(KeyEvent::from(KeyCode::Enter), &mut modal);
        assert_eq!(
            result,
            ModalResult::Confirmed(ModalAction::PICK_CATEGORY, vec!["Technology".to_string()])
        );
    }

    #[test]
    fn test_navigation_wraps_both_ways() {
        let mut modal = PickerModal::new(
            "Visibility",
            vec!["Public".to_string(), "Private".to_string()],
            ModalAction::Wizard(crate::state::WizardAction::PickVisibility),
        );
        handle_picker_key(KeyEvent::from(KeyCode::Char('k')), &mut modal);
        assert_eq!(modal.selected_index, 1);
        handle_picker_key(KeyEvent::from(KeyCode::Char('j')), &mut modal);
        assert_eq!(modal.selected_index, 0);
    }
}
