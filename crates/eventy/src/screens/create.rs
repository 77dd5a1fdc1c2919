//! The four-step event creation screen.
//!
//! A step sidebar on the left tracks progress; the right panel renders the
//! current step. Advancing with `n` runs that step's validator, stepping back
//! with `p` never does. Field edits happen in modals and only land in the
//! draft on confirm.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use eventy_core::geo::{CURSOR_STEP, CURSOR_STEP_COARSE};
use eventy_core::{Category, ImageField, WizardStep};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
};

use crate::actions;
use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_coord;
use crate::util::styles::{
    FOCUS_COLOR, HEADER_COLOR, HELP_COLOR, SUCCESS_COLOR, focused_block, focused_block_with_help,
};

pub struct CreateScreen;

impl CreateScreen {
    pub fn new() -> Self {
        Self
    }

    fn open_step_editor(&self, state: &mut AppState) {
        state.modal = match state.wizard.step() {
            WizardStep::BasicInfo => actions::open_basic_info_form(state),
            WizardStep::Details => actions::open_details_form(state),
            WizardStep::Location => {
                actions::select_map_point(state);
                return;
            }
            WizardStep::Review => {
                actions::handle_submit(state).apply(state);
                return;
            }
        };
    }

    fn handle_details_key(&self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('c') => {
                state.modal = actions::open_category_picker(state);
                EventResult::Handled
            }
            KeyCode::Char('v') => {
                state.modal = actions::open_visibility_picker(state);
                EventResult::Handled
            }
            KeyCode::Char('r') => {
                state.modal = actions::open_recurrence_picker(state);
                EventResult::Handled
            }
            KeyCode::Char('i') => {
                state.modal = actions::open_image_prompt(ImageField::Picture);
                EventResult::Handled
            }
            KeyCode::Char('o') => {
                state.modal = actions::open_image_prompt(ImageField::CoverImage);
                EventResult::Handled
            }
            KeyCode::Char('x') => {
                state.wizard.remove_image(ImageField::Picture);
                EventResult::Handled
            }
            KeyCode::Char('X') => {
                state.wizard.remove_image(ImageField::CoverImage);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn handle_location_key(&self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
            CURSOR_STEP_COARSE
        } else {
            CURSOR_STEP
        };
        let cursor = &mut state.create_state.map_cursor;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => cursor.nudge(step, 0.0),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => cursor.nudge(-step, 0.0),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => cursor.nudge(0.0, -step),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => cursor.nudge(0.0, step),
            KeyCode::Char('s') => state.modal = actions::open_search_modal(),
            _ => return EventResult::NotHandled,
        }
        EventResult::Handled
    }

    fn render_sidebar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let current = state.wizard.step();
        let items: Vec<ListItem> = WizardStep::ALL
            .iter()
            .map(|step| {
                let marker = if step.index() < current.index() {
                    "✓"
                } else if *step == current {
                    "▶"
                } else {
                    " "
                };
                let line = format!("{marker} {}. {}", step.index() + 1, step.title());
                let style = if *step == current {
                    Style::default()
                        .fg(FOCUS_COLOR)
                        .add_modifier(Modifier::BOLD)
                } else if step.index() < current.index() {
                    Style::default().fg(SUCCESS_COLOR)
                } else {
                    Style::default().fg(HELP_COLOR)
                };
                ListItem::new(line).style(style)
            })
            .collect();

        let list = List::new(items).block(focused_block("Steps", false));
        frame.render_widget(list, area);
    }

    fn render_step(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        match state.wizard.step() {
            WizardStep::BasicInfo => self.render_basic_info(frame, area, state),
            WizardStep::Details => self.render_details(frame, area, state),
            WizardStep::Location => self.render_location(frame, area, state),
            WizardStep::Review => self.render_review(frame, area, state),
        }
    }

    fn render_basic_info(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let draft = state.wizard.draft();
        let lines = vec![
            field_line("Name", &draft.name),
            field_line("Description", &draft.description),
            field_line("Host Company", &draft.host_company),
            Line::raw(""),
            help_line("Enter: edit fields | n: next step"),
        ];
        let block = focused_block("Basic Info", true);
        frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
    }

    fn render_details(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let draft = state.wizard.draft();
        let category = match &draft.category {
            Some(Category::Predefined(name)) => name.clone(),
            Some(Category::Custom(text)) if text.is_empty() => "Other (unnamed)".to_string(),
            Some(Category::Custom(text)) => format!("Other: {text}"),
            None => String::new(),
        };
        let image_label = |image: &Option<eventy_core::AttachedImage>| match image {
            Some(img) => format!("{} ({} KB)", img.file_name, img.size() / 1024),
            None => "(none)".to_string(),
        };
        let lines = vec![
            field_line("Category", &category),
            field_line("Date", &draft.date),
            field_line("Time", &draft.time),
            field_line("Price (EGP)", &draft.price),
            field_line("Visibility", draft.visibility.label()),
            field_line("Recurrence", draft.recurrence.label()),
            field_line("Event image", &image_label(&draft.picture)),
            field_line("Cover image", &image_label(&draft.cover_image)),
            Line::raw(""),
            help_line("Enter: edit date/time/price | c: category | v: visibility | r: recurrence"),
            help_line("i/o: attach image/cover | x/X: remove image/cover | n/p: step"),
        ];
        let block = focused_block("Details", true);
        frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
    }

    fn render_location(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let cursor = state.create_state.map_cursor.position;
        let selected = match &state.wizard.draft().location {
            Some(loc) => vec![
                field_line("Selected", &loc.address),
                field_line(
                    "Coordinates",
                    &format!(
                        "{}, {}",
                        format_coord(loc.latitude),
                        format_coord(loc.longitude)
                    ),
                ),
            ],
            None => vec![Line::styled(
                "No location selected yet",
                Style::default().fg(HELP_COLOR),
            )],
        };

        let mut lines = vec![
            field_line(
                "Cursor",
                &format!(
                    "{}, {}",
                    format_coord(cursor.latitude),
                    format_coord(cursor.longitude)
                ),
            ),
            Line::raw(""),
        ];
        lines.extend(selected);
        lines.push(Line::raw(""));
        lines.push(help_line("arrows/hjkl: move cursor (Shift: fast)"));
        lines.push(help_line("Enter: select point | s: search address | n/p: step"));

        let block = focused_block_with_help("Location", true, "Egypt only");
        frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
    }

    fn render_review(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let draft = state.wizard.draft();
        let category = draft
            .category
            .as_ref()
            .map(|c| c.label().to_string())
            .unwrap_or_default();
        let location = draft
            .location
            .as_ref()
            .map(|loc| loc.address.clone())
            .unwrap_or_default();

        let mut lines = vec![
            Line::styled(
                "Review your event",
                Style::default()
                    .fg(HEADER_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            field_line("Name", &draft.name),
            field_line("Description", &draft.description),
            field_line("Host Company", &draft.host_company),
            field_line("Category", &category),
            field_line("Date", &draft.date),
            field_line("Time", &draft.time),
            field_line("Price (EGP)", &draft.price),
            field_line("Location", &location),
            field_line("Visibility", draft.visibility.label()),
            field_line("Recurrence", draft.recurrence.label()),
        ];
        if let Some(image) = &draft.picture {
            lines.push(field_line("Event image", &image.file_name));
        }
        if let Some(image) = &draft.cover_image {
            lines.push(field_line("Cover image", &image.file_name));
        }
        lines.push(Line::raw(""));
        lines.push(help_line("Enter: create event | p: back to edit"));

        let block = focused_block("Review", true);
        frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
    }
}

impl Default for CreateScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for CreateScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        // Step-local keys take priority over navigation.
        let step_result = match state.wizard.step() {
            WizardStep::Details => self.handle_details_key(key, state),
            WizardStep::Location => self.handle_location_key(key, state),
            _ => EventResult::NotHandled,
        };
        if step_result == EventResult::Handled {
            return step_result;
        }

        match key.code {
            KeyCode::Enter => {
                self.open_step_editor(state);
                EventResult::Handled
            }
            KeyCode::Char('n') => {
                if let Err(report) = state.wizard.go_next() {
                    state.set_error(report.message.to_string());
                }
                EventResult::Handled
            }
            KeyCode::Char('p') => {
                state.wizard.go_back();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let [sidebar, content] =
            Layout::horizontal([Constraint::Length(22), Constraint::Min(0)]).areas(area);
        self.render_sidebar(frame, sidebar, state);
        self.render_step(frame, content, state);
    }
}

fn field_line<'a>(label: &'a str, value: &str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(HEADER_COLOR)),
        Span::raw(value.to_string()),
    ])
}

fn help_line(text: &str) -> Line<'_> {
    Line::styled(text, Style::default().fg(HELP_COLOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ModalState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_next_blocked_by_validation() {
        let mut screen = CreateScreen::new();
        let mut state = AppState::default();
        screen.handle_key(key(KeyCode::Char('n')), &mut state);
        assert_eq!(state.wizard.step(), WizardStep::BasicInfo);
        assert_eq!(
            state.error_message.as_deref(),
            Some("Please fill all required fields")
        );
    }

    #[test]
    fn test_back_never_blocked() {
        let mut screen = CreateScreen::new();
        let mut state = AppState::default();
        {
            let draft = state.wizard.draft_mut();
            draft.name = "A".to_string();
            draft.description = "B".to_string();
            draft.host_company = "C".to_string();
        }
        screen.handle_key(key(KeyCode::Char('n')), &mut state);
        assert_eq!(state.wizard.step(), WizardStep::Details);
        state.wizard.draft_mut().name.clear();
        screen.handle_key(key(KeyCode::Char('p')), &mut state);
        assert_eq!(state.wizard.step(), WizardStep::BasicInfo);
    }

    #[test]
    fn test_enter_opens_basic_info_form() {
        let mut screen = CreateScreen::new();
        let mut state = AppState::default();
        screen.handle_key(key(KeyCode::Enter), &mut state);
        assert!(matches!(state.modal, ModalState::Form(_)));
    }

    #[test]
    fn test_location_keys_move_cursor() {
        let mut screen = CreateScreen::new();
        let mut state = AppState::default();
        {
            let draft = state.wizard.draft_mut();
            draft.name = "A".to_string();
            draft.description = "B".to_string();
            draft.host_company = "C".to_string();
            draft.date = "2025-06-15".to_string();
        }
        state.wizard.select_category("Technology");
        screen.handle_key(key(KeyCode::Char('n')), &mut state);
        screen.handle_key(key(KeyCode::Char('n')), &mut state);
        assert_eq!(state.wizard.step(), WizardStep::Location);

        let before = state.create_state.map_cursor.position;
        screen.handle_key(key(KeyCode::Up), &mut state);
        let after = state.create_state.map_cursor.position;
        assert!((after.latitude - before.latitude - CURSOR_STEP).abs() < 1e-9);
    }
}
