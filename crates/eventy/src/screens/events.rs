//! Browse screen: the public event list with a detail panel.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
};

use crate::actions;
use crate::api::types::EventSummary;
use crate::components::lists::{calculate_centered_scroll, handle_list_navigation};
use crate::components::{Component, EventResult};
use crate::state::{AppState, FocusedPanel};
use crate::util::format::{format_event_date, format_price, truncate};
use crate::util::styles::{FOCUS_COLOR, HEADER_COLOR, HELP_COLOR, SUCCESS_COLOR, focused_block};

pub struct EventsScreen;

impl EventsScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.events_state.focused_panel == FocusedPanel::Left;
        let block = focused_block(&format!("Events ({})", state.events.len()), focused);

        if state.events.is_empty() {
            let text = if state.events_loaded {
                "No events found"
            } else {
                "Press r to fetch events"
            };
            frame.render_widget(
                Paragraph::new(text)
                    .style(Style::default().fg(HELP_COLOR))
                    .block(block),
                area,
            );
            return;
        }

        let items: Vec<ListItem> = state
            .events
            .iter()
            .map(|event| {
                let favorite = if state.is_favorite(&event.id) { "★ " } else { "" };
                ListItem::new(Line::from(vec![
                    Span::styled(favorite.to_string(), Style::default().fg(FOCUS_COLOR)),
                    Span::raw(truncate(&event.name, 28)),
                    Span::styled(
                        format!("  {}", format_price(&event.price)),
                        Style::default().fg(SUCCESS_COLOR),
                    ),
                ]))
            })
            .collect();

        let visible = area.height.saturating_sub(2) as usize;
        let offset = calculate_centered_scroll(
            state.events_state.selected_index,
            state.events.len(),
            visible,
        );
        let mut list_state = ListState::default()
            .with_selected(Some(state.events_state.selected_index))
            .with_offset(offset);

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.events_state.focused_panel == FocusedPanel::Right;
        let block = focused_block("Details", focused);

        let Some(event) = state.selected_event() else {
            frame.render_widget(
                Paragraph::new("Select an event")
                    .style(Style::default().fg(HELP_COLOR))
                    .block(block),
                area,
            );
            return;
        };

        frame.render_widget(
            Paragraph::new(detail_lines(event, state.is_favorite(&event.id)))
                .block(block)
                .wrap(Wrap { trim: false }),
            area,
        );
    }
}

impl Default for EventsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for EventsScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if handle_list_navigation(
            &key,
            &mut state.events_state.selected_index,
            state.events.len(),
        ) {
            return EventResult::Handled;
        }

        match key.code {
            KeyCode::Tab => {
                state.events_state.focused_panel = match state.events_state.focused_panel {
                    FocusedPanel::Left => FocusedPanel::Right,
                    FocusedPanel::Right => FocusedPanel::Left,
                };
                EventResult::Handled
            }
            KeyCode::Char('r') => {
                actions::refresh_events(state);
                EventResult::Handled
            }
            KeyCode::Char('f') => {
                actions::toggle_favorite(state);
                EventResult::Handled
            }
            KeyCode::Char('a') => {
                if let Some(modal) = actions::open_attend_confirm(state) {
                    state.modal = modal;
                }
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let [list, detail] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(area);
        self.render_list(frame, list, state);
        self.render_detail(frame, detail, state);
    }
}

pub(super) fn detail_lines(event: &EventSummary, is_favorite: bool) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(
            event.name.clone(),
            Style::default()
                .fg(HEADER_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        detail_line("Category", &event.category),
        detail_line("Date", &format_event_date(&event.date)),
        detail_line("Price", &format_price(&event.price)),
    ];
    if let Some(location) = &event.location {
        lines.push(detail_line("Location", location));
    }
    if is_favorite {
        lines.push(Line::styled(
            "★ In your favorites",
            Style::default().fg(FOCUS_COLOR),
        ));
    }
    if !event.description.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::raw(event.description.clone()));
    }
    lines
}

fn detail_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(HEADER_COLOR)),
        Span::raw(value.to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, name: &str) -> EventSummary {
        serde_json::from_str(&format!(r#"{{"_id": "{id}", "name": "{name}"}}"#)).unwrap()
    }

    #[test]
    fn test_tab_toggles_focused_panel() {
        let mut screen = EventsScreen::new();
        let mut state = AppState::default();
        screen.handle_key(KeyEvent::from(KeyCode::Tab), &mut state);
        assert_eq!(state.events_state.focused_panel, FocusedPanel::Right);
        screen.handle_key(KeyEvent::from(KeyCode::Tab), &mut state);
        assert_eq!(state.events_state.focused_panel, FocusedPanel::Left);
    }

    #[test]
    fn test_navigation_moves_selection() {
        let mut screen = EventsScreen::new();
        let mut state = AppState::default();
        state.events = vec![event("e1", "A"), event("e2", "B")];
        screen.handle_key(KeyEvent::from(KeyCode::Char('j')), &mut state);
        assert_eq!(state.events_state.selected_index, 1);
    }

    #[test]
    fn test_refresh_queues_fetch() {
        let mut screen = EventsScreen::new();
        let mut state = AppState::default();
        screen.handle_key(KeyEvent::from(KeyCode::Char('r')), &mut state);
        assert!(matches!(
            state.pending_request,
            Some(crate::worker::NetRequest::FetchEvents)
        ));
    }
}
