//! Favorites screen: the signed-in user's saved events.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
};

use crate::actions;
use crate::components::lists::{calculate_centered_scroll, handle_list_navigation};
use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::{format_price, truncate};
use crate::util::styles::{HELP_COLOR, SUCCESS_COLOR, focused_block};

use super::events::detail_lines;

pub struct FavoritesScreen;

impl FavoritesScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = focused_block(&format!("Favorites ({})", state.favorites.len()), true);

        if state.favorites.is_empty() {
            let text = if !state.token.is_set() {
                "Log in to see your favorites"
            } else if state.favorites_loaded {
                "No favorites yet"
            } else {
                "Press r to fetch favorites"
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
            .favorites
            .iter()
            .map(|event| {
                ListItem::new(Line::from(vec![
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
            state.favorites_state.selected_index,
            state.favorites.len(),
            visible,
        );
        let mut list_state = ListState::default()
            .with_selected(Some(state.favorites_state.selected_index))
            .with_offset(offset);

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = focused_block("Details", false);
        let Some(event) = state.selected_favorite() else {
            frame.render_widget(
                Paragraph::new("Select a favorite")
                    .style(Style::default().fg(HELP_COLOR))
                    .block(block),
                area,
            );
            return;
        };
        frame.render_widget(
            Paragraph::new(detail_lines(event, true))
                .block(block)
                .wrap(Wrap { trim: false }),
            area,
        );
    }
}

impl Default for FavoritesScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for FavoritesScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if handle_list_navigation(
            &key,
            &mut state.favorites_state.selected_index,
            state.favorites.len(),
        ) {
            return EventResult::Handled;
        }

        match key.code {
            KeyCode::Char('r') => {
                actions::refresh_favorites(state);
                EventResult::Handled
            }
            KeyCode::Char('f') => {
                if let Some(event) = state.selected_favorite() {
                    let event_id = event.id.clone();
                    state.enqueue_request(crate::worker::NetRequest::RemoveFavorite { event_id });
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
