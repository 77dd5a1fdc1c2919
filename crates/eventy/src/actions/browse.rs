//! Browse-tab actions: refresh, favorites, and attendance.

use crate::api::types::EventSummary;
use crate::state::{AppState, BrowseAction, ConfirmModal, ModalAction, ModalState, TabId};
use crate::worker::NetRequest;

use super::ActionResult;

const MSG_LOGIN_FOR_FAVORITES: &str = "Please login to manage favorites";
const MSG_LOGIN_FOR_ATTEND: &str = "Please login to join events";
const MSG_PAID_EVENT: &str = "Only free events can be joined from here";
const MSG_ATTENDING: &str = "You have successfully joined the event!";

pub fn refresh_events(state: &mut AppState) {
    if state.enqueue_request(NetRequest::FetchEvents) {
        state.set_status("Fetching events…".to_string());
    }
}

pub fn refresh_favorites(state: &mut AppState) {
    if state.enqueue_request(NetRequest::FetchFavorites) {
        state.set_status("Fetching favorites…".to_string());
    }
}

/// Toggle the selected event in or out of the favorites list.
pub fn toggle_favorite(state: &mut AppState) {
    if !state.token.is_set() {
        state.set_error(MSG_LOGIN_FOR_FAVORITES.to_string());
        return;
    }
    let Some(event_id) = selected_id(state) else {
        return;
    };
    let request = if state.is_favorite(&event_id) {
        NetRequest::RemoveFavorite { event_id }
    } else {
        NetRequest::AddFavorite { event_id }
    };
    state.enqueue_request(request);
}

/// Open the join confirmation for the selected event. Paid events and
/// logged-out sessions are refused before the modal ever opens.
pub fn open_attend_confirm(state: &mut AppState) -> Option<ModalState> {
    if !state.token.is_set() {
        state.set_error(MSG_LOGIN_FOR_ATTEND.to_string());
        return None;
    }
    let index = state.events_state.selected_index;
    let event = state.events.get(index)?;
    if !event.is_free() {
        state.set_error(MSG_PAID_EVENT.to_string());
        return None;
    }
    Some(ModalState::Confirm(ConfirmModal::new(
        "Join Event",
        &format!("Join \"{}\"?", event.name),
        ModalAction::Browse(BrowseAction::ConfirmAttend { index }),
    )))
}

/// Queue the attend request after the user confirms.
pub fn handle_attend_confirmed(state: &mut AppState, index: usize) -> ActionResult {
    let Some(event) = state.events.get(index) else {
        return ActionResult::close();
    };
    let event_id = event.id.clone();
    state.enqueue_request(NetRequest::Attend { event_id });
    ActionResult::close()
}

pub fn apply_events_fetched(state: &mut AppState, outcome: Result<Vec<EventSummary>, String>) {
    match outcome {
        Ok(events) => {
            state.events = events;
            state.events_loaded = true;
            clamp_selection(
                &mut state.events_state.selected_index,
                state.events.len(),
            );
            state.set_status(format!("{} events", state.events.len()));
        }
        Err(message) => state.set_error(message),
    }
}

pub fn apply_favorites_fetched(state: &mut AppState, outcome: Result<Vec<EventSummary>, String>) {
    match outcome {
        Ok(favorites) => {
            state.favorites = favorites;
            state.favorites_loaded = true;
            clamp_selection(
                &mut state.favorites_state.selected_index,
                state.favorites.len(),
            );
        }
        Err(message) => state.set_error(message),
    }
}

/// A toggle only reports text; the favorites list refreshes on the next
/// visit or explicit refresh.
pub fn apply_favorite_toggled(state: &mut AppState, outcome: Result<String, String>) {
    match outcome {
        Ok(message) => {
            state.favorites_loaded = false;
            if state.active_tab == TabId::Favorites {
                refresh_favorites(state);
            } else {
                state.set_status(message);
            }
        }
        Err(message) => state.set_error(message),
    }
}

pub fn apply_attend_outcome(state: &mut AppState, outcome: Result<(), String>) {
    match outcome {
        Ok(()) => state.set_status(MSG_ATTENDING.to_string()),
        Err(message) => state.set_error(message),
    }
}

fn selected_id(state: &AppState) -> Option<String> {
    state.selected_event().map(|e| e.id.clone())
}

fn clamp_selection(selected: &mut usize, len: usize) {
    if len == 0 {
        *selected = 0;
    } else if *selected >= len {
        *selected = len - 1;
    }
}
