//! Location selection: address search and map-point picking.
//!
//! Both paths converge on `EventWizard::set_location`, so the boundary check
//! runs no matter how the point was chosen.

use eventy_core::{GeoPoint, SelectedLocation};

use crate::state::{AppState, ModalAction, ModalState};
use crate::worker::NetRequest;

use super::wizard::shortcuts;
use super::ActionResult;

const MSG_NOT_FOUND: &str = "Location not found, please try a different address";

pub fn open_search_modal() -> ModalState {
    shortcuts::text_prompt(
        "Search Address",
        "Address or place name",
        "",
        ModalAction::SEARCH_ADDRESS,
    )
}

/// Queue a forward geocode for the entered query.
pub fn handle_search_address(state: &mut AppState, query: &str) -> ActionResult {
    let query = query.trim();
    if query.is_empty() {
        return ActionResult::close();
    }
    if state.enqueue_request(NetRequest::SearchAddress {
        query: query.to_string(),
    }) {
        state.set_status("Searching…".to_string());
    }
    ActionResult::close()
}

/// Queue a reverse geocode for the map cursor's position.
pub fn select_map_point(state: &mut AppState) {
    let point = state.create_state.map_cursor.position;
    if state.enqueue_request(NetRequest::ResolvePoint { point }) {
        state.set_status("Looking up selected point…".to_string());
    }
}

/// Apply a completed address search.
pub fn apply_search_outcome(
    state: &mut AppState,
    outcome: Result<Option<SelectedLocation>, String>,
) {
    match outcome {
        Ok(Some(location)) => set_wizard_location(state, location),
        Ok(None) => state.set_error(MSG_NOT_FOUND.to_string()),
        Err(message) => state.set_error(message),
    }
}

/// Apply a resolved map point. The reverse lookup never fails the selection;
/// the worker substitutes a fallback address instead.
pub fn apply_resolved_point(state: &mut AppState, point: GeoPoint, address: String) {
    set_wizard_location(
        state,
        SelectedLocation::new(address, point.latitude, point.longitude),
    );
}

fn set_wizard_location(state: &mut AppState, location: SelectedLocation) {
    let address = location.address.clone();
    let point = location.point();
    match state.wizard.set_location(location) {
        Ok(()) => {
            state.create_state.map_cursor.recenter(point);
            state.set_status(format!("Location set: {address}"));
        }
        Err(e) => state.set_error(e.to_string()),
    }
}
