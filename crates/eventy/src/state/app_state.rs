use eventy_core::{EventWizard, MapCursor};

use crate::api::SharedToken;
use crate::api::types::EventSummary;
use crate::worker::NetRequest;

use super::ModalState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    Create,
    Events,
    Favorites,
}

impl TabId {
    pub const ALL: [TabId; 3] = [TabId::Create, TabId::Events, TabId::Favorites];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Create => "Create",
            TabId::Events => "Events",
            TabId::Favorites => "Favorites",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Create => 0,
            TabId::Events => 1,
            TabId::Favorites => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(TabId::Create),
            1 => Some(TabId::Events),
            2 => Some(TabId::Favorites),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPanel {
    Left,
    Right,
}

/// UI state for the create tab. The wizard itself lives on [`AppState`].
#[derive(Debug, Default)]
pub struct CreateState {
    pub map_cursor: MapCursor,
}

#[derive(Debug)]
pub struct EventsState {
    pub selected_index: usize,
    pub focused_panel: FocusedPanel,
}

impl Default for EventsState {
    fn default() -> Self {
        Self {
            selected_index: 0,
            focused_panel: FocusedPanel::Left,
        }
    }
}

#[derive(Debug, Default)]
pub struct FavoritesState {
    pub selected_index: usize,
}

/// Main application state
pub struct AppState {
    pub active_tab: TabId,
    pub wizard: EventWizard,
    /// Events from the last successful browse fetch
    pub events: Vec<EventSummary>,
    /// The signed-in user's favorites
    pub favorites: Vec<EventSummary>,
    pub events_loaded: bool,
    pub favorites_loaded: bool,
    /// Display name after login
    pub user_name: Option<String>,
    /// Token slot shared with the network worker
    pub token: SharedToken,

    // Per-screen state
    pub create_state: CreateState,
    pub events_state: EventsState,
    pub favorites_state: FavoritesState,

    pub modal: ModalState,
    /// Request queued for the worker, dispatched on the next tick
    pub pending_request: Option<NetRequest>,
    /// True from dispatch until the response is processed
    pub request_in_flight: bool,
    pub error_message: Option<String>,
    /// Non-error transient notice for the status line
    pub status_message: Option<String>,
    pub exit: bool,
}

impl AppState {
    pub fn new(token: SharedToken) -> Self {
        Self {
            active_tab: TabId::Create,
            wizard: EventWizard::new(),
            events: Vec::new(),
            favorites: Vec::new(),
            events_loaded: false,
            favorites_loaded: false,
            user_name: None,
            token,
            create_state: CreateState::default(),
            events_state: EventsState::default(),
            favorites_state: FavoritesState::default(),
            modal: ModalState::None,
            pending_request: None,
            request_in_flight: false,
            error_message: None,
            status_message: None,
            exit: false,
        }
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        let next_index = (self.active_tab.index() + 1) % TabId::ALL.len();
        self.active_tab = TabId::ALL[next_index];
    }

    pub fn prev_tab(&mut self) {
        let current_index = self.active_tab.index();
        let next_index = if current_index == 0 {
            TabId::ALL.len() - 1
        } else {
            current_index - 1
        };
        self.active_tab = TabId::ALL[next_index];
    }

    pub fn set_error(&mut self, message: String) {
        self.status_message = None;
        self.error_message = Some(message);
    }

    pub fn set_status(&mut self, message: String) {
        self.error_message = None;
        self.status_message = Some(message);
    }

    pub fn clear_notices(&mut self) {
        self.error_message = None;
        self.status_message = None;
    }

    /// Queue a request for the worker. Refused while another request is
    /// queued or in flight, which is also what makes a second submit during
    /// an active one a no-op.
    pub fn enqueue_request(&mut self, request: NetRequest) -> bool {
        if self.request_in_flight || self.pending_request.is_some() {
            return false;
        }
        self.pending_request = Some(request);
        true
    }

    pub fn is_busy(&self) -> bool {
        self.request_in_flight || self.pending_request.is_some()
    }

    pub fn selected_event(&self) -> Option<&EventSummary> {
        self.events.get(self.events_state.selected_index)
    }

    pub fn selected_favorite(&self) -> Option<&EventSummary> {
        self.favorites.get(self.favorites_state.selected_index)
    }

    pub fn is_favorite(&self, event_id: &str) -> bool {
        self.favorites.iter().any(|e| e.id == event_id)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SharedToken::default())
    }
}
