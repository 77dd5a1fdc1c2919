use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::actions::{self, ActionContext};
use crate::api::geocode::GeocodeClient;
use crate::api::{ApiClient, SharedToken};
use crate::components::{Component, EventResult, status_bar::StatusBar, tab_bar::TabBar};
use crate::modals::{ModalResult, handle_modal_key, render_modal};
use crate::screens::{CreateScreen, EventsScreen, FavoritesScreen};
use crate::state::{
    AppState, BrowseAction, LocationAction, ModalAction, ModalState, SessionAction, TabId,
};
use crate::worker::{NetResponse, NetWorker};

/// Tick interval of the event loop. Worker responses are drained once per
/// tick, so this bounds how stale the UI can be while a request is in flight.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Endpoint and credential settings resolved from CLI, config file, and
/// built-in defaults.
pub struct AppSettings {
    pub api_url: String,
    pub nominatim_url: String,
    pub token: Option<String>,
}

pub struct App {
    state: AppState,
    worker: NetWorker,
    tab_bar: TabBar,
    status_bar: StatusBar,
    create_screen: CreateScreen,
    events_screen: EventsScreen,
    favorites_screen: FavoritesScreen,
}

impl App {
    pub fn new(settings: AppSettings) -> color_eyre::Result<Self> {
        let token = SharedToken::new(settings.token);
        let http = ApiClient::build_http()?;
        let api = ApiClient::new(http.clone(), settings.api_url, Box::new(token.clone()));
        let geocode = GeocodeClient::new(http, settings.nominatim_url);

        Ok(Self {
            state: AppState::new(token),
            worker: NetWorker::new(api, geocode),
            tab_bar: TabBar::new(),
            status_bar: StatusBar::new(),
            create_screen: CreateScreen::new(),
            events_screen: EventsScreen::new(),
            favorites_screen: FavoritesScreen::new(),
        })
    }

    /// Runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.dispatch_pending_request();
            self.process_worker_responses();
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.render_active_screen(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);

        render_modal(frame, &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.active_tab {
            TabId::Create => self.create_screen.render(frame, area, &self.state),
            TabId::Events => self.events_screen.render(frame, area, &self.state),
            TabId::Favorites => self.favorites_screen.render(frame, area, &self.state),
        }
    }

    /// Hand the queued request to the worker thread.
    fn dispatch_pending_request(&mut self) {
        let Some(request) = self.state.pending_request.take() else {
            return;
        };
        if self.worker.send(request) {
            self.state.request_in_flight = true;
        } else {
            self.state
                .set_error("Background worker is unavailable".to_string());
        }
    }

    fn process_worker_responses(&mut self) {
        while let Some(response) = self.worker.try_recv() {
            self.state.request_in_flight = false;
            self.apply_response(response);
        }
    }

    fn apply_response(&mut self, response: NetResponse) {
        let state = &mut self.state;
        match response {
            NetResponse::LoginComplete(outcome) => actions::apply_login_outcome(state, outcome),
            NetResponse::SubmitComplete(outcome) => actions::apply_submit_outcome(state, outcome),
            NetResponse::SearchComplete(outcome) => actions::apply_search_outcome(state, outcome),
            NetResponse::PointResolved { point, address } => {
                actions::apply_resolved_point(state, point, address)
            }
            NetResponse::EventsFetched(outcome) => actions::apply_events_fetched(state, outcome),
            NetResponse::FavoritesFetched(outcome) => {
                actions::apply_favorites_fetched(state, outcome)
            }
            NetResponse::FavoriteToggled(outcome) => actions::apply_favorite_toggled(state, outcome),
            NetResponse::AttendComplete(outcome) => actions::apply_attend_outcome(state, outcome),
        }
    }

    /// Poll so the loop keeps ticking while requests are in flight.
    fn handle_events(&mut self) -> io::Result<()> {
        if !event::poll(TICK_INTERVAL)? {
            return Ok(());
        }
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Handle modal first if active
        if !matches!(self.state.modal, ModalState::None) {
            match handle_modal_key(key_event, &mut self.state) {
                ModalResult::Confirmed(action, values) => {
                    self.handle_modal_result(action, values);
                }
                ModalResult::Cancelled => {
                    self.state.modal = ModalState::None;
                }
                ModalResult::Continue => {}
            }
            return;
        }

        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Esc => {
                self.state.clear_notices();
                return;
            }
            _ => {}
        }

        // Try tab bar first
        let result = self.tab_bar.handle_key(key_event, &mut self.state);
        if result != EventResult::NotHandled {
            self.fetch_on_first_visit();
            return;
        }

        // Then try active screen
        let result = match self.state.active_tab {
            TabId::Create => self.create_screen.handle_key(key_event, &mut self.state),
            TabId::Events => self.events_screen.handle_key(key_event, &mut self.state),
            TabId::Favorites => self
                .favorites_screen
                .handle_key(key_event, &mut self.state),
        };

        if result == EventResult::Exit {
            self.state.exit = true
        }
    }

    /// Browse tabs fetch automatically the first time they are opened.
    fn fetch_on_first_visit(&mut self) {
        match self.state.active_tab {
            TabId::Events if !self.state.events_loaded => actions::refresh_events(&mut self.state),
            TabId::Favorites if !self.state.favorites_loaded && self.state.token.is_set() => {
                actions::refresh_favorites(&mut self.state)
            }
            _ => {}
        }
    }

    fn handle_modal_result(&mut self, action: ModalAction, values: Vec<String>) {
        let ctx = ActionContext::new(&values);
        let result = match action {
            ModalAction::Wizard(wizard_action) => {
                actions::handle_wizard_action(&mut self.state, wizard_action, &ctx)
            }
            ModalAction::Location(LocationAction::SearchAddress) => {
                actions::handle_search_address(&mut self.state, ctx.value())
            }
            ModalAction::Session(SessionAction::Login) => {
                actions::handle_login(&mut self.state, &ctx)
            }
            ModalAction::Browse(BrowseAction::ConfirmAttend { index }) => {
                actions::handle_attend_confirmed(&mut self.state, index)
            }
        };
        result.apply(&mut self.state);
    }
}
