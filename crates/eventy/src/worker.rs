//! Background network worker.
//!
//! All HTTP happens on a dedicated thread; the UI sends requests over a
//! channel and drains responses non-blockingly each tick, so the terminal
//! stays responsive while a call is in flight. Responses carry the resolved
//! user-facing outcome, leaving the UI thread to apply state only.

use std::sync::mpsc;
use std::thread;

use eventy_core::{GeoPoint, SelectedLocation, SubmissionPlan};
use tracing::{error, info};

use crate::api::geocode::GeocodeClient;
use crate::api::types::{EventSummary, LoginData};
use crate::api::ApiClient;

/// Fallback address used when reverse geocoding cannot name a point.
pub const FALLBACK_ADDRESS: &str = "Selected location";

const MSG_SUBMIT_REJECTED: &str = "Failed to create event";
const MSG_SUBMIT_TRANSPORT: &str = "An error occurred while creating the event";
const MSG_SEARCH_FAILED: &str = "An error occurred while searching, please try again";
const MSG_LOGIN_FAILED: &str = "Login failed";
const MSG_FETCH_FAILED: &str = "Error fetching data";
const MSG_FAVORITE_FAILED: &str = "Failed to update favorites";
const MSG_ATTEND_FAILED: &str = "Failed to join event. Please try again.";

#[derive(Debug)]
pub enum NetRequest {
    Login { email: String, password: String },
    SubmitEvent { plan: SubmissionPlan },
    SearchAddress { query: String },
    ResolvePoint { point: GeoPoint },
    FetchEvents,
    FetchFavorites,
    AddFavorite { event_id: String },
    RemoveFavorite { event_id: String },
    Attend { event_id: String },
    Shutdown,
}

impl NetRequest {
    fn kind(&self) -> &'static str {
        match self {
            NetRequest::Login { .. } => "login",
            NetRequest::SubmitEvent { .. } => "submit_event",
            NetRequest::SearchAddress { .. } => "search_address",
            NetRequest::ResolvePoint { .. } => "resolve_point",
            NetRequest::FetchEvents => "fetch_events",
            NetRequest::FetchFavorites => "fetch_favorites",
            NetRequest::AddFavorite { .. } => "add_favorite",
            NetRequest::RemoveFavorite { .. } => "remove_favorite",
            NetRequest::Attend { .. } => "attend",
            NetRequest::Shutdown => "shutdown",
        }
    }
}

/// Completed request outcomes. `Err` payloads are ready for the status line.
#[derive(Debug)]
pub enum NetResponse {
    LoginComplete(Result<LoginData, String>),
    SubmitComplete(Result<(), String>),
    /// `Ok(None)` means the query produced no result at all.
    SearchComplete(Result<Option<SelectedLocation>, String>),
    /// Reverse geocoding never fails the selection; a lookup problem just
    /// substitutes the fallback address.
    PointResolved { point: GeoPoint, address: String },
    EventsFetched(Result<Vec<EventSummary>, String>),
    FavoritesFetched(Result<Vec<EventSummary>, String>),
    FavoriteToggled(Result<String, String>),
    AttendComplete(Result<(), String>),
}

pub struct NetWorker {
    request_tx: mpsc::Sender<NetRequest>,
    response_rx: mpsc::Receiver<NetResponse>,
    thread: Option<thread::JoinHandle<()>>,
}

impl NetWorker {
    pub fn new(api: ApiClient, geocode: GeocodeClient) -> Self {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();

        let thread = thread::spawn(move || {
            let context = WorkerContext {
                response_tx,
                api,
                geocode,
            };
            context.run(request_rx);
        });

        Self {
            request_tx,
            response_rx,
            thread: Some(thread),
        }
    }

    /// Queue a request for the worker thread. Returns false if the worker
    /// has shut down.
    pub fn send(&self, request: NetRequest) -> bool {
        self.request_tx.send(request).is_ok()
    }

    /// Non-blocking poll for a completed response.
    pub fn try_recv(&self) -> Option<NetResponse> {
        self.response_rx.try_recv().ok()
    }
}

impl Drop for NetWorker {
    fn drop(&mut self) {
        let _ = self.request_tx.send(NetRequest::Shutdown);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

struct WorkerContext {
    response_tx: mpsc::Sender<NetResponse>,
    api: ApiClient,
    geocode: GeocodeClient,
}

impl WorkerContext {
    fn run(&self, request_rx: mpsc::Receiver<NetRequest>) {
        while let Ok(request) = request_rx.recv() {
            info!(request = request.kind(), "processing network request");
            match request {
                NetRequest::Shutdown => break,

                NetRequest::Login { email, password } => {
                    let result = self.api.login(email, password).map_err(|e| {
                        error!(error = %e, "login failed");
                        e.user_message(MSG_LOGIN_FAILED, MSG_LOGIN_FAILED)
                    });
                    let _ = self.response_tx.send(NetResponse::LoginComplete(result));
                }

                NetRequest::SubmitEvent { plan } => {
                    let result = match self.api.create_event(&plan) {
                        Ok(body) => {
                            info!(event = ?body.event, "event created");
                            Ok(())
                        }
                        Err(e) => {
                            error!(error = %e, "event submission failed");
                            Err(e.user_message(MSG_SUBMIT_REJECTED, MSG_SUBMIT_TRANSPORT))
                        }
                    };
                    let _ = self.response_tx.send(NetResponse::SubmitComplete(result));
                }

                NetRequest::SearchAddress { query } => {
                    let result = self.geocode.search(&query).map_err(|e| {
                        error!(error = %e, query = %query, "address search failed");
                        MSG_SEARCH_FAILED.to_string()
                    });
                    let _ = self.response_tx.send(NetResponse::SearchComplete(result));
                }

                NetRequest::ResolvePoint { point } => {
                    let address = match self.geocode.reverse(point) {
                        Ok(address) => address,
                        Err(e) => {
                            info!(error = %e, "reverse geocode failed, using fallback address");
                            FALLBACK_ADDRESS.to_string()
                        }
                    };
                    let _ = self
                        .response_tx
                        .send(NetResponse::PointResolved { point, address });
                }

                NetRequest::FetchEvents => {
                    let result = self.api.fetch_events().map_err(|e| {
                        error!(error = %e, "events fetch failed");
                        e.user_message(MSG_FETCH_FAILED, MSG_FETCH_FAILED)
                    });
                    let _ = self.response_tx.send(NetResponse::EventsFetched(result));
                }

                NetRequest::FetchFavorites => {
                    let result = self.api.fetch_favorites().map_err(|e| {
                        error!(error = %e, "favorites fetch failed");
                        e.user_message(MSG_FETCH_FAILED, MSG_FETCH_FAILED)
                    });
                    let _ = self.response_tx.send(NetResponse::FavoritesFetched(result));
                }

                NetRequest::AddFavorite { event_id } => {
                    let result = match self.api.add_favorite(&event_id) {
                        Ok(()) => Ok("Added to favorites".to_string()),
                        Err(e) => {
                            error!(error = %e, event_id = %event_id, "add favorite failed");
                            Err(e.user_message(MSG_FAVORITE_FAILED, MSG_FAVORITE_FAILED))
                        }
                    };
                    let _ = self.response_tx.send(NetResponse::FavoriteToggled(result));
                }

                NetRequest::RemoveFavorite { event_id } => {
                    let result = match self.api.remove_favorite(&event_id) {
                        Ok(()) => Ok("Removed from favorites".to_string()),
                        Err(e) => {
                            error!(error = %e, event_id = %event_id, "remove favorite failed");
                            Err(e.user_message(MSG_FAVORITE_FAILED, MSG_FAVORITE_FAILED))
                        }
                    };
                    let _ = self.response_tx.send(NetResponse::FavoriteToggled(result));
                }

                NetRequest::Attend { event_id } => {
                    let result = self.api.attend(&event_id).map_err(|e| {
                        error!(error = %e, event_id = %event_id, "attend failed");
                        MSG_ATTEND_FAILED.to_string()
                    });
                    let _ = self.response_tx.send(NetResponse::AttendComplete(result));
                }
            }
        }
        info!("network worker shutting down");
    }
}
