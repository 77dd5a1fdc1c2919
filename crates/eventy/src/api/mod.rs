//! HTTP client for the Eventy platform.
//!
//! All calls are blocking and run on the network worker thread, never on the
//! UI thread. Authentication is supplied through the [`TokenProvider`]
//! capability so the client itself never decides where tokens come from.

pub mod geocode;
pub mod types;

use std::fmt;
use std::sync::{Arc, Mutex};

use eventy_core::{SubmissionPart, SubmissionPlan};
use reqwest::blocking::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use tracing::warn;

use types::{
    CreateEventResponse, ErrorBody, EventSummary, EventsResponse, FavoritesResponse, LoginData,
    LoginRequest, LoginResponse,
};

pub const DEFAULT_API_URL: &str = "https://eventplanner-production-ce6e.up.railway.app";
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

const USER_AGENT: &str = concat!("eventy/", env!("CARGO_PKG_VERSION"));

/// Supplies the bearer token for authenticated calls.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Fixed token handed over at startup.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Token slot shared between the UI thread (which logs in) and the worker
/// thread (which sends requests).
#[derive(Debug, Clone, Default)]
pub struct SharedToken {
    inner: Arc<Mutex<Option<String>>>,
}

impl SharedToken {
    pub fn new(initial: Option<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(initial)),
        }
    }

    pub fn set(&self, token: Option<String>) {
        if let Ok(mut slot) = self.inner.lock() {
            *slot = token;
        }
    }

    pub fn is_set(&self) -> bool {
        self.token().is_some()
    }
}

impl TokenProvider for SharedToken {
    fn token(&self) -> Option<String> {
        self.inner.lock().ok().and_then(|slot| slot.clone())
    }
}

#[derive(Debug)]
pub enum ApiError {
    /// An authenticated call was attempted with no token available.
    MissingToken,
    /// The server answered with a non-2xx status.
    Rejected { status: u16, message: Option<String> },
    /// The request never completed, or the body could not be decoded.
    Transport(reqwest::Error),
}

impl ApiError {
    /// Resolve to the text shown to the user: the server's own message when
    /// it sent one, otherwise the per-operation fallback.
    pub fn user_message(&self, rejected_fallback: &str, transport_fallback: &str) -> String {
        match self {
            ApiError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Rejected { .. } => rejected_fallback.to_string(),
            ApiError::MissingToken | ApiError::Transport(_) => transport_fallback.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingToken => write!(f, "no access token available"),
            ApiError::Rejected { status, message } => match message {
                Some(message) => write!(f, "server rejected request ({status}): {message}"),
                None => write!(f, "server rejected request ({status})"),
            },
            ApiError::Transport(e) => write!(f, "request failed: {e}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err)
    }
}

pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
    token: Box<dyn TokenProvider>,
}

impl ApiClient {
    pub fn new(
        http: reqwest::blocking::Client,
        base_url: impl Into<String>,
        token: Box<dyn TokenProvider>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            token,
        }
    }

    /// Blocking HTTP client with the app's user agent. Shared with the
    /// geocoding client.
    pub fn build_http() -> Result<reqwest::blocking::Client, ApiError> {
        Ok(reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()?)
    }

    pub fn login(&self, email: String, password: String) -> Result<LoginData, ApiError> {
        let url = format!("{}/api/auth/login", self.base_url);
        let response = self
            .http
            .post(url)
            .json(&LoginRequest { email, password })
            .send()?;
        parse_response::<LoginResponse>(response).map(|body| body.data)
    }

    /// Submit a new event as multipart form data. Requires a token.
    pub fn create_event(&self, plan: &SubmissionPlan) -> Result<CreateEventResponse, ApiError> {
        let url = format!("{}/api/events/addevents", self.base_url);
        let request = self.authorized(self.http.post(url))?;
        let response = request.multipart(multipart_form(plan)?).send()?;
        parse_response(response)
    }

    pub fn fetch_events(&self) -> Result<Vec<EventSummary>, ApiError> {
        let url = format!("{}/api/events/getevents", self.base_url);
        let mut request = self.http.get(url);
        if let Some(token) = self.token.token() {
            request = request.bearer_auth(token);
        }
        parse_response::<EventsResponse>(request.send()?).map(|body| body.events)
    }

    pub fn fetch_favorites(&self) -> Result<Vec<EventSummary>, ApiError> {
        let url = format!("{}/api/events/favorites", self.base_url);
        let request = self.authorized(self.http.get(url))?;
        parse_response::<FavoritesResponse>(request.send()?).map(|body| body.data)
    }

    pub fn add_favorite(&self, event_id: &str) -> Result<(), ApiError> {
        let url = format!("{}/api/events/favorites/{event_id}", self.base_url);
        let request = self.authorized(self.http.post(url))?;
        expect_success(request.json(&serde_json::json!({})).send()?)
    }

    pub fn remove_favorite(&self, event_id: &str) -> Result<(), ApiError> {
        let url = format!("{}/api/events/favorites/{event_id}", self.base_url);
        let request = self.authorized(self.http.delete(url))?;
        expect_success(request.send()?)
    }

    /// Join a free event. Requires a token; the body is an empty object.
    pub fn attend(&self, event_id: &str) -> Result<(), ApiError> {
        let url = format!("{}/api/events/attend/{event_id}", self.base_url);
        let request = self.authorized(self.http.post(url))?;
        expect_success(request.json(&serde_json::json!({})).send()?)
    }

    fn authorized(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> Result<reqwest::blocking::RequestBuilder, ApiError> {
        match self.token.token() {
            Some(token) => Ok(request.bearer_auth(token)),
            None => Err(ApiError::MissingToken),
        }
    }
}

fn multipart_form(plan: &SubmissionPlan) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for part in &plan.parts {
        form = match part {
            SubmissionPart::Text { name, value } => form.text(*name, value.clone()),
            SubmissionPart::File {
                name,
                file_name,
                mime_type,
                bytes,
            } => {
                let file_part = Part::bytes(bytes.clone())
                    .file_name(file_name.clone())
                    .mime_str(mime_type)?;
                form.part(*name, file_part)
            }
        };
    }
    Ok(form)
}

fn parse_response<T: DeserializeOwned>(
    response: reqwest::blocking::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json()?);
    }
    let message = match response.json::<ErrorBody>() {
        Ok(body) => body.message,
        Err(e) => {
            warn!(status = status.as_u16(), error = %e, "unreadable error body");
            None
        }
    };
    Err(ApiError::Rejected {
        status: status.as_u16(),
        message,
    })
}

fn expect_success(response: reqwest::blocking::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let message = response.json::<ErrorBody>().ok().and_then(|b| b.message);
    Err(ApiError::Rejected {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Rejected {
            status: 400,
            message: Some("Event name already used".to_string()),
        };
        assert_eq!(
            err.user_message("Failed to create event", "An error occurred"),
            "Event name already used"
        );
    }

    #[test]
    fn test_user_message_fallbacks() {
        let rejected = ApiError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(
            rejected.user_message("Failed to create event", "An error occurred"),
            "Failed to create event"
        );
        let missing = ApiError::MissingToken;
        assert_eq!(
            missing.user_message("Failed to create event", "An error occurred"),
            "An error occurred"
        );
    }

    #[test]
    fn test_shared_token_round_trip() {
        let shared = SharedToken::new(None);
        assert!(!shared.is_set());
        shared.set(Some("abc".to_string()));
        assert_eq!(shared.token().as_deref(), Some("abc"));
        assert!(shared.is_set());
        shared.set(None);
        assert!(shared.token().is_none());
    }

    #[test]
    fn test_static_token_always_present() {
        let token = StaticToken("xyz".to_string());
        assert_eq!(token.token().as_deref(), Some("xyz"));
    }
}
