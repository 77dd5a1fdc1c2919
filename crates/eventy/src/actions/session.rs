//! Login flow.

use crate::api::types::LoginData;
use crate::state::{AppState, ModalAction, ModalState};
use crate::worker::NetRequest;

use super::wizard::FormWizard;
use super::{ActionContext, ActionResult};

pub fn open_login_form() -> ModalState {
    FormWizard::new("Log In", ModalAction::LOGIN)
        .text("Email", "")
        .password("Password")
        .editing()
        .build()
}

/// Queue a login request from the confirmed form.
pub fn handle_login(state: &mut AppState, ctx: &ActionContext) -> ActionResult {
    let [email, password] = ctx.values() else {
        return ActionResult::error("Invalid form data");
    };
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return ActionResult::error("Email and password are required");
    }
    if state.enqueue_request(NetRequest::Login {
        email: email.to_string(),
        password: password.clone(),
    }) {
        state.set_status("Logging in…".to_string());
    }
    ActionResult::close()
}

/// Apply a completed login. The token slot is shared with the worker thread,
/// so later authenticated calls pick it up without replumbing the client.
pub fn apply_login_outcome(state: &mut AppState, outcome: Result<LoginData, String>) {
    match outcome {
        Ok(data) => {
            state.token.set(Some(data.access_token));
            let name = data
                .user
                .name
                .or(data.user.email)
                .unwrap_or_else(|| "there".to_string());
            state.set_status(format!("Logged in as {name}"));
            state.user_name = Some(name);
        }
        Err(message) => state.set_error(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::UserInfo;
    use crate::api::TokenProvider;

    fn login_data(name: Option<&str>) -> LoginData {
        LoginData {
            access_token: "tok-1".to_string(),
            user: UserInfo {
                id: "u1".to_string(),
                name: name.map(str::to_string),
                email: Some("nour@example.com".to_string()),
                role: None,
            },
        }
    }

    #[test]
    fn test_login_success_stores_token_and_name() {
        let mut state = AppState::default();
        apply_login_outcome(&mut state, Ok(login_data(Some("Nour"))));
        assert_eq!(state.token.token().as_deref(), Some("tok-1"));
        assert_eq!(state.user_name.as_deref(), Some("Nour"));
        assert_eq!(state.status_message.as_deref(), Some("Logged in as Nour"));
    }

    #[test]
    fn test_login_name_falls_back_to_email() {
        let mut state = AppState::default();
        apply_login_outcome(&mut state, Ok(login_data(None)));
        assert_eq!(state.user_name.as_deref(), Some("nour@example.com"));
    }

    #[test]
    fn test_login_failure_keeps_token_clear() {
        let mut state = AppState::default();
        apply_login_outcome(&mut state, Err("Login failed".to_string()));
        assert!(!state.token.is_set());
        assert_eq!(state.error_message.as_deref(), Some("Login failed"));
    }

    #[test]
    fn test_blank_credentials_rejected_locally() {
        let mut state = AppState::default();
        let values = ["", "password"].map(str::to_string);
        let result = handle_login(&mut state, &ActionContext::new(&values));
        assert!(matches!(result, ActionResult::Error(_)));
        assert!(state.pending_request.is_none());
    }

    #[test]
    fn test_valid_credentials_queue_request() {
        let mut state = AppState::default();
        let values = ["nour@example.com", "hunter2"].map(str::to_string);
        let result = handle_login(&mut state, &ActionContext::new(&values));
        assert!(matches!(result, ActionResult::Done(None)));
        assert!(matches!(
            state.pending_request,
            Some(NetRequest::Login { .. })
        ));
    }

    #[test]
    fn test_password_with_delimiter_survives_intact() {
        let mut state = AppState::default();
        let values = ["nour@example.com", "hun|ter2"].map(str::to_string);
        let result = handle_login(&mut state, &ActionContext::new(&values));
        assert!(matches!(result, ActionResult::Done(None)));
        match &state.pending_request {
            Some(NetRequest::Login { password, .. }) => assert_eq!(password, "hun|ter2"),
            other => panic!("Expected login request, got {other:?}"),
        }
    }
}
