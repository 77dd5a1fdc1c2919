//! Event submission.
//!
//! The full-draft validation gate runs here, before any bytes leave the
//! machine. A missing token also fails fast locally, opening the login form
//! instead of letting the server reject the upload.

use eventy_core::build_submission;
use tracing::info;

use crate::state::{AppState, ModalState, MessageModal};
use crate::worker::NetRequest;

use super::session::open_login_form;
use super::ActionResult;

const MSG_CREATED: &str = "Event created successfully!";
const MSG_LOGIN_FIRST: &str = "Please log in to create an event";

/// Validate the draft and queue the multipart submission.
pub fn handle_submit(state: &mut AppState) -> ActionResult {
    if let Err(report) = state.wizard.validate_all() {
        return ActionResult::error(report.message);
    }
    if !state.token.is_set() {
        state.set_error(MSG_LOGIN_FIRST.to_string());
        return ActionResult::modal(open_login_form());
    }
    let plan = match build_submission(state.wizard.draft()) {
        Ok(plan) => plan,
        Err(e) => return ActionResult::error(e.to_string()),
    };
    // enqueue_request refuses while a request is active, which makes a
    // second submit during an in-flight one a no-op.
    if state.enqueue_request(NetRequest::SubmitEvent { plan }) {
        info!("event submission queued");
        state.set_status("Creating event…".to_string());
    }
    ActionResult::close()
}

/// Apply the submission outcome. Success discards the draft and returns the
/// wizard to the first step; failure preserves the draft for correction.
pub fn apply_submit_outcome(state: &mut AppState, outcome: Result<(), String>) {
    match outcome {
        Ok(()) => {
            state.wizard.reset();
            state.create_state = Default::default();
            state.modal = ModalState::Message(MessageModal::info("Success", MSG_CREATED));
            state.set_status(MSG_CREATED.to_string());
        }
        Err(message) => state.set_error(message),
    }
}
