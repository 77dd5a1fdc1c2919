// Actions module - domain-specific handler implementations
//
// Business logic for modal results and worker responses lives here, keeping
// app.rs to dispatch and layout.

mod browse;
mod create;
mod location;
mod session;
mod submit;
pub mod wizard;

pub use browse::*;
pub use create::*;
pub use location::*;
pub use session::*;
pub use submit::*;

use crate::state::{AppState, MessageModal, ModalState};

/// Result of an action handler
pub enum ActionResult {
    /// Action completed, set modal to this state (None closes the modal)
    Done(Option<ModalState>),
    /// Action failed with an error message
    Error(String),
}

impl ActionResult {
    /// Create a result that closes the modal
    pub fn close() -> Self {
        ActionResult::Done(None)
    }

    /// Create a result that shows a new modal
    pub fn modal(state: ModalState) -> Self {
        ActionResult::Done(Some(state))
    }

    /// Create an error result
    pub fn error(msg: impl Into<String>) -> Self {
        ActionResult::Error(msg.into())
    }

    /// Apply this result to the app: swap in the next modal, close the
    /// current one, or surface the error as a dismissable message.
    pub fn apply(self, state: &mut AppState) {
        match self {
            ActionResult::Done(Some(modal)) => state.modal = modal,
            ActionResult::Done(None) => state.modal = ModalState::None,
            ActionResult::Error(message) => {
                state.modal = ModalState::Message(MessageModal::error("Error", &message));
            }
        }
    }
}

/// Context passed to action handlers: the confirmed modal values, one per
/// input, carried verbatim so any character a user can type survives.
pub struct ActionContext<'a> {
    values: &'a [String],
}

impl<'a> ActionContext<'a> {
    pub fn new(values: &'a [String]) -> Self {
        Self { values }
    }

    /// The single confirmed value (picker selection or text input)
    pub fn value(&self) -> &str {
        self.values.first().map(String::as_str).unwrap_or("")
    }

    /// All confirmed values in field order
    pub fn values(&self) -> &[String] {
        self.values
    }
}
