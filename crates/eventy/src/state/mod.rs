mod app_state;
mod modal;
pub mod modal_action;

// Re-export all types from submodules
pub use app_state::*;
pub use modal::*;
pub use modal_action::*;
