//! Terminal client for the Eventy event platform.
//!
//! The binary drives a ratatui interface with three tabs: a four-step event
//! creation wizard, the public event list, and the signed-in user's
//! favorites. All domain rules live in `eventy_core`; this crate owns the
//! terminal, the HTTP clients, and the background network worker.

pub mod actions;
pub mod api;
pub mod app;
pub mod components;
pub mod data;
pub mod logging;
pub mod modals;
pub mod screens;
pub mod state;
pub mod util;
pub mod worker;

pub use app::{App, AppSettings};
pub use logging::init_logging;
