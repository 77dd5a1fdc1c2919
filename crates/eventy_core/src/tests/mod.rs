//! Integration tests for the event-creation wizard
//!
//! Tests are organized by topic:
//! - `wizard_flow` - Full walks through the four steps, including rejected
//!   navigation and state preserved across failures
//! - `submission` - End-to-end draft-to-payload assembly and outcome handling

mod wizard_flow;
