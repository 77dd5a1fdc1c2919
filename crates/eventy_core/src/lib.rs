//! Event-creation wizard library
//!
//! This crate implements the client-side core of the Eventy event-creation
//! flow, independent of any UI or transport:
//! - A four-step wizard over a draft event, with per-step validation
//! - A category model with a fixed list plus free-text "Other" entry
//! - Bounded location selection (fixed box over Egypt, inclusive edges)
//! - Image attachment constraints with scoped preview handles
//! - Ordered multipart payload assembly for the create-event endpoint
//!
//! The wizard validates only when navigating forward or submitting; typing
//! into a field never triggers validation.
//!
//! ```
//! use eventy_core::{EventWizard, WizardStep};
//!
//! let mut wizard = EventWizard::new();
//! assert!(wizard.go_next().is_err()); // required fields still empty
//!
//! let draft = wizard.draft_mut();
//! draft.name = "Cairo Tech Meetup".to_string();
//! draft.description = "Monthly community meetup".to_string();
//! draft.host_company = "Eventy".to_string();
//! wizard.go_next().unwrap();
//! assert_eq!(wizard.step(), WizardStep::Details);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod attachment;
pub mod category;
pub mod draft;
pub mod error;
pub mod geo;
pub mod payload;
pub mod steps;
pub mod validate;
pub mod wizard;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use attachment::{AttachedImage, ImageField, MAX_IMAGE_BYTES, PreviewRegistry};
pub use category::{Category, OTHER_OPTION, PREDEFINED_CATEGORIES};
pub use draft::{DraftEvent, EventVisibility, Recurrence};
pub use error::{BoundaryError, FileConstraintError, PayloadError};
pub use geo::{EGYPT_BOUNDS, GeoPoint, MapCursor, SelectedLocation};
pub use payload::{SubmissionPart, SubmissionPlan, build_submission, normalize_time};
pub use steps::WizardStep;
pub use validate::{StepReport, validate_all, validate_step};
pub use wizard::EventWizard;
