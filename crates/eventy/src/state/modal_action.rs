//! Domain-scoped modal actions.
//!
//! Actions are grouped by domain and delegate through the top-level
//! [`ModalAction`], so modal handlers can match on whole domains and the
//! payload a handler needs travels inside the action itself.

use eventy_core::ImageField;

/// Top-level action enum with domain delegation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    Wizard(WizardAction),
    Location(LocationAction),
    Session(SessionAction),
    Browse(BrowseAction),
}

/// Wizard-step actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    /// Form for name, description, host company
    EditBasicInfo,
    /// Form for date, time, price
    EditDetails,
    PickCategory,
    /// Free-text entry after picking "Other"
    EnterCustomCategory,
    PickVisibility,
    PickRecurrence,
    /// Path prompt for one of the two image slots
    AttachImage(ImageField),
}

/// Location-step actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationAction {
    SearchAddress,
}

/// Auth actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Login,
}

/// Event-list actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    /// Join confirmation for the event at this index in the browse list
    ConfirmAttend { index: usize },
}

// Convenience constructors for common actions
impl ModalAction {
    pub const EDIT_BASIC_INFO: Self = Self::Wizard(WizardAction::EditBasicInfo);
    pub const EDIT_DETAILS: Self = Self::Wizard(WizardAction::EditDetails);
    pub const PICK_CATEGORY: Self = Self::Wizard(WizardAction::PickCategory);
    pub const ENTER_CUSTOM_CATEGORY: Self = Self::Wizard(WizardAction::EnterCustomCategory);
    pub const SEARCH_ADDRESS: Self = Self::Location(LocationAction::SearchAddress);
    pub const LOGIN: Self = Self::Session(SessionAction::Login);
}
