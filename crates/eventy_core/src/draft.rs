//! The in-progress event draft.

use crate::attachment::AttachedImage;
use crate::category::Category;
use crate::geo::SelectedLocation;

/// Whether an event is open to everyone or invitation-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventVisibility {
    #[default]
    Public,
    Private,
}

impl EventVisibility {
    pub const ALL: [EventVisibility; 2] = [EventVisibility::Public, EventVisibility::Private];

    pub fn label(&self) -> &'static str {
        match self {
            EventVisibility::Public => "Public",
            EventVisibility::Private => "Private",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Recurrence {
    Annual,
    #[default]
    NotAnnual,
}

impl Recurrence {
    pub const ALL: [Recurrence; 2] = [Recurrence::Annual, Recurrence::NotAnnual];

    pub fn label(&self) -> &'static str {
        match self {
            Recurrence::Annual => "Annual",
            Recurrence::NotAnnual => "Not Annual",
        }
    }
}

/// Everything the wizard collects before submission.
///
/// Plain text fields hold whatever the user typed; nothing here validates.
/// `location` replaces the address/coordinate triple atomically, so a draft
/// can never carry an address without coordinates or vice versa.
#[derive(Debug, Default)]
pub struct DraftEvent {
    pub name: String,
    pub description: String,
    pub host_company: String,
    pub category: Option<Category>,
    pub location: Option<SelectedLocation>,
    pub price: String,
    pub date: String,
    pub time: String,
    pub visibility: EventVisibility,
    pub recurrence: Recurrence,
    pub picture: Option<AttachedImage>,
    pub cover_image: Option<AttachedImage>,
}

impl DraftEvent {
    /// Fresh draft with the platform defaults filled in.
    pub fn new() -> Self {
        Self {
            price: "0".to_string(),
            time: "09:00:00 AM".to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_defaults() {
        let draft = DraftEvent::new();
        assert_eq!(draft.price, "0");
        assert_eq!(draft.time, "09:00:00 AM");
        assert_eq!(draft.visibility, EventVisibility::Public);
        assert_eq!(draft.recurrence, Recurrence::NotAnnual);
        assert!(draft.name.is_empty());
        assert!(draft.category.is_none());
        assert!(draft.location.is_none());
        assert!(draft.picture.is_none());
        assert!(draft.cover_image.is_none());
    }
}
