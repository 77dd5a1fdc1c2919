//! The event-creation wizard.
//!
//! `EventWizard` owns the draft and the current step and is the only mutation
//! surface with semantics: navigation gates on the current step's validator,
//! category selection implements the "Other" toggle, image slots enforce the
//! file constraints, and location selection enforces the boundary. Plain text
//! fields are edited through `draft_mut` and never validate on write.

use crate::attachment::{AttachedImage, ImageField, PreviewRegistry};
use crate::category::{Category, OTHER_OPTION};
use crate::draft::DraftEvent;
use crate::error::{BoundaryError, FileConstraintError};
use crate::geo::EGYPT_BOUNDS;
use crate::steps::WizardStep;
use crate::validate::{StepReport, validate_all, validate_step};

#[derive(Debug)]
pub struct EventWizard {
    draft: DraftEvent,
    step: WizardStep,
    previews: PreviewRegistry,
}

impl Default for EventWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl EventWizard {
    pub fn new() -> Self {
        Self {
            draft: DraftEvent::new(),
            step: WizardStep::BasicInfo,
            previews: PreviewRegistry::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &DraftEvent {
        &self.draft
    }

    /// Mutable draft access for plain field edits. No validation runs here.
    pub fn draft_mut(&mut self) -> &mut DraftEvent {
        &mut self.draft
    }

    /// Advance past the current step if it validates.
    ///
    /// At the final step this is a no-op that still reports success; the
    /// review step has nothing to validate.
    pub fn go_next(&mut self) -> Result<(), StepReport> {
        validate_step(self.step, &self.draft)?;
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(())
    }

    /// Step backward without validating. No-op at the first step.
    pub fn go_back(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
    }

    /// Apply a category picker choice.
    ///
    /// "Other" switches to custom entry with empty text, discarding any
    /// previous selection; a predefined name selects it and discards pending
    /// custom text. Unknown names leave the draft untouched.
    pub fn select_category(&mut self, choice: &str) {
        if choice == OTHER_OPTION {
            self.draft.category = Some(Category::Custom(String::new()));
        } else if let Some(category) = Category::predefined(choice) {
            self.draft.category = Some(category);
        }
    }

    /// Replace the pending custom text. Ignored unless "Other" is selected.
    pub fn set_custom_category(&mut self, text: &str) {
        if self.is_custom_category() {
            self.draft.category = Some(Category::Custom(text.to_string()));
        }
    }

    pub fn is_custom_category(&self) -> bool {
        matches!(self.draft.category, Some(Category::Custom(_)))
    }

    /// Select a resolved location. Rejected without mutation when the point
    /// lies outside the selection region.
    pub fn set_location(&mut self, location: crate::geo::SelectedLocation) -> Result<(), BoundaryError> {
        EGYPT_BOUNDS.check(location.point())?;
        self.draft.location = Some(location);
        Ok(())
    }

    /// Attach an image to a slot. On failure the slot keeps its previous
    /// content; on success the replaced image's preview is released.
    pub fn attach_image(
        &mut self,
        field: ImageField,
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<(), FileConstraintError> {
        let image = AttachedImage::new(&self.previews, file_name, mime_type, bytes)?;
        match field {
            ImageField::Picture => self.draft.picture = Some(image),
            ImageField::CoverImage => self.draft.cover_image = Some(image),
        }
        Ok(())
    }

    /// Clear an image slot, releasing its preview.
    pub fn remove_image(&mut self, field: ImageField) {
        match field {
            ImageField::Picture => self.draft.picture = None,
            ImageField::CoverImage => self.draft.cover_image = None,
        }
    }

    /// Validate every step, reporting the first failure. Run before submit.
    pub fn validate_all(&self) -> Result<(), StepReport> {
        validate_all(&self.draft)
    }

    /// Discard the draft, release all previews, and return to the first step.
    pub fn reset(&mut self) {
        self.draft = DraftEvent::new();
        self.step = WizardStep::BasicInfo;
    }

    /// Preview handles currently alive. Zero after a reset.
    pub fn live_previews(&self) -> usize {
        self.previews.live_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_basic_info() -> EventWizard {
        let mut wizard = EventWizard::new();
        let draft = wizard.draft_mut();
        draft.name = "Cairo Tech Meetup".to_string();
        draft.description = "Monthly community meetup".to_string();
        draft.host_company = "Eventy".to_string();
        wizard
    }

    #[test]
    fn test_go_next_gates_on_current_step_only() {
        let mut wizard = EventWizard::new();
        let report = wizard.go_next().unwrap_err();
        assert_eq!(report.step, WizardStep::BasicInfo);
        assert_eq!(wizard.step(), WizardStep::BasicInfo);

        // Later steps stay unvalidated until reached.
        let mut wizard = filled_basic_info();
        assert!(wizard.go_next().is_ok());
        assert_eq!(wizard.step(), WizardStep::Details);
    }

    #[test]
    fn test_go_back_never_validates() {
        let mut wizard = filled_basic_info();
        wizard.go_next().unwrap();
        wizard.draft_mut().name.clear();
        wizard.go_back();
        assert_eq!(wizard.step(), WizardStep::BasicInfo);
        wizard.go_back();
        assert_eq!(wizard.step(), WizardStep::BasicInfo);
    }

    #[test]
    fn test_other_then_predefined_discards_custom_text() {
        let mut wizard = EventWizard::new();
        wizard.select_category("Other");
        assert!(wizard.is_custom_category());
        wizard.set_custom_category("Board Games");
        wizard.select_category("Technology");
        assert_eq!(
            wizard.draft().category,
            Some(Category::Predefined("Technology".to_string()))
        );
        assert!(!wizard.is_custom_category());
    }

    #[test]
    fn test_custom_text_ignored_without_other_selected() {
        let mut wizard = EventWizard::new();
        wizard.select_category("Technology");
        wizard.set_custom_category("Board Games");
        assert_eq!(
            wizard.draft().category,
            Some(Category::Predefined("Technology".to_string()))
        );
    }

    #[test]
    fn test_unknown_category_choice_is_ignored() {
        let mut wizard = EventWizard::new();
        wizard.select_category("Technology");
        wizard.select_category("Nonsense");
        assert_eq!(
            wizard.draft().category,
            Some(Category::Predefined("Technology".to_string()))
        );
    }

    #[test]
    fn test_out_of_bounds_location_leaves_draft_unchanged() {
        let mut wizard = EventWizard::new();
        let paris = crate::geo::SelectedLocation::new("Paris", 48.8566, 2.3522);
        assert!(wizard.set_location(paris).is_err());
        assert!(wizard.draft().location.is_none());

        let cairo = crate::geo::SelectedLocation::new("Cairo", 30.0444, 31.2357);
        wizard.set_location(cairo).unwrap();
        assert!(wizard.draft().location.is_some());
    }

    #[test]
    fn test_attach_replace_and_remove_track_previews() {
        let mut wizard = EventWizard::new();
        wizard
            .attach_image(ImageField::Picture, "a.png", "image/png", vec![0; 16])
            .unwrap();
        assert_eq!(wizard.live_previews(), 1);

        // Replacing releases the old preview.
        wizard
            .attach_image(ImageField::Picture, "b.png", "image/png", vec![0; 16])
            .unwrap();
        assert_eq!(wizard.live_previews(), 1);
        assert_eq!(wizard.draft().picture.as_ref().unwrap().file_name, "b.png");

        // Rejected files leave the slot and the count alone.
        let err = wizard.attach_image(ImageField::Picture, "c.txt", "text/plain", vec![0; 16]);
        assert!(err.is_err());
        assert_eq!(wizard.live_previews(), 1);
        assert_eq!(wizard.draft().picture.as_ref().unwrap().file_name, "b.png");

        wizard.remove_image(ImageField::Picture);
        assert_eq!(wizard.live_previews(), 0);
    }

    #[test]
    fn test_reset_restores_defaults_and_releases_previews() {
        let mut wizard = filled_basic_info();
        wizard
            .attach_image(ImageField::Picture, "a.png", "image/png", vec![0; 16])
            .unwrap();
        wizard
            .attach_image(ImageField::CoverImage, "b.png", "image/png", vec![0; 16])
            .unwrap();
        wizard.go_next().unwrap();
        assert_eq!(wizard.live_previews(), 2);

        wizard.reset();
        assert_eq!(wizard.step(), WizardStep::BasicInfo);
        assert_eq!(wizard.live_previews(), 0);
        assert!(wizard.draft().name.is_empty());
        assert_eq!(wizard.draft().price, "0");
        assert_eq!(wizard.draft().time, "09:00:00 AM");
    }
}
