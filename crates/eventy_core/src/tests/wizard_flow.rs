//! Full walks through the wizard steps.

use crate::attachment::ImageField;
use crate::category::Category;
use crate::geo::SelectedLocation;
use crate::steps::WizardStep;
use crate::wizard::EventWizard;

fn fill_basic_info(wizard: &mut EventWizard) {
    let draft = wizard.draft_mut();
    draft.name = "Nile Startup Night".to_string();
    draft.description = "Pitches and networking on a Nile boat".to_string();
    draft.host_company = "Delta Ventures".to_string();
}

fn fill_details(wizard: &mut EventWizard) {
    wizard.select_category("Finance & Business");
    wizard.draft_mut().date = "2025-09-01".to_string();
}

#[test]
fn test_complete_walk_to_review() {
    let mut wizard = EventWizard::new();

    fill_basic_info(&mut wizard);
    wizard.go_next().unwrap();
    assert_eq!(wizard.step(), WizardStep::Details);

    fill_details(&mut wizard);
    wizard.go_next().unwrap();
    assert_eq!(wizard.step(), WizardStep::Location);

    wizard
        .set_location(SelectedLocation::new("Zamalek, Cairo", 30.06, 31.22))
        .unwrap();
    wizard.go_next().unwrap();
    assert_eq!(wizard.step(), WizardStep::Review);

    // Everything entered along the way is visible at review.
    let draft = wizard.draft();
    assert_eq!(draft.name, "Nile Startup Night");
    assert_eq!(
        draft.category,
        Some(Category::Predefined("Finance & Business".to_string()))
    );
    assert_eq!(draft.location.as_ref().unwrap().address, "Zamalek, Cairo");
    assert_eq!(draft.time, "09:00:00 AM");
}

#[test]
fn test_validation_failure_preserves_entered_values() {
    let mut wizard = EventWizard::new();
    wizard.draft_mut().name = "Nile Startup Night".to_string();

    let report = wizard.go_next().unwrap_err();
    assert_eq!(report.missing, vec!["description", "hostCompany"]);
    assert_eq!(report.message, "Please fill all required fields");
    assert_eq!(wizard.step(), WizardStep::BasicInfo);
    assert_eq!(wizard.draft().name, "Nile Startup Night");
}

#[test]
fn test_details_gate_blocks_until_both_fields_set() {
    let mut wizard = EventWizard::new();
    fill_basic_info(&mut wizard);
    wizard.go_next().unwrap();

    wizard.select_category("Technology");
    let report = wizard.go_next().unwrap_err();
    assert_eq!(report.missing, vec!["date"]);
    assert_eq!(report.message, "Please fill all required fields");

    wizard.draft_mut().date = "2025-09-01".to_string();
    wizard.go_next().unwrap();
    assert_eq!(wizard.step(), WizardStep::Location);
}

#[test]
fn test_forward_past_review_is_noop() {
    let mut wizard = EventWizard::new();
    fill_basic_info(&mut wizard);
    wizard.go_next().unwrap();
    fill_details(&mut wizard);
    wizard.go_next().unwrap();
    wizard
        .set_location(SelectedLocation::new("Zamalek, Cairo", 30.06, 31.22))
        .unwrap();
    wizard.go_next().unwrap();

    assert_eq!(wizard.step(), WizardStep::Review);
    wizard.go_next().unwrap();
    assert_eq!(wizard.step(), WizardStep::Review);
}

#[test]
fn test_custom_category_walk() {
    let mut wizard = EventWizard::new();
    fill_basic_info(&mut wizard);
    wizard.go_next().unwrap();

    wizard.select_category("Other");
    wizard.draft_mut().date = "2025-09-01".to_string();

    // Bare "Other" with no text does not pass the gate.
    let report = wizard.go_next().unwrap_err();
    assert_eq!(report.missing, vec!["category"]);

    wizard.set_custom_category("Astronomy");
    wizard.go_next().unwrap();
    assert_eq!(wizard.step(), WizardStep::Location);
}

#[test]
fn test_boundary_rejection_leaves_location_step_unchanged() {
    let mut wizard = EventWizard::new();
    fill_basic_info(&mut wizard);
    wizard.go_next().unwrap();
    fill_details(&mut wizard);
    wizard.go_next().unwrap();

    // A geocode hit outside the box is rejected without touching the draft.
    let alexandria_of_virginia = SelectedLocation::new("Alexandria, VA", 38.8048, -77.0469);
    assert!(wizard.set_location(alexandria_of_virginia).is_err());
    assert!(wizard.draft().location.is_none());

    let report = wizard.go_next().unwrap_err();
    assert_eq!(report.message, "Please select the event location");
    assert_eq!(wizard.step(), WizardStep::Location);
}

#[test]
fn test_reverse_fallback_address_still_selects() {
    let mut wizard = EventWizard::new();
    // When reverse geocoding fails, the picker substitutes a placeholder
    // address and the selection still goes through.
    wizard
        .set_location(SelectedLocation::new("Selected location", 27.18, 31.19))
        .unwrap();
    let loc = wizard.draft().location.as_ref().unwrap();
    assert_eq!(loc.address, "Selected location");
    assert_eq!(loc.latitude, 27.18);
}

#[test]
fn test_reset_returns_wizard_to_initial_state() {
    let mut wizard = EventWizard::new();
    fill_basic_info(&mut wizard);
    wizard.go_next().unwrap();
    fill_details(&mut wizard);
    wizard
        .attach_image(ImageField::Picture, "boat.jpg", "image/jpeg", vec![0; 64])
        .unwrap();
    assert_eq!(wizard.live_previews(), 1);

    wizard.reset();
    assert_eq!(wizard.step(), WizardStep::BasicInfo);
    assert_eq!(wizard.live_previews(), 0);
    assert!(wizard.draft().name.is_empty());
    assert!(wizard.draft().category.is_none());
    assert_eq!(wizard.draft().price, "0");
}
