//! Wizard editing actions for the create tab.
//!
//! Modal openers build the edit surface for the step the user is on; the
//! confirmed-value handlers write back into the wizard's draft. Plain text
//! writes never validate, matching the wizard's advance-time validation.

use std::fs;
use std::path::Path;

use eventy_core::category::{OTHER_OPTION, picker_options};
use eventy_core::{Category, EventVisibility, ImageField, Recurrence, attachment};

use crate::state::{AppState, ModalAction, ModalState, WizardAction};

use super::wizard::{FormWizard, PickerWizard, shortcuts};
use super::{ActionContext, ActionResult};

pub fn open_basic_info_form(state: &AppState) -> ModalState {
    let draft = state.wizard.draft();
    FormWizard::new("Basic Info", ModalAction::EDIT_BASIC_INFO)
        .text("Name", &draft.name)
        .text("Description", &draft.description)
        .text("Host Company", &draft.host_company)
        .editing()
        .build()
}

pub fn open_details_form(state: &AppState) -> ModalState {
    let draft = state.wizard.draft();
    FormWizard::new("Details", ModalAction::EDIT_DETAILS)
        .text("Date (YYYY-MM-DD)", &draft.date)
        .text("Time", &draft.time)
        .text("Price (EGP)", &draft.price)
        .editing()
        .build()
}

pub fn open_category_picker(state: &AppState) -> ModalState {
    let mut picker = PickerWizard::new("Category", ModalAction::PICK_CATEGORY)
        .options(picker_options());
    if let Some(category) = &state.wizard.draft().category {
        picker = picker.selected(match category {
            Category::Predefined(name) => name.as_str(),
            Category::Custom(_) => OTHER_OPTION,
        });
    }
    picker.build()
}

pub fn open_visibility_picker(state: &AppState) -> ModalState {
    PickerWizard::new("Visibility", ModalAction::Wizard(WizardAction::PickVisibility))
        .options(EventVisibility::ALL.map(|v| v.label()))
        .selected(state.wizard.draft().visibility.label())
        .build()
}

pub fn open_recurrence_picker(state: &AppState) -> ModalState {
    PickerWizard::new("Recurrence", ModalAction::Wizard(WizardAction::PickRecurrence))
        .options(Recurrence::ALL.map(|r| r.label()))
        .selected(state.wizard.draft().recurrence.label())
        .build()
}

pub fn open_image_prompt(field: ImageField) -> ModalState {
    shortcuts::text_prompt(
        field.label(),
        "Path to image file",
        "",
        ModalAction::Wizard(WizardAction::AttachImage(field)),
    )
}

/// Apply a confirmed wizard modal to the draft.
pub fn handle_wizard_action(
    state: &mut AppState,
    action: WizardAction,
    ctx: &ActionContext,
) -> ActionResult {
    match action {
        WizardAction::EditBasicInfo => {
            let [name, description, host_company] = ctx.values() else {
                return ActionResult::error("Invalid form data");
            };
            let draft = state.wizard.draft_mut();
            draft.name = name.clone();
            draft.description = description.clone();
            draft.host_company = host_company.clone();
            ActionResult::close()
        }
        WizardAction::EditDetails => {
            let [date, time, price] = ctx.values() else {
                return ActionResult::error("Invalid form data");
            };
            let draft = state.wizard.draft_mut();
            draft.date = date.clone();
            draft.time = time.clone();
            draft.price = price.clone();
            ActionResult::close()
        }
        WizardAction::PickCategory => {
            state.wizard.select_category(ctx.value());
            if ctx.value() == OTHER_OPTION {
                // "Other" chains into free-text entry.
                ActionResult::modal(shortcuts::text_prompt(
                    "Custom Category",
                    "Category name",
                    "",
                    ModalAction::ENTER_CUSTOM_CATEGORY,
                ))
            } else {
                ActionResult::close()
            }
        }
        WizardAction::EnterCustomCategory => {
            state.wizard.set_custom_category(ctx.value());
            ActionResult::close()
        }
        WizardAction::PickVisibility => {
            if let Some(choice) = EventVisibility::ALL
                .into_iter()
                .find(|v| v.label() == ctx.value())
            {
                state.wizard.draft_mut().visibility = choice;
            }
            ActionResult::close()
        }
        WizardAction::PickRecurrence => {
            if let Some(choice) = Recurrence::ALL
                .into_iter()
                .find(|r| r.label() == ctx.value())
            {
                state.wizard.draft_mut().recurrence = choice;
            }
            ActionResult::close()
        }
        WizardAction::AttachImage(field) => attach_image_from_path(state, field, ctx.value()),
    }
}

fn attach_image_from_path(state: &mut AppState, field: ImageField, path: &str) -> ActionResult {
    let path = path.trim();
    if path.is_empty() {
        return ActionResult::close();
    }
    let file_name = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => return ActionResult::error(format!("Could not read {path}: {e}")),
    };
    let mime_type = attachment::mime_for_file_name(&file_name);
    match state.wizard.attach_image(field, file_name, mime_type, bytes) {
        Ok(()) => {
            state.set_status(format!("{} attached", field.label()));
            ActionResult::close()
        }
        Err(e) => ActionResult::error(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_info_form_writes_back() {
        let mut state = AppState::default();
        let values = ["Cairo Tech Meetup", "Monthly meetup", "Eventy"].map(str::to_string);
        let ctx = ActionContext::new(&values);
        let result = handle_wizard_action(&mut state, WizardAction::EditBasicInfo, &ctx);
        assert!(matches!(result, ActionResult::Done(None)));
        assert_eq!(state.wizard.draft().name, "Cairo Tech Meetup");
        assert_eq!(state.wizard.draft().host_company, "Eventy");
    }

    #[test]
    fn test_details_form_never_validates_on_write() {
        let mut state = AppState::default();
        let values = ["not a date", "whenever", "free"].map(str::to_string);
        let ctx = ActionContext::new(&values);
        let result = handle_wizard_action(&mut state, WizardAction::EditDetails, &ctx);
        assert!(matches!(result, ActionResult::Done(None)));
        assert_eq!(state.wizard.draft().date, "not a date");
        assert_eq!(state.wizard.draft().price, "free");
    }

    #[test]
    fn test_description_may_contain_delimiter_characters() {
        let mut state = AppState::default();
        let values = ["Hack Night", "Talks | food | games", "Eventy"].map(str::to_string);
        let ctx = ActionContext::new(&values);
        let result = handle_wizard_action(&mut state, WizardAction::EditBasicInfo, &ctx);
        assert!(matches!(result, ActionResult::Done(None)));
        assert_eq!(state.wizard.draft().description, "Talks | food | games");
    }

    #[test]
    fn test_other_category_chains_text_entry() {
        let mut state = AppState::default();
        let values = ["Other".to_string()];
        let ctx = ActionContext::new(&values);
        let result = handle_wizard_action(&mut state, WizardAction::PickCategory, &ctx);
        match result {
            ActionResult::Done(Some(ModalState::TextInput(modal))) => {
                assert_eq!(modal.action, ModalAction::ENTER_CUSTOM_CATEGORY);
            }
            _ => panic!("Expected chained text input"),
        }
        assert!(state.wizard.is_custom_category());
    }

    #[test]
    fn test_predefined_category_closes() {
        let mut state = AppState::default();
        let values = ["Technology".to_string()];
        let ctx = ActionContext::new(&values);
        let result = handle_wizard_action(&mut state, WizardAction::PickCategory, &ctx);
        assert!(matches!(result, ActionResult::Done(None)));
        assert_eq!(
            state.wizard.draft().category,
            Some(Category::Predefined("Technology".to_string()))
        );
    }

    #[test]
    fn test_visibility_pick_by_label() {
        let mut state = AppState::default();
        let values = ["Private".to_string()];
        let ctx = ActionContext::new(&values);
        handle_wizard_action(&mut state, WizardAction::PickVisibility, &ctx);
        assert_eq!(state.wizard.draft().visibility, EventVisibility::Private);
    }

    #[test]
    fn test_attach_unreadable_path_reports_error() {
        let mut state = AppState::default();
        let values = ["/no/such/file.png".to_string()];
        let ctx = ActionContext::new(&values);
        let result = handle_wizard_action(
            &mut state,
            WizardAction::AttachImage(ImageField::Picture),
            &ctx,
        );
        assert!(matches!(result, ActionResult::Error(_)));
        assert!(state.wizard.draft().picture.is_none());
    }

    #[test]
    fn test_category_picker_preselects_other_for_custom() {
        let mut state = AppState::default();
        state.wizard.select_category("Other");
        state.wizard.set_custom_category("Board Games");
        match open_category_picker(&state) {
            ModalState::Picker(picker) => {
                assert_eq!(picker.options[picker.selected_index], "Other");
            }
            _ => panic!("Expected picker"),
        }
    }
}
