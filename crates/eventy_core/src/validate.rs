//! Per-step validation.
//!
//! Each step has its own validator; nothing validates while the user types.
//! Validators run when the wizard advances and once more across all steps
//! before submission.

use jiff::civil::Date;

use crate::category::Category;
use crate::draft::DraftEvent;
use crate::steps::WizardStep;

/// Outcome of a failed step validation: which fields are missing and the
/// banner text to show for this step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: WizardStep,
    pub missing: Vec<&'static str>,
    pub message: &'static str,
}

const MSG_REQUIRED_FIELDS: &str = "Please fill all required fields";
const MSG_LOCATION: &str = "Please select the event location";

/// Validate a single step of the draft.
pub fn validate_step(step: WizardStep, draft: &DraftEvent) -> Result<(), StepReport> {
    let missing = match step {
        WizardStep::BasicInfo => missing_basic_info(draft),
        WizardStep::Details => missing_details(draft),
        WizardStep::Location => missing_location(draft),
        WizardStep::Review => Vec::new(),
    };
    if missing.is_empty() {
        return Ok(());
    }
    let message = match step {
        WizardStep::Location => MSG_LOCATION,
        _ => MSG_REQUIRED_FIELDS,
    };
    Err(StepReport {
        step,
        missing,
        message,
    })
}

/// Validate every step in order, reporting the first failure.
pub fn validate_all(draft: &DraftEvent) -> Result<(), StepReport> {
    for step in WizardStep::ALL {
        validate_step(step, draft)?;
    }
    Ok(())
}

fn missing_basic_info(draft: &DraftEvent) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if draft.name.trim().is_empty() {
        missing.push("name");
    }
    if draft.description.trim().is_empty() {
        missing.push("description");
    }
    if draft.host_company.trim().is_empty() {
        missing.push("hostCompany");
    }
    missing
}

fn missing_details(draft: &DraftEvent) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if !category_is_usable(draft.category.as_ref()) {
        missing.push("category");
    }
    // An unparseable date counts as missing so submission never sees one.
    if Date::strptime("%Y-%m-%d", draft.date.trim()).is_err() {
        missing.push("date");
    }
    missing
}

fn missing_location(draft: &DraftEvent) -> Vec<&'static str> {
    match &draft.location {
        Some(loc) if !loc.address.is_empty() => Vec::new(),
        _ => vec!["location"],
    }
}

fn category_is_usable(category: Option<&Category>) -> bool {
    match category {
        Some(Category::Predefined(_)) => true,
        Some(Category::Custom(text)) => !text.trim().is_empty(),
        None => false,
    }
}
