// Modal builders for multi-step flows
//
// Current flows:
//
// Event creation:
//   EditBasicInfo / EditDetails forms, PickCategory → EnterCustomCategory,
//   PickVisibility, PickRecurrence, AttachImage
//
// Location:
//   SearchAddress text input
//
// Session:
//   Login form

use crate::state::{FormField, FormModal, ModalAction, ModalState, PickerModal, TextInputModal};

/// Builder for form modals
pub struct FormWizard {
    title: String,
    fields: Vec<FormField>,
    action: ModalAction,
    start_editing: bool,
}

impl FormWizard {
    pub fn new(title: impl Into<String>, action: ModalAction) -> Self {
        Self {
            title: title.into(),
            fields: vec![],
            action,
            start_editing: false,
        }
    }

    /// Add a text field
    pub fn text(mut self, label: &str, default: &str) -> Self {
        self.fields.push(FormField::text(label, default));
        self
    }

    /// Add a masked password field
    pub fn password(mut self, label: &str) -> Self {
        self.fields.push(FormField::password(label));
        self
    }

    /// Add a read-only field
    pub fn read_only(mut self, label: &str, value: &str) -> Self {
        self.fields.push(FormField::read_only(label, value));
        self
    }

    /// Start in editing mode
    pub fn editing(mut self) -> Self {
        self.start_editing = true;
        self
    }

    /// Build the form modal
    pub fn build(self) -> ModalState {
        let mut form = FormModal::new(&self.title, self.fields, self.action);
        if self.start_editing {
            form = form.start_editing();
        }
        ModalState::Form(form)
    }
}

/// Builder for picker modals
pub struct PickerWizard {
    title: String,
    options: Vec<String>,
    action: ModalAction,
    selected: Option<String>,
}

impl PickerWizard {
    pub fn new(title: impl Into<String>, action: ModalAction) -> Self {
        Self {
            title: title.into(),
            options: vec![],
            action,
            selected: None,
        }
    }

    /// Add options from an iterator
    pub fn options(mut self, opts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.options.extend(opts.into_iter().map(Into::into));
        self
    }

    /// Highlight this option when it is present
    pub fn selected(mut self, current: impl Into<String>) -> Self {
        self.selected = Some(current.into());
        self
    }

    /// Build the picker modal
    pub fn build(self) -> ModalState {
        let mut picker = PickerModal::new(&self.title, self.options, self.action);
        if let Some(current) = self.selected {
            picker = picker.with_selected(&current);
        }
        ModalState::Picker(picker)
    }
}

/// Shortcuts for common patterns
pub mod shortcuts {
    use super::*;

    /// Create a single text input prompt
    pub fn text_prompt(title: &str, prompt: &str, default: &str, action: ModalAction) -> ModalState {
        ModalState::TextInput(TextInputModal::new(title, prompt, default, action))
    }

    /// Create a simple picker
    pub fn simple_picker<I, S>(title: &str, options: I, action: ModalAction) -> ModalState
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PickerWizard::new(title, action).options(options).build()
    }
}
