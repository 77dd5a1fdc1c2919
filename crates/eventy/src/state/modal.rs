/// Modal types for forms, pickers, and confirmations.
use super::modal_action::ModalAction;

#[derive(Debug)]
pub enum ModalState {
    None,
    TextInput(TextInputModal),
    Message(MessageModal),
    Picker(PickerModal),
    Form(FormModal),
    Confirm(ConfirmModal),
}

/// Byte offset of the char boundary before `cursor`, if any.
fn prev_boundary(value: &str, cursor: usize) -> Option<usize> {
    value[..cursor].char_indices().next_back().map(|(i, _)| i)
}

/// Byte offset of the char boundary after `cursor`, if any.
fn next_boundary(value: &str, cursor: usize) -> Option<usize> {
    value[cursor..].chars().next().map(|c| cursor + c.len_utf8())
}

#[derive(Debug)]
pub struct TextInputModal {
    pub title: String,
    pub prompt: String,
    pub value: String,
    /// Byte offset into `value`, always on a char boundary
    pub cursor_pos: usize,
    pub action: ModalAction,
}

impl TextInputModal {
    pub fn new(title: &str, prompt: &str, default_value: &str, action: ModalAction) -> Self {
        let value = default_value.to_string();
        let cursor_pos = value.len();
        Self {
            title: title.to_string(),
            prompt: prompt.to_string(),
            value,
            cursor_pos,
            action,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(idx) = prev_boundary(&self.value, self.cursor_pos) {
            self.value.remove(idx);
            self.cursor_pos = idx;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_pos < self.value.len() {
            self.value.remove(self.cursor_pos);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(idx) = prev_boundary(&self.value, self.cursor_pos) {
            self.cursor_pos = idx;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(idx) = next_boundary(&self.value, self.cursor_pos) {
            self.cursor_pos = idx;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.value.len();
    }

    /// Cursor position as a character index, for rendering.
    pub fn cursor_chars(&self) -> usize {
        self.value[..self.cursor_pos].chars().count()
    }
}

#[derive(Debug)]
pub struct MessageModal {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl MessageModal {
    pub fn info(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            is_error: false,
        }
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            is_error: true,
        }
    }
}

// ========== PickerModal ==========

#[derive(Debug)]
pub struct PickerModal {
    pub title: String,
    pub options: Vec<String>,
    pub selected_index: usize,
    pub action: ModalAction,
}

impl PickerModal {
    pub fn new(title: &str, options: Vec<String>, action: ModalAction) -> Self {
        Self {
            title: title.to_string(),
            options,
            selected_index: 0,
            action,
        }
    }

    /// Start with this option highlighted when it is present.
    pub fn with_selected(mut self, current: &str) -> Self {
        if let Some(index) = self.options.iter().position(|o| o == current) {
            self.selected_index = index;
        }
        self
    }
}

// ========== FormModal ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    /// Rendered masked; value kept in the clear
    Password,
    ReadOnly,
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub field_type: FieldType,
    pub value: String,
    /// Byte offset into `value`, always on a char boundary
    pub cursor_pos: usize,
}

impl FormField {
    pub fn new(label: &str, field_type: FieldType, value: &str) -> Self {
        Self {
            label: label.to_string(),
            field_type,
            value: value.to_string(),
            cursor_pos: 0,
        }
    }

    pub fn text(label: &str, value: &str) -> Self {
        Self::new(label, FieldType::Text, value)
    }

    pub fn password(label: &str) -> Self {
        Self::new(label, FieldType::Password, "")
    }

    pub fn read_only(label: &str, value: &str) -> Self {
        Self::new(label, FieldType::ReadOnly, value)
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(idx) = prev_boundary(&self.value, self.cursor_pos) {
            self.value.remove(idx);
            self.cursor_pos = idx;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_pos < self.value.len() {
            self.value.remove(self.cursor_pos);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(idx) = prev_boundary(&self.value, self.cursor_pos) {
            self.cursor_pos = idx;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(idx) = next_boundary(&self.value, self.cursor_pos) {
            self.cursor_pos = idx;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.value.len();
    }

    /// Cursor position as a character index, for rendering. For password
    /// fields this maps one-to-one onto the mask characters.
    pub fn cursor_chars(&self) -> usize {
        self.value[..self.cursor_pos].chars().count()
    }
}

#[derive(Debug)]
pub struct FormModal {
    pub title: String,
    pub fields: Vec<FormField>,
    pub focused_field: usize,
    pub editing: bool,
    pub action: ModalAction,
}

impl FormModal {
    pub fn new(title: &str, fields: Vec<FormField>, action: ModalAction) -> Self {
        // Find first editable field
        let first_editable = fields
            .iter()
            .position(|f| f.field_type != FieldType::ReadOnly)
            .unwrap_or(0);

        Self {
            title: title.to_string(),
            fields,
            focused_field: first_editable,
            editing: false,
            action,
        }
    }

    /// Start in editing mode (for better UX)
    pub fn start_editing(mut self) -> Self {
        if !self.fields.is_empty()
            && self.fields[self.focused_field].field_type != FieldType::ReadOnly
        {
            self.editing = true;
            self.fields[self.focused_field].cursor_pos =
                self.fields[self.focused_field].value.len();
        }
        self
    }
}

// ========== ConfirmModal ==========

#[derive(Debug)]
pub struct ConfirmModal {
    pub title: String,
    pub message: String,
    pub action: ModalAction,
}

impl ConfirmModal {
    pub fn new(title: &str, message: &str, action: ModalAction) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_input(initial: &str) -> TextInputModal {
        TextInputModal::new("Search", "Address", initial, ModalAction::SEARCH_ADDRESS)
    }

    #[test]
    fn test_text_input_handles_multibyte_chars() {
        let mut modal = search_input("");
        modal.insert_char('م');
        modal.insert_char('ص');
        modal.insert_char('ر');
        assert_eq!(modal.value, "مصر");
        assert_eq!(modal.cursor_chars(), 3);

        modal.backspace();
        assert_eq!(modal.value, "مص");

        modal.move_cursor_left();
        modal.insert_char('x');
        assert_eq!(modal.value, "مxص");

        modal.delete();
        assert_eq!(modal.value, "مx");
        assert_eq!(modal.cursor_chars(), 2);
    }

    #[test]
    fn test_text_input_cursor_stops_at_edges() {
        let mut modal = search_input("ok");
        modal.move_cursor_right();
        assert_eq!(modal.cursor_pos, 2);
        modal.move_cursor_home();
        modal.move_cursor_left();
        assert_eq!(modal.cursor_pos, 0);
        modal.backspace();
        assert_eq!(modal.value, "ok");
    }

    #[test]
    fn test_form_field_edits_multibyte_value() {
        let mut field = FormField::text("Name", "");
        field.insert_char('ق');
        field.insert_char('ا');
        field.insert_char('ه');
        field.move_cursor_left();
        field.backspace();
        assert_eq!(field.value, "قه");
        field.move_cursor_end();
        field.insert_char('!');
        assert_eq!(field.value, "قه!");
        assert_eq!(field.cursor_chars(), 3);
    }
}
