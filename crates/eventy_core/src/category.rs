//! Event categories.
//!
//! The platform ships a fixed category list plus an "Other" escape hatch for
//! free-text entry. The two cases are kept as distinct variants so a custom
//! label can never be mistaken for a predefined one.

use serde::{Deserialize, Serialize};

/// Categories offered by the platform, in picker order.
pub const PREDEFINED_CATEGORIES: [&str; 6] = [
    "Finance & Business",
    "Technology",
    "Health & Wellness",
    "Arts & Culture",
    "Education",
    "Social",
];

/// Picker entry that switches the category field into custom-entry mode.
pub const OTHER_OPTION: &str = "Other";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// One of [`PREDEFINED_CATEGORIES`]
    Predefined(String),
    /// Free text entered after choosing "Other"
    Custom(String),
}

impl Category {
    /// Build a predefined category, or `None` when the name is not in the list.
    pub fn predefined(name: &str) -> Option<Self> {
        PREDEFINED_CATEGORIES
            .iter()
            .find(|c| **c == name)
            .map(|c| Category::Predefined((*c).to_string()))
    }

    pub fn is_predefined_name(name: &str) -> bool {
        PREDEFINED_CATEGORIES.contains(&name)
    }

    pub fn label(&self) -> &str {
        match self {
            Category::Predefined(name) => name,
            Category::Custom(text) => text,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Category::Custom(_))
    }

    /// Value sent on the wire. The server stores categories lower-cased.
    pub fn wire_value(&self) -> String {
        self.label().to_lowercase()
    }
}

/// Options shown in the category picker: the predefined list plus "Other".
pub fn picker_options() -> Vec<&'static str> {
    let mut options: Vec<&'static str> = PREDEFINED_CATEGORIES.to_vec();
    options.push(OTHER_OPTION);
    options
}
