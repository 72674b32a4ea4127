//! Suggestion entries.

use std::fmt;

/// A single suggestion offered by the combobox.
///
/// `value` is the canonical identifier written into the field on commit and
/// compared case-insensitively against the field text. `label` is only
/// displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComboboxOption {
    /// Canonical value.
    pub value: String,
    /// Display label.
    pub label: String,
}

impl ComboboxOption {
    /// Create an option with distinct value and label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Create an option whose label is its value.
    pub fn from_value(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }

    /// Check whether this option's value equals `text`, ignoring case.
    pub fn matches_exactly(&self, text: &str) -> bool {
        self.value.to_lowercase() == text.to_lowercase()
    }
}

impl From<&str> for ComboboxOption {
    fn from(value: &str) -> Self {
        Self::from_value(value)
    }
}

impl From<String> for ComboboxOption {
    fn from(value: String) -> Self {
        Self::from_value(value)
    }
}

impl fmt::Display for ComboboxOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
