//! WAI-ARIA attribute derivation.
//!
//! Every element id the combobox renders is derived from the field id, so
//! ids are stable and predictable across renders:
//!
//! | Element      | Id                      |
//! |--------------|-------------------------|
//! | input        | `{field}`               |
//! | label        | `{field}-label`         |
//! | listbox      | `{field}-listbox`       |
//! | option `i`   | `{field}-option-{i}`    |
//! | helper text  | `{field}-helper`        |
//! | error region | `{field}-error`         |
//!
//! The attribute sets here are recomputed on every render and never stored.

use crate::error::{Error, Result};

/// An ordered list of `(attribute, value)` pairs, ready to render.
pub type AriaAttributes = Vec<(&'static str, String)>;

fn bool_attr(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

/// Element ids derived from a field id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    /// Id of the input element.
    pub field: String,
    /// Id of the visible label.
    pub label: String,
    /// Id of the listbox.
    pub listbox: String,
    /// Id of the helper text.
    pub helper: String,
    /// Id of the error region.
    pub error: String,
}

impl ElementIds {
    /// Derive element ids from a field id.
    ///
    /// The field id must be non-empty and free of whitespace, since it is
    /// used verbatim inside space-separated id reference lists.
    pub fn new(field_id: &str) -> Result<Self> {
        if field_id.is_empty() {
            return Err(Error::invalid_field_id(field_id, "must not be empty"));
        }
        if field_id.chars().any(char::is_whitespace) {
            return Err(Error::invalid_field_id(field_id, "must not contain whitespace"));
        }
        Ok(Self {
            field: field_id.to_string(),
            label: format!("{field_id}-label"),
            listbox: format!("{field_id}-listbox"),
            helper: format!("{field_id}-helper"),
            error: format!("{field_id}-error"),
        })
    }

    /// Id of the option at `index`.
    pub fn option_id(&self, index: usize) -> String {
        format!("{}-option-{index}", self.field)
    }

    /// The `aria-describedby` value: helper id then error id, space separated.
    pub fn described_by(&self, has_helper: bool, has_error: bool) -> Option<String> {
        match (has_helper, has_error) {
            (false, false) => None,
            (true, false) => Some(self.helper.clone()),
            (false, true) => Some(self.error.clone()),
            (true, true) => Some(format!("{} {}", self.helper, self.error)),
        }
    }
}

/// ARIA attributes of the input element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboboxAria {
    /// `aria-expanded`: whether the suggestion list is shown.
    pub expanded: bool,
    /// `aria-controls`: the listbox id, only while the list is shown.
    pub controls: Option<String>,
    /// `aria-activedescendant`: the highlighted option id, only while shown.
    pub active_descendant: Option<String>,
    /// `aria-invalid`: an error is set.
    pub invalid: bool,
    /// `aria-busy`: suggestions are loading.
    pub busy: bool,
    /// `aria-labelledby`: the visible label id.
    pub labelled_by: String,
    /// `aria-describedby`: helper and error ids.
    pub described_by: Option<String>,
}

impl ComboboxAria {
    /// The fixed `role` value.
    pub const ROLE: &'static str = "combobox";
    /// The fixed `aria-autocomplete` value.
    pub const AUTOCOMPLETE: &'static str = "list";

    /// Derive the input attributes for one render.
    pub fn derive(
        ids: &ElementIds,
        visible: bool,
        highlighted: Option<usize>,
        invalid: bool,
        busy: bool,
        has_helper: bool,
    ) -> Self {
        Self {
            expanded: visible,
            controls: visible.then(|| ids.listbox.clone()),
            active_descendant: highlighted
                .filter(|_| visible)
                .map(|index| ids.option_id(index)),
            invalid,
            busy,
            labelled_by: ids.label.clone(),
            described_by: ids.described_by(has_helper, invalid),
        }
    }

    /// Render as attribute pairs. Absent attributes are omitted.
    pub fn attributes(&self) -> AriaAttributes {
        let mut attrs = vec![
            ("role", Self::ROLE.to_string()),
            ("aria-expanded", bool_attr(self.expanded)),
        ];
        if let Some(controls) = &self.controls {
            attrs.push(("aria-controls", controls.clone()));
        }
        if let Some(active) = &self.active_descendant {
            attrs.push(("aria-activedescendant", active.clone()));
        }
        attrs.push(("aria-autocomplete", Self::AUTOCOMPLETE.to_string()));
        attrs.push(("aria-invalid", bool_attr(self.invalid)));
        attrs.push(("aria-busy", bool_attr(self.busy)));
        attrs.push(("aria-labelledby", self.labelled_by.clone()));
        if let Some(described_by) = &self.described_by {
            attrs.push(("aria-describedby", described_by.clone()));
        }
        attrs
    }
}

/// ARIA attributes of the listbox element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListboxAria {
    /// Listbox element id.
    pub id: String,
    /// `aria-labelledby`: the same label as the input.
    pub labelled_by: String,
}

impl ListboxAria {
    /// Derive the listbox attributes.
    pub fn derive(ids: &ElementIds) -> Self {
        Self {
            id: ids.listbox.clone(),
            labelled_by: ids.label.clone(),
        }
    }

    /// Render as attribute pairs.
    pub fn attributes(&self) -> AriaAttributes {
        vec![
            ("id", self.id.clone()),
            ("role", "listbox".to_string()),
            ("aria-labelledby", self.labelled_by.clone()),
        ]
    }
}

/// ARIA attributes of one rendered option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionAria {
    /// Option element id.
    pub id: String,
    /// `aria-selected`: the option is highlighted.
    pub selected: bool,
}

impl OptionAria {
    /// Derive the attributes of the option at `index`.
    pub fn derive(ids: &ElementIds, index: usize, highlighted: Option<usize>) -> Self {
        Self {
            id: ids.option_id(index),
            selected: highlighted == Some(index),
        }
    }

    /// Render as attribute pairs.
    pub fn attributes(&self) -> AriaAttributes {
        vec![
            ("id", self.id.clone()),
            ("role", "option".to_string()),
            ("aria-selected", bool_attr(self.selected)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> ElementIds {
        ElementIds::new("city").unwrap()
    }

    fn attr<'a>(attrs: &'a AriaAttributes, name: &str) -> Option<&'a str> {
        attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn test_element_ids() {
        let ids = ids();
        assert_eq!(ids.field, "city");
        assert_eq!(ids.label, "city-label");
        assert_eq!(ids.listbox, "city-listbox");
        assert_eq!(ids.helper, "city-helper");
        assert_eq!(ids.error, "city-error");
        assert_eq!(ids.option_id(3), "city-option-3");
    }

    #[test]
    fn test_element_ids_reject_bad_field_ids() {
        assert!(matches!(ElementIds::new(""), Err(Error::InvalidFieldId { .. })));
        assert!(matches!(ElementIds::new("my city"), Err(Error::InvalidFieldId { .. })));
    }

    #[test]
    fn test_described_by() {
        let ids = ids();
        assert_eq!(ids.described_by(false, false), None);
        assert_eq!(ids.described_by(true, false).as_deref(), Some("city-helper"));
        assert_eq!(ids.described_by(false, true).as_deref(), Some("city-error"));
        assert_eq!(
            ids.described_by(true, true).as_deref(),
            Some("city-helper city-error")
        );
    }

    #[test]
    fn test_closed_combobox_omits_controls_and_descendant() {
        let aria = ComboboxAria::derive(&ids(), false, Some(1), false, true, false);
        let attrs = aria.attributes();
        assert_eq!(attr(&attrs, "role"), Some("combobox"));
        assert_eq!(attr(&attrs, "aria-expanded"), Some("false"));
        assert_eq!(attr(&attrs, "aria-controls"), None);
        assert_eq!(attr(&attrs, "aria-activedescendant"), None);
        assert_eq!(attr(&attrs, "aria-autocomplete"), Some("list"));
        assert_eq!(attr(&attrs, "aria-busy"), Some("true"));
        assert_eq!(attr(&attrs, "aria-describedby"), None);
    }

    #[test]
    fn test_open_combobox_references_listbox_and_option() {
        let aria = ComboboxAria::derive(&ids(), true, Some(2), false, false, true);
        let attrs = aria.attributes();
        assert_eq!(attr(&attrs, "aria-expanded"), Some("true"));
        assert_eq!(attr(&attrs, "aria-controls"), Some("city-listbox"));
        assert_eq!(attr(&attrs, "aria-activedescendant"), Some("city-option-2"));
        assert_eq!(attr(&attrs, "aria-invalid"), Some("false"));
        assert_eq!(attr(&attrs, "aria-labelledby"), Some("city-label"));
        assert_eq!(attr(&attrs, "aria-describedby"), Some("city-helper"));

        let aria = ComboboxAria::derive(&ids(), true, None, false, false, false);
        assert_eq!(aria.active_descendant, None);
    }

    #[test]
    fn test_invalid_combobox_describes_error() {
        let aria = ComboboxAria::derive(&ids(), false, None, true, false, true);
        assert!(aria.invalid);
        assert_eq!(aria.described_by.as_deref(), Some("city-helper city-error"));
    }

    #[test]
    fn test_listbox_and_options_share_label() {
        let listbox = ListboxAria::derive(&ids());
        let attrs = listbox.attributes();
        assert_eq!(attr(&attrs, "role"), Some("listbox"));
        assert_eq!(attr(&attrs, "aria-labelledby"), Some("city-label"));

        let selected = OptionAria::derive(&ids(), 1, Some(1));
        let other = OptionAria::derive(&ids(), 0, Some(1));
        assert!(selected.selected);
        assert!(!other.selected);
        assert_eq!(attr(&other.attributes(), "id"), Some("city-option-0"));
        assert_eq!(attr(&other.attributes(), "aria-selected"), Some("false"));
    }
}
