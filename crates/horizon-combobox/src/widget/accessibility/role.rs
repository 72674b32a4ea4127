//! Accessibility roles for the combobox and its parts.

#[cfg(feature = "accessibility")]
use accesskit::Role;

/// The accessibility role of an element.
///
/// Covers the elements a combobox renders. Maps to the WAI-ARIA role
/// attribute and, with the `accessibility` feature, to AccessKit's `Role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum AccessibleRole {
    /// A generic element with no specific role.
    #[default]
    Unknown,

    /// A text input paired with a popup list.
    ComboBox,

    /// The popup list of suggestions.
    ListBox,

    /// An item within the list of suggestions.
    ListBoxOption,

    /// A static text label.
    Label,

    /// A polite live region.
    Status,

    /// An assertive live region for errors.
    Alert,
}

impl AccessibleRole {
    /// The value of the `role` attribute, if the element carries one.
    ///
    /// Labels are plain `<label>` elements and have no explicit role.
    pub fn aria_role(self) -> Option<&'static str> {
        match self {
            AccessibleRole::Unknown | AccessibleRole::Label => None,
            AccessibleRole::ComboBox => Some("combobox"),
            AccessibleRole::ListBox => Some("listbox"),
            AccessibleRole::ListBoxOption => Some("option"),
            AccessibleRole::Status => Some("status"),
            AccessibleRole::Alert => Some("alert"),
        }
    }

    /// Convert to AccessKit's Role enum.
    #[cfg(feature = "accessibility")]
    pub fn to_accesskit_role(self) -> Role {
        match self {
            AccessibleRole::Unknown => Role::Unknown,
            AccessibleRole::ComboBox => Role::ComboBox,
            AccessibleRole::ListBox => Role::ListBox,
            AccessibleRole::ListBoxOption => Role::ListBoxOption,
            AccessibleRole::Label => Role::Label,
            AccessibleRole::Status => Role::Status,
            AccessibleRole::Alert => Role::Alert,
        }
    }
}

#[cfg(feature = "accessibility")]
impl From<AccessibleRole> for Role {
    fn from(role: AccessibleRole) -> Self {
        role.to_accesskit_role()
    }
}
