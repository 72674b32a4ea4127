//! Render-ready view model.
//!
//! A [`ComboboxView`] is everything a renderer needs for one frame. It is
//! rebuilt from scratch by [`Combobox::view`](super::Combobox::view) and
//! never written back.

use crate::widget::accessibility::{
    AriaAttributes, ComboboxAria, ListboxAria, LivePoliteness, OptionAria,
};

/// Text of the loading indicator appended to the label.
pub const LOADING_INDICATOR: &str = "(loading...)";

/// The visible label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelView {
    /// Label element id.
    pub id: String,
    /// Id of the input the label is for.
    pub for_id: String,
    /// Label text.
    pub text: String,
    /// Render [`LOADING_INDICATOR`] after the text, hidden from assistive tech.
    pub loading_indicator: bool,
}

/// Helper text under the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperView {
    /// Helper element id.
    pub id: String,
    /// Helper text.
    pub text: String,
}

/// The text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    /// Input element id.
    pub id: String,
    /// Current text.
    pub value: String,
    /// Placeholder, if configured.
    pub placeholder: Option<String>,
    /// The input is disabled.
    pub disabled: bool,
    /// ARIA attributes.
    pub aria: ComboboxAria,
}

impl InputView {
    /// All attributes of the input element, ARIA included.
    pub fn attributes(&self) -> AriaAttributes {
        let mut attrs = vec![
            ("id", self.id.clone()),
            ("type", "text".to_string()),
            ("value", self.value.clone()),
        ];
        if let Some(placeholder) = &self.placeholder {
            attrs.push(("placeholder", placeholder.clone()));
        }
        if self.disabled {
            attrs.push(("disabled", "true".to_string()));
        }
        attrs.extend(self.aria.attributes());
        attrs
    }
}

/// One rendered option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    /// Position in the displayed list.
    pub index: usize,
    /// Number of options in the displayed list.
    pub set_size: usize,
    /// Canonical value.
    pub value: String,
    /// Display label.
    pub label: String,
    /// ARIA attributes, including the element id and `aria-selected`.
    pub aria: OptionAria,
}

impl OptionView {
    /// Option element id.
    #[inline]
    pub fn id(&self) -> &str {
        &self.aria.id
    }

    /// The option is highlighted.
    #[inline]
    pub fn selected(&self) -> bool {
        self.aria.selected
    }
}

/// The rendered suggestion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListboxView {
    /// ARIA attributes.
    pub aria: ListboxAria,
    /// Displayed options in order.
    pub options: Vec<OptionView>,
    /// Index the renderer must scroll into view with `block: nearest`.
    pub scroll_into_view: Option<usize>,
}

/// The error region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    /// Error element id.
    pub id: String,
    /// Human-readable message.
    pub message: String,
}

impl ErrorView {
    /// The fixed `role` value.
    pub const ROLE: &'static str = "alert";
    /// The fixed `aria-live` value.
    pub const LIVE: LivePoliteness = LivePoliteness::Assertive;

    /// Render as attribute pairs.
    pub fn attributes(&self) -> AriaAttributes {
        vec![
            ("id", self.id.clone()),
            ("role", Self::ROLE.to_string()),
            ("aria-live", Self::LIVE.as_str().to_string()),
        ]
    }
}

/// Flags the renderer uses for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisualFlags {
    /// The validator accepts the current text.
    pub valid: bool,
    /// An upstream error is set.
    pub error: bool,
    /// The field is disabled.
    pub disabled: bool,
    /// Suggestions are loading.
    pub loading: bool,
    /// Show a loading spinner: loading and the text is long enough to query.
    pub show_loading_indicator: bool,
}

/// Everything needed to render the combobox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboboxView {
    /// The visible label.
    pub label: LabelView,
    /// Helper text, if configured.
    pub helper: Option<HelperView>,
    /// The text input.
    pub input: InputView,
    /// The suggestion list, present only while it is shown.
    pub listbox: Option<ListboxView>,
    /// The error region, present only while an error is set.
    pub error: Option<ErrorView>,
    /// Live-region status text.
    pub status: String,
    /// Styling flags.
    pub flags: VisualFlags,
}

impl ComboboxView {
    /// Whether the suggestion list is shown.
    #[inline]
    pub fn list_visible(&self) -> bool {
        self.listbox.is_some()
    }

    /// The rendered options; empty while the list is hidden.
    pub fn options(&self) -> &[OptionView] {
        self.listbox
            .as_ref()
            .map(|listbox| listbox.options.as_slice())
            .unwrap_or_default()
    }
}
