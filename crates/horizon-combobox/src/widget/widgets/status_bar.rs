//! StatusBar: the live region that announces combobox status.
//!
//! [`StatusBar`] renders `"status: {status}"` in a polite, atomic live
//! region. It holds no logic of its own; it only refuses to re-render an
//! identical string, so assistive technology never hears the same
//! announcement twice in a row.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use horizon_combobox::widget::widgets::{Combobox, ComboboxConfig, StatusBar};
//!
//! let combobox = Combobox::new("city", "City", ComboboxConfig::default()).unwrap();
//! let status_bar = Arc::new(StatusBar::new("city-status"));
//! status_bar.set_status(&combobox.status());
//!
//! let bar = status_bar.clone();
//! combobox.status_changed.connect(move |status| {
//!     bar.set_status(status);
//! });
//!
//! assert_eq!(status_bar.text(), "status: empty");
//! ```

use horizon_combobox_core::logging::targets;
use horizon_combobox_core::{Property, Signal};

use crate::widget::accessibility::{Accessible, AccessibleRole, AriaAttributes, LivePoliteness};

/// Prefix of the rendered status text.
pub const STATUS_PREFIX: &str = "status: ";

/// A polite live region announcing status text.
pub struct StatusBar {
    id: String,
    text: Property<String>,

    /// Emitted with the rendered text when it changes.
    pub text_changed: Signal<String>,
}

impl StatusBar {
    /// The fixed `role` value.
    pub const ROLE: &'static str = "status";
    /// The fixed `aria-live` value.
    pub const LIVE: LivePoliteness = LivePoliteness::Polite;

    /// Create an empty status bar with the given element id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: Property::default(),
            text_changed: Signal::new(),
        }
    }

    /// The element id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The rendered text, e.g. `"status: ve (3 suggestions)"`.
    pub fn text(&self) -> String {
        self.text.get()
    }

    /// Render `status`.
    ///
    /// Returns `true` if the rendered text changed.
    pub fn set_status(&self, status: &str) -> bool {
        let rendered = format!("{STATUS_PREFIX}{status}");
        if !self.text.set(rendered.clone()) {
            return false;
        }
        tracing::trace!(target: targets::STATUS, text = %rendered, "status bar updated");
        self.text_changed.emit(rendered);
        true
    }

    /// Render as attribute pairs.
    pub fn attributes(&self) -> AriaAttributes {
        vec![
            ("id", self.id.clone()),
            ("role", Self::ROLE.to_string()),
            ("aria-live", Self::LIVE.as_str().to_string()),
            ("aria-atomic", "true".to_string()),
        ]
    }
}

impl std::fmt::Debug for StatusBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusBar")
            .field("id", &self.id)
            .field("text", &self.text.get())
            .finish()
    }
}

impl Accessible for StatusBar {
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Status
    }

    fn accessible_name(&self) -> Option<String> {
        Some(self.text())
    }

    fn accessible_live(&self) -> Option<LivePoliteness> {
        Some(Self::LIVE)
    }

    fn is_accessible_live_atomic(&self) -> bool {
        true
    }
}
