//! Focus requests.
//!
//! The combobox never touches platform focus handles. When it needs focus
//! back on the field (after a pointer selection pulled it into the list) it
//! emits a [`FocusRequest`] that the rendering layer executes.
//!
//! Executing a request must be idempotent: asking to focus an element that
//! already has focus is a no-op. [`FocusManager`] implements that contract
//! for hosts (and tests) that want to track focus without a real platform.

use horizon_combobox_core::logging::targets;

/// A request for the rendering layer to move input focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusRequest {
    /// Element id of the element that should receive focus.
    pub target: String,
}

impl FocusRequest {
    /// Request focus for the field with the given element id.
    pub fn field(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

/// Tracks which element currently has focus.
#[derive(Debug, Default)]
pub struct FocusManager {
    focused: Option<String>,
}

impl FocusManager {
    /// Create a new focus manager with nothing focused.
    pub fn new() -> Self {
        Self { focused: None }
    }

    /// Get the currently focused element id.
    #[inline]
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Check if the given element has focus.
    pub fn has_focus(&self, id: &str) -> bool {
        self.focused.as_deref() == Some(id)
    }

    /// Execute a focus request.
    ///
    /// Returns `true` if focus moved, `false` if the target already had it.
    pub fn apply(&mut self, request: &FocusRequest) -> bool {
        if self.has_focus(&request.target) {
            return false;
        }
        tracing::trace!(
            target: targets::FOCUS,
            from = ?self.focused,
            to = %request.target,
            "focus moved"
        );
        self.focused = Some(request.target.clone());
        true
    }

    /// Clear focus (e.g. the pointer moved it into the option list).
    pub fn clear_focus(&mut self) {
        self.focused = None;
    }
}
