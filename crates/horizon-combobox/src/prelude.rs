//! Prelude module for Horizon Combobox.
//!
//! ```
//! use horizon_combobox::prelude::*;
//! ```
//!
//! This provides access to:
//! - Signal/slot system (`Signal`, `Property`)
//! - The engine and its configuration (`Combobox`, `ComboboxConfig`)
//! - Suggestion sources (`SuggestionProvider`, `StringListModel`)
//! - Input events and focus requests

// ============================================================================
// Signal/Slot and Property System
// ============================================================================

pub use horizon_combobox_core::{ConnectionId, Property, Signal};

// ============================================================================
// Combobox
// ============================================================================

pub use crate::widget::widgets::{
    Combobox, ComboboxConfig, ComboboxOption, ComboboxSettings, ComboboxView, CommitOutcome,
    StatusBar,
};

// ============================================================================
// Suggestions
// ============================================================================

pub use crate::widget::completer::{
    QueryTicket, StringListModel, SuggestionModel, SuggestionProvider, SuggestionResponse,
};

// ============================================================================
// Events, Focus and Validation
// ============================================================================

pub use crate::widget::events::{Key, KeyPressEvent, KeyboardModifiers};
pub use crate::widget::focus::{FocusManager, FocusRequest};
pub use crate::widget::validator::{OptionListValidator, PredicateValidator, Validator};

// ============================================================================
// Accessibility
// ============================================================================

pub use crate::widget::accessibility::{Accessible, AccessibleRole};
