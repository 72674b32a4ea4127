//! Widget system for Horizon Combobox.
//!
//! The combobox is split into small collaborators:
//!
//! - [`events`]: key events delivered by the host
//! - [`focus`]: focus requests the host executes
//! - [`validator`]: validity checks behind the `valid` styling flag
//! - [`completer`]: suggestion models, the provider and query tickets
//! - [`accessibility`]: ARIA attributes and AccessKit nodes
//! - [`widgets`]: the [`Combobox`] engine and the [`StatusBar`]
//!
//! The engine never renders and never touches platform handles. The host
//! forwards events in, renders the [`ComboboxView`] out, and executes any
//! [`FocusRequest`] it emits.

pub mod accessibility;
pub mod completer;
pub mod events;
pub mod focus;
pub mod validator;
pub mod widgets;

pub use accessibility::{Accessible, AccessibleRole, ElementIds};
pub use completer::{
    CaseSensitivity, MatchMode, QueryTicket, StringListModel, SuggestionModel, SuggestionProvider,
    SuggestionResponse,
};
pub use events::{Key, KeyPressEvent, KeyboardModifiers};
pub use focus::{FocusManager, FocusRequest};
pub use validator::{OptionListValidator, PredicateValidator, ValidationState, Validator};
pub use widgets::{Combobox, ComboboxView, StatusBar};
