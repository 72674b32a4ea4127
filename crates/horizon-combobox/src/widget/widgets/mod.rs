//! Widgets.
//!
//! - [`Combobox`]: the autocomplete field
//! - [`StatusBar`]: the live region that announces its status

pub mod combobox;
mod status_bar;

pub use combobox::{
    Combobox, ComboboxConfig, ComboboxOption, ComboboxSettings, ComboboxStatus, ComboboxView,
    CommitOutcome, ListState, NavigationOutcome,
};
pub use status_bar::{STATUS_PREFIX, StatusBar};
