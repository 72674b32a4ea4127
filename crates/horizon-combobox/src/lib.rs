//! Horizon Combobox - an accessible autocomplete field following the
//! WAI-ARIA combobox pattern.
//!
//! This is the main crate; it re-exports the core plumbing from
//! `horizon-combobox-core`.
//!
//! # Example
//!
//! ```
//! use horizon_combobox::prelude::*;
//!
//! fn main() -> Result<(), horizon_combobox::Error> {
//!     let provider = SuggestionProvider::with_strings(vec![
//!         "Vancouver".to_string(),
//!         "Victoria".to_string(),
//!         "Vernon".to_string(),
//!     ]);
//!     let mut combobox = Combobox::new("city", "City", ComboboxConfig::default())?;
//!
//!     let ticket = combobox.input_text("ve");
//!     combobox.apply_suggestions(&ticket, provider.query(&ticket.text));
//!
//!     let view = combobox.view();
//!     assert!(view.list_visible());
//!     assert_eq!(view.status, "ve (2 suggestions)");
//!     Ok(())
//! }
//! ```

pub use horizon_combobox_core::*;

pub mod error;
pub mod prelude;
pub mod widget;

pub use error::{Error, Result};

static_assertions::assert_impl_all!(widget::Combobox: Send, Sync);
static_assertions::assert_impl_all!(widget::StatusBar: Send, Sync);
