//! Core systems for Horizon Combobox.
//!
//! This crate provides the plumbing the combobox widget is built on:
//!
//! - **Signal/Slot System**: Type-safe notifications from the widget to its host
//! - **Property System**: Values that report whether a write changed them
//! - **Logging**: `tracing` targets, span names and convenience macros
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_combobox_core::Signal;
//!
//! let selected = Signal::<String>::new();
//! let conn_id = selected.connect(|value| {
//!     println!("Picked from the list: {}", value);
//! });
//!
//! selected.emit("Victoria".to_string());
//! selected.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use horizon_combobox_core::Property;
//!
//! let status = Property::new(String::from("empty"));
//! assert!(status.set("typing...".to_string()));
//! assert!(!status.set("typing...".to_string()));
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use logging::PerfSpan;
pub use property::{Property, ReadOnlyProperty};
pub use signal::{ConnectionGuard, ConnectionId, Signal};

static_assertions::assert_impl_all!(Signal<String>: Send, Sync);
static_assertions::assert_impl_all!(Property<String>: Send, Sync);
