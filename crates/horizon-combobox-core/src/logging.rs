//! Logging facilities for Horizon Combobox.
//!
//! Horizon Combobox uses the `tracing` crate for instrumentation. To see
//! logs, install a tracing subscriber in the host application:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! tracing_subscriber::fmt()
//!     .with_env_filter(EnvFilter::new("horizon_combobox=debug"))
//!     .init();
//! ```
//!
//! Every subsystem logs under its own target (see [`targets`]) so a host can
//! turn on, say, navigation tracing without drowning in signal emissions.

/// Span names used throughout Horizon Combobox for tracing.
pub mod span_names {
    /// Keyboard event handling span.
    pub const KEY_PRESS: &str = "horizon_combobox::key_press";
    /// View-model derivation span.
    pub const VIEW: &str = "horizon_combobox::view";
    /// Signal emission span.
    pub const SIGNAL: &str = "horizon_combobox::signal";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_combobox_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_combobox_core::signal";
    /// Combobox engine target (text, options, commit).
    pub const ENGINE: &str = "horizon_combobox::engine";
    /// Keyboard navigation target.
    pub const NAVIGATION: &str = "horizon_combobox::navigation";
    /// Suggestion provider and query ticket target.
    pub const SUGGESTIONS: &str = "horizon_combobox::suggestions";
    /// Live-region status target.
    pub const STATUS: &str = "horizon_combobox::status";
    /// Accessibility tree export target.
    pub const ACCESSIBILITY: &str = "horizon_combobox::accessibility";
    /// Focus request execution target.
    pub const FOCUS: &str = "horizon_combobox::focus";
    /// Derivation timing target.
    pub const PERF: &str = "horizon_combobox::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used to time derivation passes.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::trace_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// Thin wrappers around the `tracing` macros with the core target.
#[macro_export]
macro_rules! combobox_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "horizon_combobox_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! combobox_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "horizon_combobox_core", $($arg)*)
    };
}
