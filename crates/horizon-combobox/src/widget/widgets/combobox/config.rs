//! Combobox configuration.
//!
//! [`ComboboxConfig`] is fixed for the lifetime of an engine. The subset
//! that can live in a settings file is [`ComboboxSettings`], which loads
//! from TOML:
//!
//! ```
//! use horizon_combobox::widget::widgets::ComboboxSettings;
//!
//! let settings = ComboboxSettings::from_toml_str(r#"
//!     max_displayed = 5
//!     placeholder = "Start typing a city"
//! "#).unwrap();
//!
//! let config = settings.into_config();
//! assert_eq!(config.max_displayed(), 5);
//! assert_eq!(config.min_chars(), 2);
//! ```

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::widget::validator::Validator;

/// Default number of options rendered at once.
pub const DEFAULT_MAX_DISPLAYED: usize = 10;

/// Default minimum text length before suggestions are offered.
pub const DEFAULT_MIN_CHARS: usize = 2;

/// Configuration of a combobox engine.
#[derive(Clone)]
pub struct ComboboxConfig {
    max_displayed: usize,
    min_chars: usize,
    validator: Option<Arc<dyn Validator>>,
    placeholder: Option<String>,
    helper_text: Option<String>,
}

impl ComboboxConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self {
            max_displayed: DEFAULT_MAX_DISPLAYED,
            min_chars: DEFAULT_MIN_CHARS,
            validator: None,
            placeholder: None,
            helper_text: None,
        }
    }

    /// Set how many options are rendered at once.
    ///
    /// Truncation never changes the match count reported in the status.
    pub fn with_max_displayed(mut self, max_displayed: usize) -> Self {
        self.max_displayed = max_displayed;
        self
    }

    /// Set the minimum text length before suggestions are offered.
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    /// Set the validator that decides the `valid` visual flag.
    pub fn with_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Set the input placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the helper text shown under the label.
    pub fn with_helper_text(mut self, helper_text: impl Into<String>) -> Self {
        self.helper_text = Some(helper_text.into());
        self
    }

    /// Maximum number of options rendered at once.
    #[inline]
    pub fn max_displayed(&self) -> usize {
        self.max_displayed
    }

    /// Minimum text length before suggestions are offered.
    #[inline]
    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    /// The validator, if any.
    pub fn validator(&self) -> Option<&dyn Validator> {
        self.validator.as_deref()
    }

    /// The placeholder, if any.
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// The helper text, if any.
    pub fn helper_text(&self) -> Option<&str> {
        self.helper_text.as_deref()
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_displayed == 0 {
            return Err(Error::invalid_config("max_displayed", "must be at least 1"));
        }
        Ok(())
    }
}

impl Default for ComboboxConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ComboboxConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboboxConfig")
            .field("max_displayed", &self.max_displayed)
            .field("min_chars", &self.min_chars)
            .field("has_validator", &self.validator.is_some())
            .field("placeholder", &self.placeholder)
            .field("helper_text", &self.helper_text)
            .finish()
    }
}

/// The serializable part of [`ComboboxConfig`].
///
/// Missing keys take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComboboxSettings {
    /// Maximum number of options rendered at once.
    pub max_displayed: usize,
    /// Minimum text length before suggestions are offered.
    pub min_chars: usize,
    /// Input placeholder.
    pub placeholder: Option<String>,
    /// Helper text shown under the label.
    pub helper_text: Option<String>,
}

impl Default for ComboboxSettings {
    fn default() -> Self {
        Self {
            max_displayed: DEFAULT_MAX_DISPLAYED,
            min_chars: DEFAULT_MIN_CHARS,
            placeholder: None,
            helper_text: None,
        }
    }
}

impl ComboboxSettings {
    /// Parse settings from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content)?;
        Ok(settings)
    }

    /// Convert into a full configuration.
    pub fn into_config(self) -> ComboboxConfig {
        let mut config = ComboboxConfig::new()
            .with_max_displayed(self.max_displayed)
            .with_min_chars(self.min_chars);
        config.placeholder = self.placeholder;
        config.helper_text = self.helper_text;
        config
    }
}

impl From<ComboboxSettings> for ComboboxConfig {
    fn from(settings: ComboboxSettings) -> Self {
        settings.into_config()
    }
}
