//! Error types for the combobox.
//!
//! The engine itself never fails at runtime: upstream problems (a provider
//! that could not load options) travel as data and surface in the status
//! text. What *can* fail is building an engine from a bad configuration,
//! which is rejected up front.

/// Result type alias for combobox operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when configuring a combobox.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration value is out of range.
    #[error("Invalid configuration value for '{field}': {message}")]
    InvalidConfig {
        field: &'static str,
        message: String,
    },

    /// The field identifier cannot be used to derive element ids.
    #[error("Invalid field id '{id}': {reason}")]
    InvalidFieldId { id: String, reason: &'static str },

    /// Settings could not be parsed.
    #[error("Failed to parse combobox settings: {source}")]
    Settings {
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create a configuration error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Create a field id error.
    pub fn invalid_field_id(id: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidFieldId {
            id: id.into(),
            reason,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Self::Settings { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message() {
        let err = Error::invalid_config("max_displayed", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid configuration value for 'max_displayed': must be at least 1"
        );
    }

    #[test]
    fn test_invalid_field_id_message() {
        let err = Error::invalid_field_id("city input", "contains whitespace");
        assert!(err.to_string().contains("city input"));
        assert!(err.to_string().contains("contains whitespace"));
    }
}
