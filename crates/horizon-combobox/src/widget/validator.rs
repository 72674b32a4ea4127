//! Validity checks for combobox text.
//!
//! A validator decides whether the field's text counts as a *valid* value
//! for styling purposes. This is independent of the exact-match rule that
//! drives the `"valid"` status: a host may accept values that are not among
//! the current suggestions, or reject ones that are.
//!
//! # Built-in Validators
//!
//! - [`PredicateValidator`]: wraps a `Fn(&str) -> bool`
//! - [`OptionListValidator`]: accepts any value from a fixed list, ignoring case

use std::fmt;
use std::sync::Arc;

/// The result of validating input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidationState {
    /// The input is not a valid value.
    Invalid,
    /// The input is incomplete but could become valid with more typing.
    #[default]
    Intermediate,
    /// The input is a valid value.
    Acceptable,
}

impl fmt::Display for ValidationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationState::Invalid => write!(f, "Invalid"),
            ValidationState::Intermediate => write!(f, "Intermediate"),
            ValidationState::Acceptable => write!(f, "Acceptable"),
        }
    }
}

/// Trait for input validators.
///
/// Validators must be `Send + Sync` so a configuration can be shared.
pub trait Validator: Send + Sync {
    /// Validate the input string.
    fn validate(&self, input: &str) -> ValidationState;

    /// Whether the input is acceptable as a final value.
    fn is_acceptable(&self, input: &str) -> bool {
        self.validate(input) == ValidationState::Acceptable
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    fn validate(&self, input: &str) -> ValidationState {
        (**self).validate(input)
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn validate(&self, input: &str) -> ValidationState {
        (**self).validate(input)
    }
}

/// A validator backed by a boolean predicate.
///
/// `true` maps to [`ValidationState::Acceptable`], `false` to
/// [`ValidationState::Invalid`].
///
/// ```
/// use horizon_combobox::widget::validator::{PredicateValidator, Validator};
///
/// let validator = PredicateValidator::new(|value: &str| value == "apple");
/// assert!(validator.is_acceptable("apple"));
/// assert!(!validator.is_acceptable("apricot"));
/// ```
pub struct PredicateValidator<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    predicate: F,
}

impl<F> PredicateValidator<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    /// Create a validator from a predicate.
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F> Validator for PredicateValidator<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn validate(&self, input: &str) -> ValidationState {
        if (self.predicate)(input) {
            ValidationState::Acceptable
        } else {
            ValidationState::Invalid
        }
    }
}

impl<F> fmt::Debug for PredicateValidator<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateValidator").finish_non_exhaustive()
    }
}

/// Accepts any value from a known list, compared case-insensitively.
///
/// Empty input is intermediate; anything else not in the list is invalid.
#[derive(Debug, Clone, Default)]
pub struct OptionListValidator {
    values: Vec<String>,
}

impl OptionListValidator {
    /// Create a validator accepting the given values.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            values: values
                .into_iter()
                .map(|v| v.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Number of accepted values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Validator for OptionListValidator {
    fn validate(&self, input: &str) -> ValidationState {
        if input.is_empty() {
            return ValidationState::Intermediate;
        }
        let needle = input.to_lowercase();
        if self.values.iter().any(|v| *v == needle) {
            ValidationState::Acceptable
        } else {
            ValidationState::Invalid
        }
    }
}
