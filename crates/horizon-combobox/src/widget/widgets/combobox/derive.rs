//! Pure derivations over the combobox inputs.
//!
//! Nothing here holds state. The engine calls these after every event with
//! the latest snapshot, so a derived value can never lag behind the text or
//! options it was computed from.

use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

use super::config::ComboboxConfig;
use super::option::ComboboxOption;

/// Length of `text` in user-perceived characters.
pub fn text_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Check whether any option's value equals `text`, ignoring case.
pub fn has_exact_match(text: &str, options: &[ComboboxOption]) -> bool {
    let needle = text.to_lowercase();
    options.iter().any(|option| option.value.to_lowercase() == needle)
}

/// The first `max_displayed` options.
pub fn displayed_options(options: &[ComboboxOption], max_displayed: usize) -> &[ComboboxOption] {
    &options[..options.len().min(max_displayed)]
}

/// Everything the derivations read, captured at one instant.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// Current field text.
    pub text: &'a str,
    /// Full option set from the latest accepted response.
    pub options: &'a [ComboboxOption],
    /// Suggestions are loading.
    pub loading: bool,
    /// The field is disabled.
    pub disabled: bool,
    /// Upstream error, if any.
    pub error_text: Option<&'a str>,
    /// A suggestion query for the current text has been answered.
    pub query_issued: bool,
}

/// Decide whether the suggestion list is shown.
///
/// Every condition must hold; any failing one forces the list closed.
pub fn compute_visibility(snapshot: &Snapshot<'_>, config: &ComboboxConfig) -> bool {
    text_len(snapshot.text) >= config.min_chars()
        && !snapshot.options.is_empty()
        && !has_exact_match(snapshot.text, snapshot.options)
        && !snapshot.loading
        && !snapshot.disabled
        && snapshot.error_text.is_none()
}

/// Live-region status.
///
/// The [`Display`](fmt::Display) output is the exact announced string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboboxStatus {
    /// The field is empty.
    Empty,
    /// Suggestions are loading.
    Loading,
    /// The provider reported an error.
    Error,
    /// The text equals an option.
    Valid,
    /// A query was answered with nothing.
    NoResults,
    /// No query has been answered for this text yet.
    Typing,
    /// Suggestions are available.
    Suggestions {
        /// The field text.
        text: String,
        /// Total number of matches.
        total: usize,
        /// Number of matches rendered.
        shown: usize,
    },
}

impl fmt::Display for ComboboxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComboboxStatus::Empty => f.write_str("empty"),
            ComboboxStatus::Loading => f.write_str("loading..."),
            ComboboxStatus::Error => f.write_str("error loading options"),
            ComboboxStatus::Valid => f.write_str("valid"),
            ComboboxStatus::NoResults => f.write_str("no results"),
            ComboboxStatus::Typing => f.write_str("typing..."),
            ComboboxStatus::Suggestions { text, total, shown } if shown < total => {
                write!(f, "{text} (showing {shown} of {total} suggestions)")
            }
            ComboboxStatus::Suggestions { text, total: 1, .. } => {
                write!(f, "{text} (1 suggestion)")
            }
            ComboboxStatus::Suggestions { text, total, .. } => {
                write!(f, "{text} ({total} suggestions)")
            }
        }
    }
}

/// Derive the live-region status. The first matching rule wins.
///
/// Only the empty string is `Empty`; whitespace is text like any other, so
/// the status never disagrees with [`compute_visibility`].
pub fn derive_status(snapshot: &Snapshot<'_>, max_displayed: usize) -> ComboboxStatus {
    if snapshot.text.is_empty() {
        ComboboxStatus::Empty
    } else if snapshot.loading {
        ComboboxStatus::Loading
    } else if snapshot.error_text.is_some() {
        ComboboxStatus::Error
    } else if has_exact_match(snapshot.text, snapshot.options) {
        ComboboxStatus::Valid
    } else if snapshot.options.is_empty() {
        if snapshot.query_issued {
            ComboboxStatus::NoResults
        } else {
            ComboboxStatus::Typing
        }
    } else {
        let total = snapshot.options.len();
        ComboboxStatus::Suggestions {
            text: snapshot.text.to_string(),
            total,
            shown: total.min(max_displayed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(values: &[&str]) -> Vec<ComboboxOption> {
        values.iter().map(|v| ComboboxOption::from(*v)).collect()
    }

    fn snapshot<'a>(text: &'a str, options: &'a [ComboboxOption]) -> Snapshot<'a> {
        Snapshot {
            text,
            options,
            loading: false,
            disabled: false,
            error_text: None,
            query_issued: true,
        }
    }

    #[test]
    fn test_text_len_counts_graphemes() {
        assert_eq!(text_len(""), 0);
        assert_eq!(text_len("ve"), 2);
        assert_eq!(text_len("é"), 1);
        assert_eq!(text_len("e\u{301}"), 1);
    }

    #[test]
    fn test_exact_match_ignores_case() {
        let opts = options(&["Vancouver", "Victoria"]);
        assert!(has_exact_match("victoria", &opts));
        assert!(has_exact_match("VANCOUVER", &opts));
        assert!(!has_exact_match("vic", &opts));
        assert!(!has_exact_match("", &opts));
    }

    #[test]
    fn test_displayed_options_truncates() {
        let opts = options(&["a", "b", "c"]);
        assert_eq!(displayed_options(&opts, 2).len(), 2);
        assert_eq!(displayed_options(&opts, 10).len(), 3);
    }

    #[test]
    fn test_visibility_requires_every_condition() {
        let config = ComboboxConfig::default();
        let opts = options(&["Vancouver", "Victoria", "Vernon"]);

        assert!(compute_visibility(&snapshot("ve", &opts), &config));
        assert!(!compute_visibility(&snapshot("v", &opts), &config));
        assert!(!compute_visibility(&snapshot("ve", &[]), &config));
        assert!(!compute_visibility(&snapshot("vernon", &opts), &config));

        let mut s = snapshot("ve", &opts);
        s.loading = true;
        assert!(!compute_visibility(&s, &config));

        let mut s = snapshot("ve", &opts);
        s.disabled = true;
        assert!(!compute_visibility(&s, &config));

        let mut s = snapshot("ve", &opts);
        s.error_text = Some("timeout");
        assert!(!compute_visibility(&s, &config));
    }

    #[test]
    fn test_visibility_with_zero_min_chars() {
        let config = ComboboxConfig::new().with_min_chars(0);
        let opts = options(&["Vancouver"]);
        assert!(compute_visibility(&snapshot("", &opts), &config));
    }

    #[test]
    fn test_status_precedence() {
        let opts = options(&["Vancouver", "Victoria", "Vernon"]);

        assert_eq!(derive_status(&snapshot("", &opts), 10), ComboboxStatus::Empty);

        let mut s = snapshot("ve", &opts);
        s.loading = true;
        s.error_text = Some("timeout");
        assert_eq!(derive_status(&s, 10), ComboboxStatus::Loading);

        s.loading = false;
        assert_eq!(derive_status(&s, 10), ComboboxStatus::Error);

        assert_eq!(derive_status(&snapshot("victoria", &opts), 10), ComboboxStatus::Valid);
    }

    #[test]
    fn test_whitespace_text_agrees_with_visibility() {
        let config = ComboboxConfig::default();
        let opts = options(&["St.  John"]);
        let s = snapshot("  ", &opts);

        assert!(compute_visibility(&s, &config));
        assert_ne!(derive_status(&s, 10), ComboboxStatus::Empty);
        assert_eq!(derive_status(&s, 10).to_string(), "   (1 suggestion)");
    }

    #[test]
    fn test_status_empty_results() {
        let mut s = snapshot("xy", &[]);
        assert_eq!(derive_status(&s, 10).to_string(), "no results");

        s.query_issued = false;
        assert_eq!(derive_status(&s, 10).to_string(), "typing...");
    }

    #[test]
    fn test_status_suggestion_counts() {
        let opts = options(&["Vancouver", "Victoria", "Vernon"]);
        assert_eq!(derive_status(&snapshot("ve", &opts), 10).to_string(), "ve (3 suggestions)");
        assert_eq!(
            derive_status(&snapshot("ve", &opts), 2).to_string(),
            "ve (showing 2 of 3 suggestions)"
        );

        let one = options(&["Victoria"]);
        assert_eq!(derive_status(&snapshot("vic", &one), 10).to_string(), "vic (1 suggestion)");
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(ComboboxStatus::Empty.to_string(), "empty");
        assert_eq!(ComboboxStatus::Loading.to_string(), "loading...");
        assert_eq!(ComboboxStatus::Error.to_string(), "error loading options");
        assert_eq!(ComboboxStatus::Valid.to_string(), "valid");
    }
}
