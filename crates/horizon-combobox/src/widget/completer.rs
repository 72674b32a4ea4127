//! Suggestion sources for the combobox.
//!
//! The engine never looks anything up itself. A [`SuggestionModel`] turns a
//! query into a ranked list of strings, and a [`SuggestionProvider`] wraps a
//! model with minimum-length gating and packages the answer as a
//! [`SuggestionResponse`] the engine can consume.
//!
//! Responses may arrive out of order when the host resolves them
//! asynchronously. Every text change in the engine issues a [`QueryTicket`];
//! handing the ticket back together with the response lets the engine drop
//! answers to superseded queries.
//!
//! # Example
//!
//! ```
//! use horizon_combobox::widget::completer::{StringListModel, SuggestionProvider};
//!
//! let model = StringListModel::from(vec!["Vancouver", "Victoria", "Vernon", "Toronto"]);
//! let provider = SuggestionProvider::new(Box::new(model));
//!
//! let response = provider.query("ve");
//! assert_eq!(response.options.len(), 2);
//! assert!(provider.query("v").options.is_empty());
//! ```

use std::fmt;

use horizon_combobox_core::logging::targets;

use super::widgets::combobox::ComboboxOption;

// ============================================================================
// Matching
// ============================================================================

/// Controls how matching handles letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    /// Case-sensitive matching (e.g., "Van" won't match "vancouver").
    CaseSensitive,
    /// Case-insensitive matching (e.g., "van" will match "Vancouver").
    #[default]
    CaseInsensitive,
}

/// Where in an item the query has to appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// The item starts with the query.
    StartsWith,
    /// The query appears anywhere in the item.
    #[default]
    Contains,
}

impl MatchMode {
    fn matches(self, item: &str, query: &str) -> bool {
        match self {
            MatchMode::StartsWith => item.starts_with(query),
            MatchMode::Contains => item.contains(query),
        }
    }
}

// ============================================================================
// Suggestion Model Trait
// ============================================================================

/// Trait for providing suggestions.
///
/// Implement this trait to plug a custom data source into a
/// [`SuggestionProvider`]. The model filters and ranks; the provider decides
/// when it is worth asking.
pub trait SuggestionModel: Send + Sync {
    /// Get suggestions matching `query`, ordered by relevance.
    fn completions(&self, query: &str, case_sensitivity: CaseSensitivity) -> Vec<String>;

    /// Get the total number of items in the model (before filtering).
    ///
    /// Returns `None` if the count is unknown or expensive to compute.
    fn count(&self) -> Option<usize> {
        None
    }
}

// ============================================================================
// String List Model
// ============================================================================

/// A suggestion model backed by a static list of strings.
///
/// Matches by substring by default and returns at most [`limit`] results in
/// list order.
///
/// [`limit`]: StringListModel::limit
#[derive(Debug, Clone)]
pub struct StringListModel {
    items: Vec<String>,
    match_mode: MatchMode,
    limit: usize,
}

impl StringListModel {
    /// Default maximum number of results per query.
    pub const DEFAULT_LIMIT: usize = 20;

    /// Create a new string list model with the given items.
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            match_mode: MatchMode::default(),
            limit: Self::DEFAULT_LIMIT,
        }
    }

    /// Create an empty string list model.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Set the match mode using builder pattern.
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Set the result limit using builder pattern.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Get the result limit.
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl SuggestionModel for StringListModel {
    fn completions(&self, query: &str, case_sensitivity: CaseSensitivity) -> Vec<String> {
        let mode = self.match_mode;
        match case_sensitivity {
            CaseSensitivity::CaseSensitive => self
                .items
                .iter()
                .filter(|item| mode.matches(item, query))
                .take(self.limit)
                .cloned()
                .collect(),
            CaseSensitivity::CaseInsensitive => {
                let query_lower = query.to_lowercase();
                self.items
                    .iter()
                    .filter(|item| mode.matches(&item.to_lowercase(), &query_lower))
                    .take(self.limit)
                    .cloned()
                    .collect()
            }
        }
    }

    fn count(&self) -> Option<usize> {
        Some(self.items.len())
    }
}

impl Default for StringListModel {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<String>> for StringListModel {
    fn from(items: Vec<String>) -> Self {
        Self::new(items)
    }
}

impl From<Vec<&str>> for StringListModel {
    fn from(items: Vec<&str>) -> Self {
        Self::new(items.into_iter().map(String::from).collect())
    }
}

// ============================================================================
// Query Tickets and Responses
// ============================================================================

/// Identifies the query a suggestion response answers.
///
/// Issued by the engine on every text change. Only the most recently
/// issued ticket is current.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryTicket {
    /// Monotonic generation number.
    pub generation: u64,
    /// The field text the query was issued for.
    pub text: String,
}

/// The `(options, loading, error)` triple a provider hands to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionResponse {
    /// Candidate options, ranked.
    pub options: Vec<ComboboxOption>,
    /// Whether the provider is still working on this query.
    pub loading: bool,
    /// Upstream failure, if any.
    pub error: Option<String>,
}

impl SuggestionResponse {
    /// A completed response with the given options.
    pub fn ready(options: Vec<ComboboxOption>) -> Self {
        Self {
            options,
            loading: false,
            error: None,
        }
    }

    /// A completed response built from plain values.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::ready(
            values
                .into_iter()
                .map(|v| ComboboxOption::from_value(v.into()))
                .collect(),
        )
    }

    /// A response signalling that results are on the way.
    pub fn loading() -> Self {
        Self {
            options: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// A response signalling that the lookup failed.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            options: Vec::new(),
            loading: false,
            error: Some(error.into()),
        }
    }

    /// Check whether this response carries an error.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

// ============================================================================
// Suggestion Provider
// ============================================================================

/// Answers queries from a [`SuggestionModel`].
///
/// Queries shorter than [`min_query_len`](Self::min_query_len) characters
/// are answered with no options without touching the model.
pub struct SuggestionProvider {
    model: Box<dyn SuggestionModel>,
    case_sensitivity: CaseSensitivity,
    min_query_len: usize,
}

impl SuggestionProvider {
    /// Default minimum query length.
    pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

    /// Create a provider over the given model.
    pub fn new(model: Box<dyn SuggestionModel>) -> Self {
        Self {
            model,
            case_sensitivity: CaseSensitivity::default(),
            min_query_len: Self::DEFAULT_MIN_QUERY_LEN,
        }
    }

    /// Create a provider over a list of strings.
    pub fn with_strings(items: Vec<String>) -> Self {
        Self::new(Box::new(StringListModel::new(items)))
    }

    /// Set case sensitivity using builder pattern.
    pub fn with_case_sensitivity(mut self, sensitivity: CaseSensitivity) -> Self {
        self.case_sensitivity = sensitivity;
        self
    }

    /// Set the minimum query length using builder pattern.
    pub fn with_min_query_len(mut self, len: usize) -> Self {
        self.min_query_len = len;
        self
    }

    /// Get the minimum query length.
    pub fn min_query_len(&self) -> usize {
        self.min_query_len
    }

    /// Check whether `query` is long enough to be looked up.
    pub fn accepts(&self, query: &str) -> bool {
        super::widgets::combobox::text_len(query) >= self.min_query_len
    }

    /// Look up suggestions for `query`.
    pub fn query(&self, query: &str) -> SuggestionResponse {
        if !self.accepts(query) {
            tracing::trace!(
                target: targets::SUGGESTIONS,
                query,
                min = self.min_query_len,
                "query below minimum length"
            );
            return SuggestionResponse::default();
        }

        let values = self.model.completions(query, self.case_sensitivity);
        tracing::trace!(
            target: targets::SUGGESTIONS,
            query,
            results = values.len(),
            "query answered"
        );
        SuggestionResponse::from_values(values)
    }
}

impl fmt::Debug for SuggestionProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionProvider")
            .field("case_sensitivity", &self.case_sensitivity)
            .field("min_query_len", &self.min_query_len)
            .field("model_count", &self.model.count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities() -> StringListModel {
        StringListModel::from(vec!["Vancouver", "Victoria", "Vernon", "Toronto", "Montréal"])
    }

    #[test]
    fn test_string_list_model_contains() {
        let model = cities();
        let completions = model.completions("ver", CaseSensitivity::CaseInsensitive);
        assert_eq!(completions, vec!["Vancouver".to_string(), "Vernon".to_string()]);

        let completions = model.completions("on", CaseSensitivity::CaseInsensitive);
        assert_eq!(
            completions,
            vec!["Vernon".to_string(), "Toronto".to_string(), "Montréal".to_string()]
        );
        assert_eq!(model.count(), Some(5));
    }

    #[test]
    fn test_string_list_model_starts_with() {
        let model = cities().with_match_mode(MatchMode::StartsWith);
        let completions = model.completions("v", CaseSensitivity::CaseInsensitive);
        assert_eq!(completions.len(), 3);

        let completions = model.completions("V", CaseSensitivity::CaseSensitive);
        assert_eq!(completions.len(), 3);

        let completions = model.completions("v", CaseSensitivity::CaseSensitive);
        assert!(completions.is_empty());
    }

    #[test]
    fn test_string_list_model_limit() {
        let items: Vec<String> = (0..30).map(|i| format!("city {i}")).collect();
        let model = StringListModel::new(items);
        assert_eq!(model.limit(), StringListModel::DEFAULT_LIMIT);
        assert_eq!(model.completions("city", CaseSensitivity::CaseInsensitive).len(), 20);

        let model = model.with_limit(5);
        assert_eq!(model.completions("city", CaseSensitivity::CaseInsensitive).len(), 5);
    }

    #[test]
    fn test_provider_gates_short_queries() {
        let provider = SuggestionProvider::new(Box::new(cities()));
        assert_eq!(provider.min_query_len(), 2);

        let response = provider.query("v");
        assert!(response.options.is_empty());
        assert!(!response.loading);
        assert!(!response.is_error());

        let response = provider.query("vi");
        assert_eq!(response.options, vec![ComboboxOption::from_value("Victoria")]);
    }

    #[test]
    fn test_provider_counts_graphemes() {
        let provider = SuggestionProvider::with_strings(vec!["Montréal".to_string()]);
        assert!(!provider.accepts("é"));
        assert!(provider.accepts("ré"));
        assert_eq!(provider.query("ré").options.len(), 1);
    }

    #[test]
    fn test_response_constructors() {
        let loading = SuggestionResponse::loading();
        assert!(loading.loading);
        assert!(loading.options.is_empty());

        let failed = SuggestionResponse::failed("timeout");
        assert!(failed.is_error());
        assert_eq!(failed.error.as_deref(), Some("timeout"));

        let ready = SuggestionResponse::from_values(["a", "b"]);
        assert_eq!(ready.options.len(), 2);
        assert!(!ready.loading);
    }
}
