//! Combobox engine.
//!
//! [`Combobox`] owns the field text, the latest suggestion response and the
//! list state. Everything else (visibility, status, ARIA attributes, the
//! render view) is derived on demand from those.
//!
//! # Example
//!
//! ```
//! use horizon_combobox::widget::completer::SuggestionResponse;
//! use horizon_combobox::widget::events::{Key, KeyPressEvent};
//! use horizon_combobox::widget::widgets::{Combobox, ComboboxConfig};
//!
//! let mut combobox = Combobox::new("city", "City", ComboboxConfig::default()).unwrap();
//! combobox.selected.connect(|value| println!("picked {value}"));
//!
//! let ticket = combobox.input_text("ve");
//! combobox.apply_suggestions(
//!     &ticket,
//!     SuggestionResponse::from_values(["Vancouver", "Victoria", "Vernon"]),
//! );
//! assert_eq!(combobox.status(), "ve (3 suggestions)");
//!
//! combobox.handle_key_press(&mut KeyPressEvent::new(Key::ArrowDown));
//! combobox.handle_key_press(&mut KeyPressEvent::new(Key::Enter));
//! assert_eq!(combobox.text(), "Vancouver");
//! assert_eq!(combobox.status(), "valid");
//! ```

mod config;
mod derive;
mod navigation;
mod option;
mod view;

pub use config::{ComboboxConfig, ComboboxSettings, DEFAULT_MAX_DISPLAYED, DEFAULT_MIN_CHARS};
pub use derive::{
    ComboboxStatus, Snapshot, compute_visibility, derive_status, displayed_options,
    has_exact_match, text_len,
};
pub use navigation::{ListState, NavigationOutcome};
pub use option::ComboboxOption;
pub use view::{
    ComboboxView, ErrorView, HelperView, InputView, LOADING_INDICATOR, LabelView, ListboxView,
    OptionView, VisualFlags,
};

use horizon_combobox_core::logging::{span_names, targets};
use horizon_combobox_core::{PerfSpan, Property, Signal};

use crate::error::Result;
use crate::widget::accessibility::{
    Accessible, AccessibleRole, ComboboxAria, ElementIds, ListboxAria, LivePoliteness, OptionAria,
};
use crate::widget::completer::{QueryTicket, SuggestionResponse};
use crate::widget::events::KeyPressEvent;
use crate::widget::focus::FocusRequest;

/// Result of committing an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutcome {
    /// The field text after the commit.
    pub new_text: String,
    /// Focus was requested back on the field.
    pub focus_returns_to_field: bool,
}

/// An accessible autocomplete text field.
///
/// Drive it with [`input_text`](Self::input_text) and
/// [`handle_key_press`](Self::handle_key_press) from the host's event loop,
/// feed it suggestions with [`apply_suggestions`](Self::apply_suggestions),
/// and render [`view`](Self::view).
pub struct Combobox {
    ids: ElementIds,
    label: String,
    config: ComboboxConfig,

    text: String,
    options: Vec<ComboboxOption>,
    loading: bool,
    disabled: bool,
    error_text: Option<String>,

    list: ListState,
    generation: u64,
    query_issued: bool,
    status: Property<String>,

    // Signals

    /// Emitted with the new text whenever the user or a commit changes it.
    pub value_changed: Signal<String>,

    /// Emitted with the option value when an option is explicitly picked.
    pub selected: Signal<String>,

    /// Emitted with the option value when keyboard navigation moves the highlight.
    pub highlighted: Signal<String>,

    /// Emitted when the live-region status text changes.
    pub status_changed: Signal<String>,

    /// Emitted when focus must return to the field.
    pub focus_requested: Signal<FocusRequest>,
}

impl Combobox {
    /// Create a combobox for the input element `field_id`.
    ///
    /// Fails if the configuration is invalid or the field id cannot be used
    /// to derive element ids.
    pub fn new(
        field_id: impl Into<String>,
        label: impl Into<String>,
        config: ComboboxConfig,
    ) -> Result<Self> {
        let field_id = field_id.into();
        config.validate()?;
        let ids = ElementIds::new(&field_id)?;

        horizon_combobox_core::combobox_debug!(field_id = %field_id, ?config, "combobox created");

        let combobox = Self {
            ids,
            label: label.into(),
            config,
            text: String::new(),
            options: Vec::new(),
            loading: false,
            disabled: false,
            error_text: None,
            list: ListState::Closed,
            generation: 0,
            query_issued: false,
            status: Property::default(),
            value_changed: Signal::new(),
            selected: Signal::new(),
            highlighted: Signal::new(),
            status_changed: Signal::new(),
            focus_requested: Signal::new(),
        };
        let status = derive_status(&combobox.snapshot(), combobox.config.max_displayed());
        combobox.status.set_silent(status.to_string());
        Ok(combobox)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The input element id.
    #[inline]
    pub fn field_id(&self) -> &str {
        &self.ids.field
    }

    /// All derived element ids.
    #[inline]
    pub fn element_ids(&self) -> &ElementIds {
        &self.ids
    }

    /// The label text.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The configuration.
    #[inline]
    pub fn config(&self) -> &ComboboxConfig {
        &self.config
    }

    /// The current field text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The full option set from the latest accepted response.
    #[inline]
    pub fn options(&self) -> &[ComboboxOption] {
        &self.options
    }

    /// The options that are rendered: the first `max_displayed`.
    pub fn displayed_options(&self) -> &[ComboboxOption] {
        displayed_options(&self.options, self.config.max_displayed())
    }

    /// The list state.
    #[inline]
    pub fn list_state(&self) -> ListState {
        self.list
    }

    /// Whether the suggestion list is shown.
    #[inline]
    pub fn is_list_open(&self) -> bool {
        self.list.is_open()
    }

    /// The highlighted option index, if any.
    #[inline]
    pub fn highlighted_index(&self) -> Option<usize> {
        self.list.highlighted()
    }

    /// The current live-region status text.
    pub fn status(&self) -> String {
        self.status.get()
    }

    /// Whether suggestions are loading.
    #[inline]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the field is disabled.
    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The upstream error, if any.
    pub fn error_text(&self) -> Option<&str> {
        self.error_text.as_deref()
    }

    /// Whether any option's value equals the text, ignoring case.
    pub fn has_exact_match(&self) -> bool {
        has_exact_match(&self.text, &self.options)
    }

    /// Whether the inputs allow the suggestion list to be shown.
    pub fn is_suggestion_visible(&self) -> bool {
        compute_visibility(&self.snapshot(), &self.config)
    }

    /// Whether the configured validator accepts the current text.
    ///
    /// `false` when no validator is configured.
    pub fn is_valid(&self) -> bool {
        self.config
            .validator()
            .is_some_and(|validator| validator.is_acceptable(&self.text))
    }

    /// The ticket for the current text.
    pub fn current_query(&self) -> QueryTicket {
        QueryTicket {
            generation: self.generation,
            text: self.text.clone(),
        }
    }

    fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            text: &self.text,
            options: &self.options,
            loading: self.loading,
            disabled: self.disabled,
            error_text: self.error_text.as_deref(),
            query_issued: self.query_issued,
        }
    }

    // =========================================================================
    // Inputs
    // =========================================================================

    /// The user edited the text.
    ///
    /// Emits `value_changed` and returns the ticket the host must hand back
    /// with the suggestions for this text. Unchanged text keeps the current
    /// ticket.
    pub fn input_text(&mut self, text: impl Into<String>) -> QueryTicket {
        let text = text.into();
        if text == self.text {
            return self.current_query();
        }
        let ticket = self.replace_text(text);
        self.value_changed.emit(ticket.text.clone());
        self.refresh();
        ticket
    }

    /// Set the text programmatically, without emitting `value_changed`.
    pub fn set_text(&mut self, text: impl Into<String>) -> QueryTicket {
        let text = text.into();
        if text == self.text {
            return self.current_query();
        }
        let ticket = self.replace_text(text);
        self.refresh();
        ticket
    }

    fn replace_text(&mut self, text: String) -> QueryTicket {
        self.text = text;
        self.generation += 1;
        self.query_issued = false;
        tracing::trace!(
            target: targets::SUGGESTIONS,
            generation = self.generation,
            text = %self.text,
            "query ticket issued"
        );
        self.current_query()
    }

    /// Apply a provider response for `ticket`.
    ///
    /// Responses for superseded tickets are discarded. Returns whether the
    /// response was applied.
    pub fn apply_suggestions(&mut self, ticket: &QueryTicket, response: SuggestionResponse) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                target: targets::SUGGESTIONS,
                stale = ticket.generation,
                current = self.generation,
                query = %ticket.text,
                "discarding stale suggestions"
            );
            return false;
        }
        self.set_suggestions(response);
        true
    }

    /// Apply a provider response for the current text without a ticket check.
    ///
    /// For hosts whose provider already drops superseded responses.
    pub fn set_suggestions(&mut self, response: SuggestionResponse) {
        let SuggestionResponse {
            options,
            loading,
            error,
        } = response;
        self.loading = loading;
        self.error_text = error;
        self.query_issued = !loading && text_len(&self.text) >= self.config.min_chars();
        self.replace_options(options);
        self.refresh();
    }

    /// Replace the option list.
    ///
    /// The highlight is always dropped, even if the new list is identical.
    pub fn set_options(&mut self, options: Vec<ComboboxOption>) {
        self.query_issued = text_len(&self.text) >= self.config.min_chars();
        self.replace_options(options);
        self.refresh();
    }

    fn replace_options(&mut self, options: Vec<ComboboxOption>) {
        tracing::trace!(
            target: targets::SUGGESTIONS,
            count = options.len(),
            "options replaced"
        );
        self.options = options;
        self.list.clear_highlight();
    }

    /// Set the loading flag.
    pub fn set_loading(&mut self, loading: bool) {
        if self.loading != loading {
            self.loading = loading;
            self.refresh();
        }
    }

    /// Set or clear the upstream error.
    pub fn set_error_text(&mut self, error_text: Option<String>) {
        if self.error_text != error_text {
            self.error_text = error_text;
            self.refresh();
        }
    }

    /// Enable or disable the field.
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.disabled != disabled {
            self.disabled = disabled;
            self.refresh();
        }
    }

    /// Recompute visibility and status after an input change.
    fn refresh(&mut self) {
        let visible = self.is_suggestion_visible();
        let was_open = self.list.is_open();
        if visible {
            self.list.open();
        } else {
            self.list.close();
        }
        if was_open != visible {
            tracing::trace!(
                target: targets::ENGINE,
                visible,
                text = %self.text,
                options = self.options.len(),
                "list visibility changed"
            );
        }
        self.refresh_status();
    }

    fn refresh_status(&self) {
        let status = derive_status(&self.snapshot(), self.config.max_displayed()).to_string();
        if self.status.set(status.clone()) {
            tracing::debug!(target: targets::STATUS, status = %status, "status changed");
            self.status_changed.emit(status);
        }
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    /// Handle a key press while the field has focus.
    ///
    /// Returns `true` and accepts the event if the list acted on the key;
    /// the host must then suppress the key's default action. Other keys are
    /// left for normal text editing.
    pub fn handle_key_press(&mut self, event: &mut KeyPressEvent) -> bool {
        let _span = tracing::trace_span!(span_names::KEY_PRESS, key = ?event.key).entered();

        let displayed_len = self.displayed_options().len();
        let outcome = self.list.handle_key(event.key, displayed_len);
        tracing::trace!(target: targets::NAVIGATION, ?outcome, "key handled");

        match outcome {
            NavigationOutcome::Ignored => {
                event.ignore();
                return false;
            }
            NavigationOutcome::Moved { to, .. } => {
                if let Some(option) = self.displayed_options().get(to) {
                    self.highlighted.emit(option.value.clone());
                }
            }
            NavigationOutcome::Commit(index) => {
                if let Some(option) = self.displayed_options().get(index).cloned() {
                    self.commit(&option);
                }
            }
            NavigationOutcome::Noop | NavigationOutcome::Dismissed => {}
        }
        event.accept();
        true
    }

    /// Pointer or touch activation of the rendered option at `index`.
    ///
    /// Ignored unless the list is open and `index` is displayed.
    pub fn activate_option(&mut self, index: usize) -> Option<CommitOutcome> {
        if !self.list.is_open() {
            return None;
        }
        let option = self.displayed_options().get(index).cloned()?;
        Some(self.commit(&option))
    }

    /// Commit `option` as the field value.
    ///
    /// Sets the text, closes the list, emits `value_changed`, then
    /// `selected`, then requests focus back on the field.
    pub fn commit(&mut self, option: &ComboboxOption) -> CommitOutcome {
        tracing::debug!(target: targets::ENGINE, value = %option.value, "option committed");

        self.replace_text(option.value.clone());
        self.list.close();
        self.value_changed.emit(self.text.clone());
        self.selected.emit(self.text.clone());
        self.focus_requested.emit(FocusRequest::field(self.ids.field.clone()));
        self.refresh_status();

        CommitOutcome {
            new_text: self.text.clone(),
            focus_returns_to_field: true,
        }
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Build the render view for the current state.
    pub fn view(&self) -> ComboboxView {
        let _perf = PerfSpan::new(span_names::VIEW);

        let open = self.list.is_open();
        let highlighted = self.list.highlighted();
        let has_error = self.error_text.is_some();
        let meets_min_chars = text_len(&self.text) >= self.config.min_chars();

        let listbox = open.then(|| {
            let displayed = self.displayed_options();
            ListboxView {
                aria: ListboxAria::derive(&self.ids),
                options: displayed
                    .iter()
                    .enumerate()
                    .map(|(index, option)| OptionView {
                        index,
                        set_size: displayed.len(),
                        value: option.value.clone(),
                        label: option.label.clone(),
                        aria: OptionAria::derive(&self.ids, index, highlighted),
                    })
                    .collect(),
                scroll_into_view: highlighted,
            }
        });

        ComboboxView {
            label: LabelView {
                id: self.ids.label.clone(),
                for_id: self.ids.field.clone(),
                text: self.label.clone(),
                loading_indicator: self.loading,
            },
            helper: self.config.helper_text().map(|text| HelperView {
                id: self.ids.helper.clone(),
                text: text.to_string(),
            }),
            input: InputView {
                id: self.ids.field.clone(),
                value: self.text.clone(),
                placeholder: self.config.placeholder().map(str::to_string),
                disabled: self.disabled,
                aria: self.aria(),
            },
            listbox,
            error: self.error_text.as_ref().map(|message| ErrorView {
                id: self.ids.error.clone(),
                message: message.clone(),
            }),
            status: self.status(),
            flags: VisualFlags {
                valid: self.is_valid(),
                error: has_error,
                disabled: self.disabled,
                loading: self.loading,
                show_loading_indicator: self.loading && meets_min_chars,
            },
        }
    }

    /// ARIA attributes of the input element.
    pub fn aria(&self) -> ComboboxAria {
        ComboboxAria::derive(
            &self.ids,
            self.list.is_open(),
            self.list.highlighted(),
            self.error_text.is_some(),
            self.loading,
            self.config.helper_text().is_some(),
        )
    }

    /// Build AccessKit nodes for the field, its label, list and live regions.
    ///
    /// The first node is the combobox itself.
    #[cfg(feature = "accessibility")]
    pub fn accessibility_nodes(&self) -> Vec<(accesskit::NodeId, accesskit::Node)> {
        use crate::widget::accessibility::node_id;

        let view = self.view();
        let mut nodes = vec![
            (node_id(&self.ids.field), self.build_accessible_node(&[])),
            (node_id(&view.label.id), view.label.build_accessible_node(&[])),
        ];

        if let Some(listbox) = &view.listbox {
            let children: Vec<String> = listbox.options.iter().map(|o| o.id().to_string()).collect();
            nodes.push((node_id(&listbox.aria.id), listbox.build_accessible_node(&children)));
            for option in &listbox.options {
                nodes.push((node_id(option.id()), option.build_accessible_node(&[])));
            }
        }

        if let Some(error) = &view.error {
            nodes.push((node_id(&error.id), error.build_accessible_node(&[])));
        }

        tracing::trace!(target: targets::ACCESSIBILITY, count = nodes.len(), "accessibility nodes built");
        nodes
    }
}

impl std::fmt::Debug for Combobox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Combobox")
            .field("field_id", &self.ids.field)
            .field("text", &self.text)
            .field("options", &self.options.len())
            .field("list", &self.list)
            .field("loading", &self.loading)
            .field("disabled", &self.disabled)
            .field("error_text", &self.error_text)
            .field("generation", &self.generation)
            .field("status", &self.status.get())
            .finish()
    }
}

// =========================================================================
// Accessibility
// =========================================================================

impl Accessible for Combobox {
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::ComboBox
    }

    fn accessible_name(&self) -> Option<String> {
        Some(self.label.clone())
    }

    fn accessible_description(&self) -> Option<String> {
        self.config.helper_text().map(str::to_string)
    }

    fn accessible_value(&self) -> Option<String> {
        Some(self.text.clone())
    }

    fn accessible_placeholder(&self) -> Option<String> {
        self.config.placeholder().map(str::to_string)
    }

    fn is_accessible_expanded(&self) -> Option<bool> {
        Some(self.list.is_open())
    }

    fn is_accessible_busy(&self) -> bool {
        self.loading
    }

    fn is_accessible_disabled(&self) -> bool {
        self.disabled
    }

    fn is_accessible_invalid(&self) -> bool {
        self.error_text.is_some()
    }

    fn has_accessible_autocomplete_list(&self) -> bool {
        true
    }

    fn accessible_labelled_by(&self) -> Vec<String> {
        vec![self.ids.label.clone()]
    }

    fn accessible_described_by(&self) -> Vec<String> {
        self.aria()
            .described_by
            .map(|ids| ids.split(' ').map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn accessible_controls(&self) -> Vec<String> {
        self.aria().controls.into_iter().collect()
    }

    fn accessible_active_descendant(&self) -> Option<String> {
        self.aria().active_descendant
    }
}

impl Accessible for LabelView {
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Label
    }

    fn accessible_name(&self) -> Option<String> {
        Some(self.text.clone())
    }
}

impl Accessible for ListboxView {
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::ListBox
    }

    fn accessible_labelled_by(&self) -> Vec<String> {
        vec![self.aria.labelled_by.clone()]
    }

    fn accessible_active_descendant(&self) -> Option<String> {
        self.scroll_into_view
            .and_then(|index| self.options.get(index))
            .map(|option| option.id().to_string())
    }
}

impl Accessible for OptionView {
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::ListBoxOption
    }

    fn accessible_name(&self) -> Option<String> {
        Some(self.label.clone())
    }

    fn accessible_value(&self) -> Option<String> {
        Some(self.value.clone())
    }

    fn is_accessible_selected(&self) -> Option<bool> {
        Some(self.selected())
    }

    fn accessible_position_in_set(&self) -> Option<usize> {
        Some(self.index + 1)
    }

    fn accessible_set_size(&self) -> Option<usize> {
        Some(self.set_size)
    }
}

impl Accessible for ErrorView {
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Alert
    }

    fn accessible_name(&self) -> Option<String> {
        Some(self.message.clone())
    }

    fn accessible_live(&self) -> Option<LivePoliteness> {
        Some(Self::LIVE)
    }
}
