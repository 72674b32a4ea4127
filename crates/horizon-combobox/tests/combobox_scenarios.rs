//! Integration tests for the combobox interaction model.

use std::sync::Arc;

use horizon_combobox::prelude::*;
use horizon_combobox::widget::accessibility::AriaAttributes;
use parking_lot::Mutex;

fn values(items: &[&str]) -> Vec<ComboboxOption> {
    items.iter().map(|v| ComboboxOption::from(*v)).collect()
}

fn combobox() -> Combobox {
    Combobox::new("city", "City", ComboboxConfig::default()).expect("valid config")
}

fn with_options(text: &str, options: Vec<ComboboxOption>) -> Combobox {
    let mut combobox = combobox();
    combobox.input_text(text);
    combobox.set_options(options);
    combobox
}

fn press(combobox: &mut Combobox, key: Key) -> bool {
    combobox.handle_key_press(&mut KeyPressEvent::new(key))
}

fn attr<'a>(attrs: &'a AriaAttributes, name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.as_str())
}

#[test]
fn test_short_text_never_shows_suggestions() {
    for text in ["", "v", "é"] {
        let combobox = with_options(text, values(&["Vancouver", "Victoria"]));
        assert!(!combobox.is_suggestion_visible(), "visible for {text:?}");
        assert!(!combobox.view().list_visible());
    }
}

#[test]
fn test_exact_match_hides_list_and_reports_valid() {
    for text in ["victoria", "VICTORIA", "Victoria"] {
        let combobox = with_options(text, values(&["Vancouver", "Victoria", "Vernon"]));
        assert!(!combobox.is_suggestion_visible());
        assert_eq!(combobox.status(), "valid");
    }
}

#[test]
fn test_arrow_keys_clamp_at_both_ends() {
    let mut combobox = with_options("ve", values(&["Vancouver", "Victoria", "Vernon"]));

    for _ in 0..5 {
        assert!(press(&mut combobox, Key::ArrowDown));
    }
    assert_eq!(combobox.highlighted_index(), Some(2));

    for _ in 0..5 {
        assert!(press(&mut combobox, Key::ArrowUp));
    }
    assert_eq!(combobox.highlighted_index(), Some(0));
}

#[test]
fn test_identical_options_still_reset_highlight() {
    let options = values(&["Vancouver", "Victoria", "Vernon"]);
    let mut combobox = with_options("ve", options.clone());
    press(&mut combobox, Key::ArrowDown);
    assert_eq!(combobox.highlighted_index(), Some(0));

    combobox.set_options(options);
    assert_eq!(combobox.highlighted_index(), None);
}

#[test]
fn test_commit_notifies_with_identical_values() {
    let mut combobox = with_options("ve", values(&["Vancouver", "Victoria", "Vernon"]));
    let changed = Arc::new(Mutex::new(Vec::new()));
    let selected = Arc::new(Mutex::new(Vec::new()));

    let sink = changed.clone();
    combobox.value_changed.connect(move |v| sink.lock().push(v.clone()));
    let sink = selected.clone();
    combobox.selected.connect(move |v| sink.lock().push(v.clone()));

    let option = ComboboxOption::new("Vernon", "Vernon, BC");
    let outcome = combobox.commit(&option);

    assert_eq!(outcome.new_text, "Vernon");
    assert!(!combobox.is_list_open());
    assert_eq!(combobox.text(), "Vernon");
    assert_eq!(*changed.lock(), vec!["Vernon".to_string()]);
    assert_eq!(*selected.lock(), *changed.lock());
}

#[test]
fn test_keyboard_and_pointer_commits_converge() {
    let options = values(&["Vancouver", "Victoria", "Vernon"]);

    let mut by_keyboard = with_options("ve", options.clone());
    press(&mut by_keyboard, Key::ArrowDown);
    press(&mut by_keyboard, Key::ArrowDown);
    press(&mut by_keyboard, Key::Enter);

    let mut by_pointer = with_options("ve", options);
    by_pointer.activate_option(1);

    assert_eq!(by_keyboard.text(), by_pointer.text());
    assert_eq!(by_keyboard.status(), by_pointer.status());
    assert_eq!(by_keyboard.view(), by_pointer.view());
}

#[test]
fn test_focus_request_after_selection_is_idempotent() {
    let mut combobox = with_options("ve", values(&["Vancouver", "Victoria", "Vernon"]));
    let focus = Arc::new(Mutex::new(FocusManager::new()));
    focus.lock().apply(&FocusRequest::field("city"));

    let moves = Arc::new(Mutex::new(Vec::new()));
    let (manager, sink) = (focus.clone(), moves.clone());
    combobox.focus_requested.connect(move |request| {
        sink.lock().push(manager.lock().apply(request));
    });

    combobox.activate_option(0);
    assert_eq!(*moves.lock(), vec![false]);
    assert!(focus.lock().has_focus("city"));
}

#[test]
fn test_scenario_type_navigate_commit() {
    let mut combobox = with_options("ve", values(&["Vancouver", "Victoria", "Vernon"]));
    assert!(combobox.is_list_open());
    assert_eq!(combobox.status(), "ve (3 suggestions)");

    press(&mut combobox, Key::ArrowDown);
    assert_eq!(combobox.highlighted_index(), Some(0));

    press(&mut combobox, Key::Enter);
    assert_eq!(combobox.text(), "Vancouver");
    assert!(!combobox.is_list_open());
    assert_eq!(combobox.status(), "valid");
}

#[test]
fn test_scenario_truncated_results() {
    let options: Vec<ComboboxOption> = (1..=15)
        .map(|i| ComboboxOption::from_value(format!("City {i}")))
        .collect();
    let combobox = with_options("ci", options);

    assert_eq!(combobox.displayed_options().len(), 10);
    assert_eq!(combobox.view().options().len(), 10);
    assert_eq!(combobox.status(), "ci (showing 10 of 15 suggestions)");
}

#[test]
fn test_highlight_clamps_to_displayed_options() {
    let options: Vec<ComboboxOption> = (1..=15)
        .map(|i| ComboboxOption::from_value(format!("City {i}")))
        .collect();
    let mut combobox = with_options("ci", options);

    for _ in 0..20 {
        assert!(press(&mut combobox, Key::ArrowDown));
    }
    assert_eq!(combobox.highlighted_index(), Some(9));
    let attrs = combobox.view().input.attributes();
    assert_eq!(attr(&attrs, "aria-activedescendant"), Some("city-option-9"));

    press(&mut combobox, Key::Enter);
    assert_eq!(combobox.text(), "City 10");
    assert_eq!(combobox.status(), "valid");
}

#[test]
fn test_scenario_loading() {
    let mut combobox = with_options("to", values(&["Toronto", "Tofino"]));
    combobox.set_loading(true);

    assert!(!combobox.is_suggestion_visible());
    assert_eq!(combobox.status(), "loading...");
    let attrs = combobox.view().input.attributes();
    assert_eq!(attr(&attrs, "aria-busy"), Some("true"));
    assert_eq!(attr(&attrs, "aria-expanded"), Some("false"));
}

#[test]
fn test_scenario_empty_text() {
    let mut combobox = with_options("ve", values(&["Vancouver", "Victoria", "Vernon"]));
    press(&mut combobox, Key::ArrowDown);
    combobox.input_text("");

    assert_eq!(combobox.status(), "empty");
    assert!(!combobox.is_list_open());
    assert_eq!(combobox.highlighted_index(), None);
}

#[test]
fn test_no_results_only_after_a_query() {
    let provider = SuggestionProvider::with_strings(vec!["Vancouver".to_string()]);
    let mut combobox = combobox();

    let ticket = combobox.input_text("x");
    assert_eq!(combobox.status(), "typing...");
    combobox.apply_suggestions(&ticket, provider.query(&ticket.text));
    assert_eq!(combobox.status(), "typing...");

    let ticket = combobox.input_text("xq");
    combobox.apply_suggestions(&ticket, provider.query(&ticket.text));
    assert_eq!(combobox.status(), "no results");
}

#[test]
fn test_status_bar_follows_engine() {
    let mut combobox = combobox();
    let status_bar = Arc::new(StatusBar::new("city-status"));
    status_bar.set_status(&combobox.status());

    let announcements = Arc::new(Mutex::new(Vec::new()));
    let sink = announcements.clone();
    status_bar.text_changed.connect(move |text| sink.lock().push(text.clone()));

    let bar = status_bar.clone();
    combobox.status_changed.connect(move |status| {
        bar.set_status(status);
    });

    let ticket = combobox.input_text("ve");
    combobox.apply_suggestions(&ticket, SuggestionResponse::from_values(["Vancouver", "Vernon"]));
    combobox.set_suggestions(SuggestionResponse::from_values(["Vancouver", "Vernon"]));

    assert_eq!(
        *announcements.lock(),
        vec!["status: typing...".to_string(), "status: ve (2 suggestions)".to_string()]
    );
}

#[test]
fn test_settings_drive_engine() {
    let settings = ComboboxSettings::from_toml_str("max_displayed = 2\nmin_chars = 1").unwrap();
    let mut combobox = Combobox::new("city", "City", settings.into_config()).unwrap();

    combobox.input_text("v");
    combobox.set_options(values(&["Vancouver", "Victoria", "Vernon"]));
    assert!(combobox.is_list_open());
    assert_eq!(combobox.status(), "v (showing 2 of 3 suggestions)");
}
