//! City search example: a combobox over Canadian cities, driven by a
//! scripted sequence of keystrokes and rendered as plain text.
//!
//! Run with: cargo run -p horizon-combobox --example city_search
//!
//! Set `RUST_LOG=horizon_combobox=trace` to watch the engine work.

use std::sync::Arc;

use horizon_combobox::prelude::*;
use tracing_subscriber::EnvFilter;

const CITIES: &[&str] = &[
    "Abbotsford", "Burnaby", "Calgary", "Charlottetown", "Edmonton", "Fredericton", "Halifax",
    "Hamilton", "Kelowna", "Kingston", "Montréal", "Nanaimo", "Ottawa", "Québec City", "Regina",
    "Saskatoon", "St. John's", "Surrey", "Toronto", "Vancouver", "Vernon", "Victoria",
    "Whitehorse", "Winnipeg", "Yellowknife",
];

/// One scripted user action.
enum Step {
    Type(&'static str),
    Press(Key),
    Click(usize),
}

fn render(combobox: &Combobox, status_bar: &StatusBar) {
    let view = combobox.view();
    let loading = if view.label.loading_indicator { " (loading...)" } else { "" };
    println!("  {}{}: [{}]", view.label.text, loading, view.input.value);
    for option in view.options() {
        let marker = if option.selected() { ">" } else { " " };
        println!("   {marker} {} ({})", option.label, option.id());
    }
    if let Some(error) = &view.error {
        println!("  ! {}", error.message);
    }
    println!("  {}", status_bar.text());
}

fn main() -> Result<(), horizon_combobox::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let provider = SuggestionProvider::with_strings(CITIES.iter().map(|c| c.to_string()).collect());
    let config = ComboboxConfig::new()
        .with_max_displayed(5)
        .with_validator(OptionListValidator::new(CITIES))
        .with_placeholder("Start typing a city")
        .with_helper_text("Choose a Canadian city");

    let mut combobox = Combobox::new("city", "City", config)?;
    let status_bar = Arc::new(StatusBar::new("city-status"));
    status_bar.set_status(&combobox.status());

    let bar = status_bar.clone();
    combobox.status_changed.connect(move |status| {
        bar.set_status(status);
    });
    combobox.selected.connect(|city| {
        tracing::info!(city = %city, "city selected");
    });

    let script = [
        Step::Type("v"),
        Step::Type("ve"),
        Step::Press(Key::ArrowDown),
        Step::Press(Key::ArrowDown),
        Step::Press(Key::Enter),
        Step::Type("an"),
        Step::Press(Key::ArrowDown),
        Step::Press(Key::Escape),
        Step::Type("a"),
        Step::Click(2),
    ];

    for step in script {
        match step {
            Step::Type(text) => {
                println!("type {text:?}");
                let ticket = combobox.input_text(text);
                combobox.apply_suggestions(&ticket, SuggestionResponse::loading());
                combobox.apply_suggestions(&ticket, provider.query(&ticket.text));
            }
            Step::Press(key) => {
                let mut event = KeyPressEvent::new(key);
                let handled = combobox.handle_key_press(&mut event);
                println!("press {key:?} (handled: {handled})");
            }
            Step::Click(index) => {
                println!("click option {index}");
                if let Some(outcome) = combobox.activate_option(index) {
                    println!("  committed {:?}", outcome.new_text);
                }
            }
        }
        render(&combobox, &status_bar);
    }

    Ok(())
}
