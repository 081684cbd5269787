//! Weekly mensa menu viewer.
//!
//! Data flow:
//! 1. On start-up `AppState::new` reads the browser date and fixes the ISO week.
//! 2. On mount the `mensa` query parameter is resolved to a location
//!    (default `mensa-garching`) and its menu is fetched from
//!    `{location}/{year}/{week}.json` next to the page.
//! 3. Picking another location in the dropdown starts a new fetch; only the
//!    newest response is shown.

use dioxus::prelude::*;
use mensa_core::location::resolve_location;
use mensa_ui::browser;
use mensa_ui::components::{MenuHeader, MenuView};
use mensa_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("app"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the initial location once on mount
    use_effect(move || {
        let location = resolve_location(browser::location_param().as_deref());
        log::info!(
            "Starting with {} for week {}",
            location,
            state.menu.peek().week()
        );
        state.select_location(location);
    });

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",
            MenuHeader {}
            MenuView {}
        }
    }
}
