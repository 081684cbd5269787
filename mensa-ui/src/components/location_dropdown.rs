//! Dropdown selector for choosing a location.

use crate::browser;
use crate::state::AppState;
use dioxus::prelude::*;
use mensa_core::location::{is_known_location, KNOWN_LOCATIONS};

/// Location dropdown selector.
/// Lists the known locations in order; picking one updates the address bar
/// and loads that location's menu.
#[component]
pub fn LocationDropdown() -> Element {
    let mut state = use_context::<AppState>();
    let selected = state
        .menu
        .read()
        .location()
        .map(str::to_string)
        .unwrap_or_default();
    let has_known_selection = is_known_location(&selected);

    let on_change = move |evt: Event<FormData>| {
        let location = evt.value();
        if location.is_empty() {
            return;
        }
        browser::replace_location_query(&location);
        state.select_location(location);
    };

    rsx! {
        div {
            class: "select",
            style: "margin: 8px 0;",
            select {
                id: "location-select",
                onchange: on_change,
                option {
                    value: "",
                    disabled: true,
                    selected: !has_known_selection,
                    "-- Choose a location --"
                }
                for location in KNOWN_LOCATIONS {
                    option {
                        key: "{location}",
                        value: "{location}",
                        selected: location == selected,
                        "{location}"
                    }
                }
            }
        }
    }
}
