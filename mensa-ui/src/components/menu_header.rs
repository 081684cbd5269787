//! Page header with the location title and a jump-to-today button.

use super::LocationDropdown;
use crate::state::AppState;
use dioxus::prelude::*;

/// Shows the current location (blank after an unknown location was rejected).
#[component]
pub fn MenuHeader() -> Element {
    let state = use_context::<AppState>();
    let title = state
        .menu
        .read()
        .location()
        .map(str::to_string)
        .unwrap_or_default();

    rsx! {
        div {
            style: "display: flex; gap: 12px; align-items: center;",
            LocationDropdown {}
            a {
                class: "button",
                href: "#today",
                "Today"
            }
        }
        div {
            class: "has-text-centered",
            h1 {
                class: "title",
                "{title}"
            }
        }
    }
}
