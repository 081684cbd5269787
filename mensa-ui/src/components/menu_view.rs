//! Switches between error, table and loading indicator.

use super::{ErrorDisplay, LoadingSpinner, MenuTable};
use crate::state::AppState;
use dioxus::prelude::*;
use mensa_core::state::MenuStatus;

#[component]
pub fn MenuView() -> Element {
    let state = use_context::<AppState>();
    let status = state.menu.read().status().clone();
    let today = (state.today)();

    rsx! {
        div {
            class: "has-text-centered",
            {match status {
                MenuStatus::Failed(error) => rsx! {
                    ErrorDisplay { message: error.to_string() }
                },
                MenuStatus::Loaded(menu) => rsx! {
                    MenuTable { menu: menu, today: today }
                },
                MenuStatus::Loading => rsx! {
                    LoadingSpinner {}
                },
            }}
        }
    }
}
