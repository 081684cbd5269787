//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`
//! and change the selection only through [`AppState::select_location`].

use crate::browser;
use chrono::NaiveDate;
use dioxus::prelude::*;
use mensa_core::fetch::fetch_menu;
use mensa_core::http::HttpMenuSource;
use mensa_core::state::MenuState;
use mensa_core::week::WeekKey;

/// Shared application state for the menu viewer.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Selected location, week and the loaded menu or error
    pub menu: Signal<MenuState>,
    /// Date used to mark today's row, read once at start-up
    pub today: Signal<NaiveDate>,
    /// Base URL the menu files are fetched from
    pub base_url: Signal<String>,
}

impl AppState {
    /// Create a new AppState for the current browser date.
    ///
    /// The week is derived here once and kept for the whole session.
    pub fn new() -> Self {
        let today = browser::today();
        Self {
            menu: Signal::new(MenuState::new(WeekKey::from_date(today))),
            today: Signal::new(today),
            base_url: Signal::new(browser::page_base_url()),
        }
    }

    /// Switch to `location` and fetch its menu in the background.
    ///
    /// Must be called from within the Dioxus runtime (a component or handler).
    pub fn select_location(&mut self, location: String) {
        let ticket = self.menu.write().select_location(location);
        let source = HttpMenuSource::new(self.base_url.peek().clone());
        let mut menu = self.menu;

        spawn(async move {
            let result = fetch_menu(&source, &ticket.location, ticket.week).await;
            if !menu.write().apply(&ticket, result) {
                log::debug!("Dropped response for {}", ticket.location);
            }
        });
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
