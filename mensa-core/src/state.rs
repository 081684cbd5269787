//! Selection and menu state owned by the front-end controller.
//!
//! Every fetch is started through [`MenuState::select_location`], which hands
//! out a [`FetchTicket`]. Results are applied only for the most recent ticket,
//! so a slow response for a previous selection cannot overwrite a newer one.

use crate::error::FetchError;
use crate::menu::Menu;
use crate::week::WeekKey;
use log::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum MenuStatus {
    Loading,
    Loaded(Menu),
    Failed(FetchError),
}

/// Identifies one fetch started by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub location: String,
    pub week: WeekKey,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuState {
    location: Option<String>,
    week: WeekKey,
    status: MenuStatus,
    latest_seq: u64,
}

impl MenuState {
    /// State for a session whose week was fixed at start-up. Nothing is loaded yet.
    pub fn new(week: WeekKey) -> Self {
        Self {
            location: None,
            week,
            status: MenuStatus::Loading,
            latest_seq: 0,
        }
    }

    /// Current location, `None` after an unknown location was rejected.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn week(&self) -> WeekKey {
        self.week
    }

    pub fn status(&self) -> &MenuStatus {
        &self.status
    }

    pub fn menu(&self) -> Option<&Menu> {
        match &self.status {
            MenuStatus::Loaded(menu) => Some(menu),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.status {
            MenuStatus::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, MenuStatus::Loading)
    }

    /// Switch to `location` and start loading its menu.
    pub fn select_location(&mut self, location: impl Into<String>) -> FetchTicket {
        let location = location.into();
        self.latest_seq += 1;
        self.location = Some(location.clone());
        self.status = MenuStatus::Loading;
        FetchTicket {
            seq: self.latest_seq,
            location,
            week: self.week,
        }
    }

    /// Replace the shown menu. Returns false if the ticket is stale.
    pub fn menu_fetched(&mut self, ticket: &FetchTicket, menu: Menu) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.status = MenuStatus::Loaded(menu);
        true
    }

    /// Show a fetch error. An unknown location also clears the selection.
    /// Returns false if the ticket is stale.
    pub fn menu_fetch_failed(&mut self, ticket: &FetchTicket, error: FetchError) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        if matches!(error, FetchError::UnknownLocation { .. }) {
            self.location = None;
        }
        self.status = MenuStatus::Failed(error);
        true
    }

    /// Apply the outcome of [`crate::fetch::fetch_menu`] for `ticket`.
    pub fn apply(&mut self, ticket: &FetchTicket, result: Result<Menu, FetchError>) -> bool {
        match result {
            Ok(menu) => self.menu_fetched(ticket, menu),
            Err(e) => self.menu_fetch_failed(ticket, e),
        }
    }

    fn is_current(&self, ticket: &FetchTicket) -> bool {
        if ticket.seq != self.latest_seq {
            debug!(
                "Ignoring stale response #{} for {} (latest is #{})",
                ticket.seq, ticket.location, self.latest_seq
            );
            return false;
        }
        true
    }
}
