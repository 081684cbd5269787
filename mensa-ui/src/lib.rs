//! Shared Dioxus components and browser glue for the mensa menu viewer.
//!
//! This crate provides:
//! - `browser`: query string, page URL, history and clock access via `web_sys`/`js_sys`
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: RSX components (location dropdown, menu table, etc.)

pub mod browser;
pub mod components;
pub mod state;
