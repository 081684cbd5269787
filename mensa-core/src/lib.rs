//! Core of the weekly mensa menu viewer.
//!
//! - `location`: known locations and the query-parameter resolver
//! - `week`: ISO week keys and menu file paths
//! - `menu`: the published menu document
//! - `price`: price record formatting
//! - `fetch`: fetching a week's menu and classifying failures
//! - `state`: the controller state shared by the front-ends

pub mod error;
pub mod fetch;
#[cfg(feature = "api")]
pub mod http;
pub mod location;
pub mod menu;
pub mod price;
pub mod state;
pub mod week;
