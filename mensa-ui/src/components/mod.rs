//! Reusable Dioxus RSX components for the menu viewer.

mod error_display;
mod loading_spinner;
mod location_dropdown;
mod menu_header;
mod menu_table;
mod menu_view;

pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use location_dropdown::LocationDropdown;
pub use menu_header::MenuHeader;
pub use menu_table::{DayRows, MenuTable};
pub use menu_view::MenuView;
