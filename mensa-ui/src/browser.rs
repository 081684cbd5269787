//! Thin wrappers around the browser APIs the app needs.
//!
//! Every accessor degrades to a neutral value when the API is unavailable
//! instead of panicking.

use chrono::NaiveDate;
use mensa_core::location::LOCATION_QUERY_PARAM;
use mensa_utils::urls;
use wasm_bindgen::JsValue;
use web_sys::UrlSearchParams;

/// Value of a query parameter of the current page.
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name)
}

/// The `mensa` query parameter, if any.
pub fn location_param() -> Option<String> {
    query_param(LOCATION_QUERY_PARAM)
}

/// Directory the page was served from; menu paths are resolved against it.
pub fn page_base_url() -> String {
    web_sys::window()
        .and_then(|window| window.location().href().ok())
        .map(|href| urls::base_url_from_href(&href))
        .unwrap_or_default()
}

/// Today's date on the browser clock, in local time.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Rewrite the address bar to `?mensa={location}` without reloading.
pub fn replace_location_query(location: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let params = match UrlSearchParams::new() {
        Ok(params) => params,
        Err(e) => {
            log::warn!("Failed to build query string: {:?}", e);
            return;
        }
    };
    params.set(LOCATION_QUERY_PARAM, location);
    let url = format!("?{}", String::from(params.to_string()));

    match window.history() {
        Ok(history) => {
            if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url)) {
                log::warn!("Failed to update address bar: {:?}", e);
            }
        }
        Err(e) => log::warn!("History API unavailable: {:?}", e),
    }
}
