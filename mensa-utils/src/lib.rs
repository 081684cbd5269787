//! Shared utility functions for the mensa crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, NaiveDate};

    /// English weekday names indexed by days since Sunday.
    pub const WEEKDAY_NAMES: [&str; 7] = [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// Weekday name for a date, Sunday = 0 through Saturday = 6.
    pub fn weekday_name(date: &NaiveDate) -> &'static str {
        WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize]
    }

    /// Heading used for a day row, e.g. "Monday, 2024-03-11".
    pub fn day_label(date: &NaiveDate) -> String {
        format!("{}, {}", weekday_name(date), format_date(date))
    }

}

/// URL helpers for resolving menu paths against the page the app is served from.
pub mod urls {
    /// Directory part of a page URL, with query and fragment dropped.
    ///
    /// `https://host/app/index.html?mensa=x#today` becomes `https://host/app/`.
    pub fn base_url_from_href(href: &str) -> String {
        let end = href.find(|c| c == '?' || c == '#').unwrap_or(href.len());
        let href = &href[..end];
        let path_start = href.find("://").map(|i| i + 3).unwrap_or(0);
        match href[path_start..].rfind('/') {
            Some(i) => href[..path_start + i + 1].to_string(),
            None => format!("{}/", href),
        }
    }

    /// Append a relative path to a base URL with exactly one slash between them.
    pub fn join(base: &str, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if base.ends_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

}
