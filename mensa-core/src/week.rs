use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO week-year and week number selecting one published menu file.
///
/// The week is not range-checked; a week without a published file simply
/// fails to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

impl WeekKey {
    pub fn new(year: i32, week: u32) -> Self {
        Self { year, week }
    }

    /// The ISO week containing `date`.
    ///
    /// Uses the ISO week-year, so 2024-12-30 belongs to week 1 of 2025.
    pub fn from_date(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{}", self.year, pad2(self.week))
    }
}

/// Left-pad single-digit week numbers with a zero.
pub fn pad2(week: u32) -> String {
    format!("{:02}", week)
}

/// Relative path of a menu file: `{location}/{year}/{week:02}.json`.
pub fn menu_path(location: &str, key: WeekKey) -> String {
    format!("{}/{}/{}.json", location, key.year, pad2(key.week))
}
