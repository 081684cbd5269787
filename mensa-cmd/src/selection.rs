//! Which location and week a command works on.

use chrono::{Datelike, Local, NaiveDate};
use clap::Args;
use mensa_core::fetch::fetch_menu;
use mensa_core::http::{HttpMenuSource, DEFAULT_BASE_URL};
use mensa_core::location::resolve_location;
use mensa_core::menu::{Menu, DEFAULT_PRICE_CATEGORY, PRICE_CATEGORIES};
use mensa_core::week::WeekKey;
use mensa_utils::dates::parse_date;

#[derive(Args, Debug, Clone)]
pub struct Selection {
    /// Location id, e.g. mensa-garching (default when omitted)
    #[arg(short = 'l', long)]
    pub location: Option<String>,

    /// ISO week-year, defaults to the year of the selected week
    #[arg(long, requires = "week")]
    pub year: Option<i32>,

    /// ISO week number
    #[arg(short = 'w', long)]
    pub week: Option<u32>,

    /// Any date inside the wanted week (defaults to today)
    #[arg(short = 'd', long, value_name = "YYYY-MM-DD")]
    pub date: Option<String>,

    /// Price category to show
    #[arg(short = 'c', long, default_value = DEFAULT_PRICE_CATEGORY, value_parser = PRICE_CATEGORIES)]
    pub category: String,

    /// Where the menu files are published
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

impl Selection {
    /// The reference date: `--date` if given, else today.
    pub fn reference_date(&self, today: NaiveDate) -> anyhow::Result<NaiveDate> {
        match &self.date {
            Some(date) => parse_date(date),
            None => Ok(today),
        }
    }

    /// Resolve location and week key. Explicit `--week`/`--year` win over dates.
    pub fn resolve(&self, today: NaiveDate) -> anyhow::Result<(String, WeekKey)> {
        let location = resolve_location(self.location.as_deref());
        let reference = self.reference_date(today)?;
        let week = match self.week {
            Some(week) => WeekKey::new(
                self.year.unwrap_or_else(|| reference.iso_week().year()),
                week,
            ),
            None => WeekKey::from_date(reference),
        };
        Ok((location, week))
    }

    /// Fetch the selected week with a single request.
    pub async fn fetch(&self, today: NaiveDate) -> anyhow::Result<Menu> {
        let (location, week) = self.resolve(today)?;
        let source = HttpMenuSource::new(self.base_url.clone());
        Ok(fetch_menu(&source, &location, week).await?)
    }
}

/// Today's date on the local clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
