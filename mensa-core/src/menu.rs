//! The weekly menu document as published at `{location}/{year}/{week}.json`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Price categories written by the menu publisher.
pub const PRICE_CATEGORIES: [&str; 3] = ["students", "staff", "guests"];

/// Category shown in the web table.
pub const DEFAULT_PRICE_CATEGORY: &str = "students";

/// A price field as it appears in the JSON: a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

/// One price tier of a dish.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceRecord {
    #[serde(default)]
    pub base_price: Option<PriceValue>,
    #[serde(default)]
    pub price_per_unit: Option<PriceValue>,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Price records keyed by category. A category may be present with a null record.
pub type Prices = BTreeMap<String, Option<PriceRecord>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    #[serde(default)]
    pub prices: Prices,
    /// Label ids such as `VEGAN` or `GLUTEN`
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub dish_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub date: NaiveDate,
    #[serde(default)]
    pub dishes: Vec<Dish>,
}

impl Day {
    /// Whether this day falls on `today`, ignoring the time of day.
    pub fn is_on(&self, today: NaiveDate) -> bool {
        self.date == today
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    /// ISO week number, written by the publisher but not required
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub year: Option<i32>,
    pub days: Vec<Day>,
}

impl Menu {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Index of the day to mark as today. Only the first match is flagged.
    pub fn today_index(&self, today: NaiveDate) -> Option<usize> {
        self.days.iter().position(|day| day.is_on(today))
    }

    pub fn dish_count(&self) -> usize {
        self.days.iter().map(|day| day.dishes.len()).sum()
    }
}
