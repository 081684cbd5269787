//! The weekly menu table: one heading row per day followed by its dishes.

use chrono::NaiveDate;
use dioxus::prelude::*;
use mensa_core::menu::{Day, Menu, DEFAULT_PRICE_CATEGORY};
use mensa_core::price::format_price;
use mensa_utils::dates::day_label;

#[derive(Props, Clone, PartialEq)]
pub struct MenuTableProps {
    pub menu: Menu,
    /// Date whose row gets the `today` anchor
    pub today: NaiveDate,
}

#[component]
pub fn MenuTable(props: MenuTableProps) -> Element {
    let today_index = props.menu.today_index(props.today);

    rsx! {
        table {
            class: "table is-hoverable",
            style: "margin: 0 auto;",
            thead {
                tr {
                    th { "Dish" }
                    th { "Price ({DEFAULT_PRICE_CATEGORY})" }
                }
            }
            tbody {
                for (index, day) in props.menu.days.iter().enumerate() {
                    DayRows {
                        key: "{day.date}",
                        day: day.clone(),
                        is_today: today_index == Some(index),
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DayRowsProps {
    pub day: Day,
    #[props(default = false)]
    pub is_today: bool,
}

/// Heading row for a day plus one row per dish.
#[component]
pub fn DayRows(props: DayRowsProps) -> Element {
    let label = day_label(&props.day.date);
    let dishes: Vec<(String, String)> = props
        .day
        .dishes
        .iter()
        .map(|dish| (dish.name.clone(), format_price(&dish.prices, DEFAULT_PRICE_CATEGORY)))
        .collect();

    rsx! {
        if props.is_today {
            tr {
                id: "today",
                td {
                    class: "is-light",
                    colspan: "2",
                    b { "{label}" }
                }
            }
        } else {
            tr {
                td {
                    class: "is-light",
                    colspan: "2",
                    b { "{label}" }
                }
            }
        }
        for (name, price) in dishes {
            tr {
                td { "{name}" }
                td { "{price}" }
            }
        }
    }
}
