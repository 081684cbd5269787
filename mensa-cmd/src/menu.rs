//! Printing a week's menu to the terminal.

use crate::selection::{today, Selection};
use chrono::NaiveDate;
use log::info;
use mensa_core::menu::{Day, Menu};
use mensa_core::price::format_price;
use mensa_utils::dates::{day_label, format_date};

/// Fetch the selected week and print it.
pub async fn run_menu(selection: &Selection, today_only: bool) -> anyhow::Result<()> {
    let today = today();
    let menu = selection.fetch(today).await?;
    info!("Rendering {} days", menu.days.len());

    if today_only {
        print!("{}", render_today(&menu, &selection.category, today));
    } else {
        print!("{}", render_week(&menu, &selection.category, today));
    }
    Ok(())
}

/// All days of the week; today's heading is marked with `*`.
pub fn render_week(menu: &Menu, category: &str, today: NaiveDate) -> String {
    let today_index = menu.today_index(today);
    let width = name_width(menu.days.iter());
    let mut out = String::new();
    for (index, day) in menu.days.iter().enumerate() {
        render_day(&mut out, day, category, width, today_index == Some(index));
    }
    out
}

/// Only today's day, or a note when the week has no entry for it.
pub fn render_today(menu: &Menu, category: &str, today: NaiveDate) -> String {
    match menu.today_index(today) {
        Some(index) => {
            let day = &menu.days[index];
            let mut out = String::new();
            render_day(&mut out, day, category, name_width([day].into_iter()), true);
            out
        }
        None => format!("No menu for today ({})\n", format_date(&today)),
    }
}

fn render_day(out: &mut String, day: &Day, category: &str, width: usize, is_today: bool) {
    out.push_str(&day_label(&day.date));
    if is_today {
        out.push_str(" *");
    }
    out.push('\n');

    for dish in &day.dishes {
        let price = format_price(&dish.prices, category);
        let line = format!("  {:<width$}  {}", dish.name, price, width = width);
        out.push_str(line.trim_end());
        out.push('\n');
    }
}

fn name_width<'a>(days: impl Iterator<Item = &'a Day>) -> usize {
    days.flat_map(|day| day.dishes.iter())
        .map(|dish| dish.name.chars().count())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEEK_JSON: &str = r#"{
        "days": [
            {
                "date": "2024-03-11",
                "dishes": [
                    {"name": "Linsen", "prices": {"students": {"base_price": 2.5, "price_per_unit": null, "unit": null}}},
                    {"name": "Salatbuffet", "prices": {"students": {"base_price": 0, "price_per_unit": "0.85", "unit": "100g"}}}
                ]
            },
            {
                "date": "2024-03-12",
                "dishes": [
                    {"name": "Suppe", "prices": {"staff": {"base_price": "1.20", "price_per_unit": null, "unit": null}}}
                ]
            }
        ]
    }"#;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_render_week_marks_today() {
        let menu = Menu::from_json(WEEK_JSON).unwrap();
        let output = render_week(&menu, "students", day(2024, 3, 12));
        let expected = "\
Monday, 2024-03-11
  Linsen       2.50€
  Salatbuffet  0.85€/100g
Tuesday, 2024-03-12 *
  Suppe
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_week_other_category() {
        let menu = Menu::from_json(WEEK_JSON).unwrap();
        let output = render_week(&menu, "staff", day(2024, 3, 20));
        assert!(output.contains("  Suppe        1.20€\n"));
        assert!(!output.contains('*'));
    }

    #[test]
    fn test_render_today() {
        let menu = Menu::from_json(WEEK_JSON).unwrap();
        let output = render_today(&menu, "students", day(2024, 3, 11));
        assert!(output.starts_with("Monday, 2024-03-11 *\n"));
        assert!(!output.contains("Tuesday"));
    }

    #[test]
    fn test_render_today_missing() {
        let menu = Menu::from_json(WEEK_JSON).unwrap();
        let output = render_today(&menu, "students", day(2024, 3, 16));
        assert_eq!(output, "No menu for today (2024-03-16)\n");
    }
}
