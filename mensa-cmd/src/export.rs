//! CSV export of a week's menu.

use crate::selection::{today, Selection};
use log::info;
use mensa_core::menu::Menu;
use mensa_core::price::format_price;
use mensa_utils::dates::{format_date, weekday_name};
use std::io::Write;

/// Fetch the selected week and write it to `output`.
pub async fn run_export(selection: &Selection, output: &str) -> anyhow::Result<()> {
    let menu = selection.fetch(today()).await?;
    let file = std::fs::File::create(output)?;
    let rows = write_csv(&menu, &selection.category, file)?;
    info!("Export complete. {} dishes written to {}", rows, output);
    Ok(())
}

/// Write one row per dish: `date,weekday,dish,dish_type,labels,price`.
/// Labels are joined with spaces.
/// Returns the number of dish rows written.
pub fn write_csv<W: Write>(menu: &Menu, category: &str, writer: W) -> anyhow::Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["date", "weekday", "dish", "dish_type", "labels", "price"])?;

    let mut rows = 0;
    for day in &menu.days {
        let date = format_date(&day.date);
        let weekday = weekday_name(&day.date);
        for dish in &day.dishes {
            let price = format_price(&dish.prices, category);
            let labels = dish.labels.join(" ");
            wtr.write_record([
                date.as_str(),
                weekday,
                dish.name.as_str(),
                dish.dish_type.as_deref().unwrap_or(""),
                labels.as_str(),
                price.as_str(),
            ])?;
            rows += 1;
        }
    }
    wtr.flush()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_csv_dish_without_labels() {
        let menu = Menu::from_json(
            r#"{"days": [{"date": "2024-03-15", "dishes": [{"name": "Suppe", "prices": {}}]}]}"#,
        )
        .unwrap();

        let mut buf = Vec::new();
        write_csv(&menu, "students", &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().nth(1), Some("2024-03-15,Friday,Suppe,,,"));
    }

    #[test]
    fn test_write_csv() {
        let menu = Menu::from_json(
            r#"{"days": [
                {"date": "2024-03-11", "dishes": [
                    {"name": "Käsespätzle, mit Röstzwiebeln", "dish_type": "Hauptgericht",
                     "labels": ["VEGETARIAN", "MILK"],
                     "prices": {"students": {"base_price": "3.5", "price_per_unit": "0.5", "unit": "100g"}}}
                ]},
                {"date": "2024-03-12", "dishes": []}
            ]}"#,
        )
        .unwrap();

        let mut buf = Vec::new();
        let rows = write_csv(&menu, "students", &mut buf).unwrap();
        assert_eq!(rows, 1);

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "date,weekday,dish,dish_type,labels,price\n\
             2024-03-11,Monday,\"Käsespätzle, mit Röstzwiebeln\",Hauptgericht,VEGETARIAN MILK,3.50€ + 0.50€/100g\n"
        );
    }
}
