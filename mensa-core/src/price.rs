//! Turning price records into display strings like `3.50€ + 0.50€/100g`.

use crate::menu::{PriceRecord, PriceValue, Prices};

/// Display string for the `category` tier of a dish.
///
/// Returns an empty string when the category is missing or its record is null.
pub fn format_price(prices: &Prices, category: &str) -> String {
    format_record(prices.get(category).and_then(Option::as_ref))
}

/// Display string for a single price record.
///
/// The base segment is shown when it parses to a positive amount. The per-unit
/// segment additionally needs a unit. Amounts always carry two decimals and a
/// trailing euro sign.
pub fn format_record(record: Option<&PriceRecord>) -> String {
    let Some(record) = record else {
        return String::new();
    };

    let base = record
        .base_price
        .as_ref()
        .and_then(parse_amount)
        .filter(|amount| *amount > 0.0)
        .map(|amount| format!("{}€", to_fixed2(amount)));

    let per_unit = match (
        record.price_per_unit.as_ref().and_then(parse_amount),
        record.unit.as_deref(),
    ) {
        (Some(amount), Some(unit)) if amount > 0.0 => {
            Some(format!("{}€/{}", to_fixed2(amount), unit))
        }
        _ => None,
    };

    match (base, per_unit) {
        (Some(base), Some(per_unit)) => format!("{} + {}", base, per_unit),
        (Some(base), None) => base,
        (None, Some(per_unit)) => per_unit,
        (None, None) => String::new(),
    }
}

/// Two-decimal rendering that breaks exact ties away from zero.
///
/// `{:.2}` rounds an exact tie to the even digit (1.125 -> "1.12"). A double
/// sits exactly halfway between two cents only when it is an odd multiple of
/// 1/8, so those values are rounded up in magnitude by hand.
pub fn to_fixed2(amount: f64) -> String {
    let eighths = amount * 8.0;
    let is_tie = eighths.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 != 0.0;
    if !is_tie || eighths.abs() >= 1e15 {
        return format!("{:.2}", amount);
    }
    let cents = (amount.abs() * 100.0).ceil() as i64;
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}

/// Numeric value of a price field.
///
/// Strings are read like a leading decimal literal, so `"2.5€"` is 2.5 and
/// `"ca. 2"` is not a number.
pub fn parse_amount(value: &PriceValue) -> Option<f64> {
    match value {
        PriceValue::Number(amount) if amount.is_finite() => Some(*amount),
        PriceValue::Number(_) => None,
        PriceValue::Text(text) => parse_leading_decimal(text),
        PriceValue::Other(_) => None,
    }
}

fn parse_leading_decimal(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if frac_digits > 0 || int_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Option<PriceValue> {
        Some(PriceValue::Text(s.to_string()))
    }

    fn record(base: Option<PriceValue>, per_unit: Option<PriceValue>, unit: Option<&str>) -> PriceRecord {
        PriceRecord {
            base_price: base,
            price_per_unit: per_unit,
            unit: unit.map(str::to_string),
        }
    }

    fn students(record: Option<PriceRecord>) -> Prices {
        let mut prices = Prices::new();
        prices.insert("students".to_string(), record);
        prices
    }

    #[test]
    fn test_base_only() {
        let prices = students(Some(record(text("3.50"), None, None)));
        assert_eq!(format_price(&prices, "students"), "3.50€");
    }

    #[test]
    fn test_per_unit_only_when_base_is_zero() {
        let prices = students(Some(record(text("0"), text("0.50"), Some("100g"))));
        assert_eq!(format_price(&prices, "students"), "0.50€/100g");
    }

    #[test]
    fn test_base_and_per_unit() {
        let prices = students(Some(record(text("3.50"), text("0.50"), Some("100g"))));
        assert_eq!(format_price(&prices, "students"), "3.50€ + 0.50€/100g");
    }

    #[test]
    fn test_all_null_is_empty() {
        let prices = students(Some(record(None, None, None)));
        assert_eq!(format_price(&prices, "students"), "");
    }

    #[test]
    fn test_missing_category_is_empty() {
        assert_eq!(format_price(&Prices::new(), "students"), "");
        assert_eq!(format_record(None), "");
    }

    #[test]
    fn test_null_record_is_empty() {
        let prices = students(None);
        assert_eq!(format_price(&prices, "students"), "");
    }

    #[test]
    fn test_other_category_not_used_as_fallback() {
        let prices = students(Some(record(text("3.50"), None, None)));
        assert_eq!(format_price(&prices, "staff"), "");
    }

    #[test]
    fn test_per_unit_needs_unit() {
        let prices = students(Some(record(text("2.00"), text("0.50"), None)));
        assert_eq!(format_price(&prices, "students"), "2.00€");
    }

    #[test]
    fn test_negative_amounts_are_dropped() {
        let prices = students(Some(record(text("-1"), text("-0.5"), Some("100g"))));
        assert_eq!(format_price(&prices, "students"), "");
    }

    #[test]
    fn test_numbers_are_padded_to_two_decimals() {
        let prices = students(Some(record(
            Some(PriceValue::Number(2.0)),
            Some(PriceValue::Number(1.5)),
            Some("Portion"),
        )));
        assert_eq!(format_price(&prices, "students"), "2.00€ + 1.50€/Portion");
    }

    #[test]
    fn test_unparseable_base_is_omitted() {
        let prices = students(Some(record(text("n/a"), text("0.90"), Some("100g"))));
        assert_eq!(format_price(&prices, "students"), "0.90€/100g");
    }

    #[test]
    fn test_to_fixed2_breaks_ties_upward() {
        assert_eq!(to_fixed2(0.125), "0.13");
        assert_eq!(to_fixed2(1.125), "1.13");
        assert_eq!(to_fixed2(0.375), "0.38");
        assert_eq!(to_fixed2(-0.125), "-0.13");
    }

    #[test]
    fn test_to_fixed2_non_ties_round_to_nearest() {
        // stored as 2.67499999...
        assert_eq!(to_fixed2(2.675), "2.67");
        // stored as 1.00499999...
        assert_eq!(to_fixed2(1.005), "1.00");
        assert_eq!(to_fixed2(2.5), "2.50");
        assert_eq!(to_fixed2(3.0), "3.00");
        assert_eq!(to_fixed2(0.0), "0.00");
    }

    #[test]
    fn test_halfway_prices_round_up() {
        let prices = students(Some(record(
            Some(PriceValue::Number(1.125)),
            text("0.125"),
            Some("100g"),
        )));
        assert_eq!(format_price(&prices, "students"), "1.13€ + 0.13€/100g");
    }

    #[test]
    fn test_parse_amount_leading_decimal() {
        assert_eq!(parse_amount(&PriceValue::Text("2.5€".into())), Some(2.5));
        assert_eq!(parse_amount(&PriceValue::Text("  4".into())), Some(4.0));
        assert_eq!(parse_amount(&PriceValue::Text(".75".into())), Some(0.75));
        assert_eq!(parse_amount(&PriceValue::Text("3.".into())), Some(3.0));
        assert_eq!(parse_amount(&PriceValue::Text("1e1x".into())), Some(10.0));
        assert_eq!(parse_amount(&PriceValue::Text("2e".into())), Some(2.0));
        assert_eq!(parse_amount(&PriceValue::Text("".into())), None);
        assert_eq!(parse_amount(&PriceValue::Text(".".into())), None);
        assert_eq!(parse_amount(&PriceValue::Text("ca. 2".into())), None);
        assert_eq!(parse_amount(&PriceValue::Other(serde_json::Value::Bool(true))), None);
    }

    #[test]
    fn test_repeated_calls_are_stable() {
        let prices = students(Some(record(text("3.50"), text("0.50"), Some("100g"))));
        let first = format_price(&prices, "students");
        let second = format_price(&prices, "students");
        assert_eq!(first, second);
        assert_eq!(
            format_record(prices["students"].as_ref()),
            format_record(prices["students"].as_ref())
        );
    }
}
