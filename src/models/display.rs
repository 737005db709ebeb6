//! Presentation helpers for rental agreements.
//!
//! Amounts print as US currency with thousands grouping (`$9,999.99`),
//! percentages with no fraction digits (`10%`) and dates as `MM/dd/yy`.
//! Rounding for display is half-up, matching the billing rounding.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as US currency.
///
/// # Example
///
/// ```
/// use tool_rental::models::display::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Decimal::from_str("9999.99").unwrap()), "$9,999.99");
/// assert_eq!(format_currency(Decimal::from_str("0.8").unwrap()), "$0.80");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("${}{}.{}", sign, group_thousands(whole), fraction)
}

/// Formats a percentage with no fraction digits.
///
/// ```
/// use tool_rental::models::display::format_percent;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_percent(Decimal::from(10)), "10%");
/// ```
pub fn format_percent(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.0}%", rounded)
}

/// Formats a date as `MM/dd/yy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%m/%d/%y").to_string()
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
