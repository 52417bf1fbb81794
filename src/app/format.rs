use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

const WHOLE_UNITS_FROM: Decimal = dec!(1000);

/// `$` price with thousands separators. Whole units from 1000 up, otherwise
/// two to four decimals. An unquoted (zero) price renders as `$0`.
pub fn format_price(value: Decimal) -> String {
    if value.is_zero() {
        return String::from("$0");
    }

    let (rounded, min_decimals) = if value >= WHOLE_UNITS_FROM {
        (round(value, 0), 0)
    } else {
        (round(value, 4), 2)
    };

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{}${}", sign, group_digits(rounded.abs(), min_decimals))
}

pub fn format_price_with_code(value: Decimal, currency: &str) -> String {
    format!("{} {}", format_price(value), currency.to_uppercase())
}

pub fn format_change(change: Decimal) -> String {
    let arrow = if change >= Decimal::ZERO { '↗' } else { '↘' };
    format!("{}{:.2}%", arrow, round(change.abs(), 2))
}

pub fn format_quantity(value: Decimal) -> String {
    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}", sign, group_digits(value.abs(), 0))
}

fn round(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

fn group_digits(value: Decimal, min_decimals: usize) -> String {
    let text = value.normalize().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let mut fraction = fraction.to_string();
    while fraction.len() < min_decimals {
        fraction.push('0');
    }

    if fraction.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, fraction)
    }
}
