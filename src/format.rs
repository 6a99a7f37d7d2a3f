//! Display formatting for currency and counts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats `value` with thousands separators and exactly `dp` decimal places.
///
/// Midpoints round away from zero.
///
/// ```
/// use hawker_hub::format::group_thousands;
/// use rust_decimal::Decimal;
///
/// assert_eq!(group_thousands(Decimal::new(12345678, 2), 2), "123,456.78");
/// assert_eq!(group_thousands(Decimal::new(52005, 1), 0), "5,201");
/// ```
pub fn group_thousands(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.*}", dp as usize, rounded.abs());

    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if negative {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// Formats a currency amount as `$1,234.56`, or `-$1,234.56` when negative.
pub fn format_currency(amount: Decimal) -> String {
    let body = group_thousands(amount.abs(), 2);
    if amount.is_sign_negative() && !amount.round_dp(2).is_zero() {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}
