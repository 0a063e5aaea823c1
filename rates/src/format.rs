//! Display formatting and reparsing for converted amounts.
//!
//! Two currencies carry locale conventions: Rupiah renders as `Rp16.000`
//! (symbol, `.` thousands grouping, no fraction digits) and US Dollar as
//! `$1,234.56` (symbol, `,` grouping, two fraction digits). Every other
//! catalog currency renders as a plain two-decimal number.

use pocketfx_common::Currency;
use rust_decimal::{Decimal, RoundingStrategy};

/// Format a converted amount for display in the target currency.
///
/// The result is never empty. Midpoints round away from zero, so
/// 0.625 USD displays as `$0.63`.
pub fn display_amount(value: Decimal, currency: &Currency) -> String {
    match currency.code() {
        "IDR" => format_idr(value),
        "USD" => format_usd(value),
        _ => {
            let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.2}")
        }
    }
}

/// Render an amount without symbol or grouping, using the currency's
/// display precision. Used to seed the input field after a swap.
pub fn plain_amount(value: Decimal, currency: &Currency) -> String {
    let decimals = currency.display_decimals();
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.prec$}", prec = decimals as usize)
}

/// Invert the formatting applied by [`display_amount`].
///
/// IDR and USD are parsed under their locale conventions; any other
/// currency keeps only digits and decimal points and parses what
/// remains. Returns `None` when nothing numeric survives.
pub fn reparse_display(text: &str, currency: &Currency) -> Option<Decimal> {
    match currency.code() {
        "IDR" => parse_idr(text),
        "USD" => parse_usd(text),
        _ => {
            let cleaned: String = text
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            cleaned.parse().ok()
        }
    }
}

fn format_idr(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_digits(&digits, '.');

    if negative {
        format!("-Rp{grouped}")
    } else {
        format!("Rp{grouped}")
    }
}

fn format_usd(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let body = format!("{:.2}", rounded.abs());

    // body always has the form <integer>.<2 digits>
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body.as_str(), "00"));
    let grouped = group_digits(int_part, ',');

    if negative {
        format!("-${grouped}.{frac_part}")
    } else {
        format!("${grouped}.{frac_part}")
    }
}

fn parse_idr(text: &str) -> Option<Decimal> {
    let (negative, rest) = split_sign(text.trim());
    let rest = rest.trim_start_matches("Rp").trim();

    // '.' is the grouping separator, ',' the decimal separator.
    let cleaned: String = rest
        .chars()
        .filter(|c| *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    let value: Decimal = cleaned.parse().ok()?;
    Some(if negative { -value } else { value })
}

fn parse_usd(text: &str) -> Option<Decimal> {
    let (negative, rest) = split_sign(text.trim());
    let rest = rest.trim_start_matches('$').trim();

    let cleaned: String = rest.chars().filter(|c| *c != ',').collect();

    let value: Decimal = cleaned.parse().ok()?;
    Some(if negative { -value } else { value })
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    }
}

/// Insert a grouping separator every three digits from the right.
fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    grouped
}
