//! Parsing and formatting of euro amount strings.
//!
//! The display convention across the app is two decimals, a comma as the
//! decimal separator and a trailing euro sign, e.g. "-3,50 €". Parsing
//! is the inverse and is only used for computing displayed totals.

use crate::Error;

/// The currency symbol appended to every formatted amount.
pub const CURRENCY_SYMBOL: &str = "€";

/// Points are earned at a rate of one point per two euro spent.
const POINTS_PER_EURO: f64 = 0.5;

/// Parses an amount string such as "-3,50 €", "-3 €" or "+5,50 €" into
/// its numeric value.
///
/// The currency symbol and surrounding whitespace are stripped and the
/// decimal comma is substituted with a period before parsing.
///
/// Returns [Error::InvalidAmount] if the remaining text is not a number.
pub fn parse_amount(text: &str) -> Result<f64, Error> {
    let normalized = text
        .trim()
        .trim_end_matches(CURRENCY_SYMBOL)
        .trim_end()
        .trim_start_matches('+')
        .replace(',', ".");

    normalized
        .parse::<f64>()
        .map_err(|_| Error::InvalidAmount(text.to_owned()))
}

/// Formats `value` with two decimals, a decimal comma and the trailing
/// currency symbol, e.g. -3.5 becomes "-3,50 €".
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}").replace('.', ",") + " " + CURRENCY_SYMBOL
}

/// Like [format_amount], but credits carry an explicit plus sign,
/// e.g. 5.5 becomes "+5,50 €".
///
/// Used for incoming payments on the business screens.
pub fn format_amount_signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", format_amount(value))
    } else {
        format_amount(value)
    }
}

/// Formats `value` rounded to the nearest whole euro with a period as
/// the thousands separator, e.g. 12480.0 becomes "12.480 €".
///
/// Used for the large summary figures on the analytics page.
pub fn format_amount_rounded(value: f64) -> String {
    let rounded = value.round() as i64;
    format!("{} {CURRENCY_SYMBOL}", group_thousands(rounded))
}

/// The number of points earned by a transaction of `amount` euro.
///
/// The sign of `amount` is ignored so that debits earn points too.
pub fn points_earned(amount: f64) -> f64 {
    amount.abs() * POINTS_PER_EURO
}

/// Formats a points value with two decimals and a decimal comma,
/// without a currency symbol, e.g. 0.85 becomes "0,85".
pub fn format_points(value: f64) -> String {
    format!("{value:.2}").replace('.', ",")
}

/// Splits a balance into its whole-euro part (thousands grouped with a
/// period) and its cents part including the currency symbol.
///
/// 3541.85 becomes ("3.541", ",85 €"). The two halves are rendered at
/// different font sizes on the home screens.
pub fn balance_parts(value: f64) -> (String, String) {
    let cents_total = (value.abs() * 100.0).round() as i64;
    let whole = cents_total / 100;
    let cents = cents_total % 100;

    let sign = if value < 0.0 { "-" } else { "" };

    (
        format!("{sign}{}", group_thousands(whole)),
        format!(",{cents:02} {CURRENCY_SYMBOL}"),
    )
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::{
        balance_parts, format_amount, format_amount_rounded, format_amount_signed, format_points,
        parse_amount, points_earned,
    };

    #[test]
    fn parse_amount_reads_two_decimal_amounts() {
        assert_eq!(parse_amount("-3,50 €"), Ok(-3.5));
        assert_eq!(parse_amount("-1,71 €"), Ok(-1.71));
    }

    #[test]
    fn parse_amount_reads_whole_euro_amounts() {
        assert_eq!(parse_amount("-3 €"), Ok(-3.0));
    }

    #[test]
    fn parse_amount_reads_explicit_plus_sign() {
        assert_eq!(parse_amount("+5,50 €"), Ok(5.5));
    }

    #[test]
    fn parse_amount_reads_bare_numbers() {
        // The CSV data file stores amounts without the currency symbol.
        assert_eq!(parse_amount("-1,71"), Ok(-1.71));
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        assert_eq!(
            parse_amount("three fifty"),
            Err(Error::InvalidAmount("three fifty".to_owned()))
        );
    }

    #[test]
    fn format_amount_uses_comma_and_trailing_symbol() {
        assert_eq!(format_amount(-3.5), "-3,50 €");
        assert_eq!(format_amount(-3.0), "-3,00 €");
        assert_eq!(format_amount(0.0), "0,00 €");
    }

    #[test]
    fn amount_round_trips_through_parse_and_format() {
        let canonical = ["-3,50 €", "-1,71 €", "-23,50 €", "-105,78 €"];

        for text in canonical {
            let value = parse_amount(text).unwrap();
            assert_eq!(format_amount(value), text);
        }
    }

    #[test]
    fn format_amount_signed_marks_credits() {
        assert_eq!(format_amount_signed(5.5), "+5,50 €");
        assert_eq!(format_amount_signed(-3.5), "-3,50 €");
        assert_eq!(format_amount_signed(0.0), "0,00 €");
    }

    #[test]
    fn format_amount_rounded_groups_thousands() {
        assert_eq!(format_amount_rounded(12480.0), "12.480 €");
        assert_eq!(format_amount_rounded(980.0), "980 €");
        assert_eq!(format_amount_rounded(1350.4), "1.350 €");
    }

    #[test]
    fn points_earned_is_half_the_amount_spent() {
        assert_eq!(format_points(points_earned(-1.71)), "0,85");
        assert_eq!(format_points(points_earned(-3.0)), "1,50");
        assert_eq!(format_points(points_earned(-12.3)), "6,15");
    }

    #[test]
    fn balance_parts_splits_whole_euros_and_cents() {
        assert_eq!(balance_parts(541.85), ("541".to_owned(), ",85 €".to_owned()));
        assert_eq!(
            balance_parts(3541.85),
            ("3.541".to_owned(), ",85 €".to_owned())
        );
    }
}
