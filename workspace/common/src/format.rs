//! Display formatting for prediction values.

use chrono::{DateTime, NaiveDate, TimeZone};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso};
use std::fmt::Display;

/// Shown in place of an amount that cannot be represented.
const NOT_AVAILABLE: &str = "N/A";

/// Format an amount as US dollars, e.g. `$24,567.89`.
pub fn format_currency(amount: f64) -> String {
    let Some(mut decimal) = Decimal::from_f64(amount) else {
        return NOT_AVAILABLE.to_string();
    };
    decimal = decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // Sub-cent negatives round to zero and are shown unsigned
    if decimal.is_zero() {
        decimal.set_sign_positive(true);
    }
    decimal.rescale(2);
    Money::from_decimal(decimal, iso::USD).to_string()
}

/// Format a `low - high` currency range.
pub fn format_currency_range(low: f64, high: f64) -> String {
    format!("{} - {}", format_currency(low), format_currency(high))
}

/// Long-form calendar date, e.g. `March 15, 2024`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// Date-time in the given zone, e.g. `Mar 15, 2024 10:30:00`.
pub fn format_timestamp<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.format("%b %d, %Y %H:%M:%S").to_string()
}

/// Display label for a model identifier: separators become spaces and the
/// result is upper-cased, e.g. `weighted_ensemble` -> `WEIGHTED ENSEMBLE`.
pub fn model_label(model: &str) -> String {
    model
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(24567.89), "$24,567.89");
        assert_eq!(format_currency(20000.0), "$20,000.00");
        assert_eq!(format_currency(0.5), "$0.50");
        assert_eq!(format_currency(1234567.0), "$1,234,567.00");
    }

    #[test]
    fn test_format_currency_negative_sub_cent_is_unsigned_zero() {
        assert_eq!(format_currency(-0.004), "$0.00");
        assert_eq!(format_currency(-0.0), "$0.00");
    }

    #[test]
    fn test_format_currency_not_finite() {
        assert_eq!(format_currency(f64::NAN), "N/A");
        assert_eq!(format_currency(f64::INFINITY), "N/A");
    }

    #[test]
    fn test_format_currency_range() {
        assert_eq!(format_currency_range(20000.0, 29000.0), "$20,000.00 - $29,000.00");
    }

    #[test]
    fn test_format_long_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_long_date(date), "March 15, 2024");
        let date = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap();
        assert_eq!(format_long_date(date), "November 01, 2024");
    }

    #[test]
    fn test_format_timestamp_in_utc() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "Mar 15, 2024 10:30:00");
    }

    #[test]
    fn test_model_label() {
        assert_eq!(model_label("weighted_ensemble"), "WEIGHTED ENSEMBLE");
        assert_eq!(model_label("fallback_algorithm"), "FALLBACK ALGORITHM");
        assert_eq!(model_label("gradient_boosting_v2"), "GRADIENT BOOSTING V2");
        assert_eq!(model_label("xgboost"), "XGBOOST");
    }
}
