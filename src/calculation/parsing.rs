//! Field parsing for the scoring rules.
//!
//! Receipt fields arrive as text. These helpers turn them into structured
//! values and report failures as [`ServiceError::InvalidField`] so each rule
//! can decide how a malformed field affects its points.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::error::{ServiceError, ServiceResult};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_SHAPE: &str = "9999-99-99";
const TIME_FORMATS: [(&str, &str); 2] = [("99:99", "%H:%M"), ("99:99:99", "%H:%M:%S")];

/// Parses a monetary amount such as `"35.35"`.
///
/// # Example
///
/// ```
/// use receipt_processor::calculation::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("total", "6.49").unwrap(), Decimal::new(649, 2));
/// assert!(parse_amount("total", "six dollars").is_err());
/// ```
pub fn parse_amount(field: &'static str, value: &str) -> ServiceResult<Decimal> {
    Decimal::from_str(value).map_err(|_| ServiceError::InvalidField {
        field,
        value: value.to_string(),
        expected: "a decimal amount",
    })
}

/// Parses a purchase date in `YYYY-MM-DD` form.
///
/// Month and day must be zero-padded, so the text is exactly ten characters
/// long. Dates that do not exist on the calendar (e.g., `2022-02-30`) are
/// rejected.
pub fn parse_purchase_date(value: &str) -> ServiceResult<NaiveDate> {
    let invalid = || ServiceError::InvalidField {
        field: "purchaseDate",
        value: value.to_string(),
        expected: "a YYYY-MM-DD date",
    };

    if !matches_shape(value, DATE_SHAPE) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

/// Parses a 24-hour purchase time in `HH:MM` form.
///
/// Hours and minutes must both be two digits. A trailing seconds component
/// (`HH:MM:SS`) is also accepted.
pub fn parse_purchase_time(value: &str) -> ServiceResult<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find(|(shape, _)| matches_shape(value, shape))
        .and_then(|(_, format)| NaiveTime::parse_from_str(value, format).ok())
        .ok_or_else(|| ServiceError::InvalidField {
            field: "purchaseTime",
            value: value.to_string(),
            expected: "an HH:MM time",
        })
}

/// Checks `value` against a template where `9` stands for any ASCII digit
/// and every other byte must match literally.
fn matches_shape(value: &str, shape: &str) -> bool {
    value.len() == shape.len()
        && value
            .bytes()
            .zip(shape.bytes())
            .all(|(actual, expected)| match expected {
                b'9' => actual.is_ascii_digit(),
                _ => actual == expected,
            })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_amount_keeps_cents() {
        assert_eq!(parse_amount("price", "12.25").unwrap(), Decimal::new(1225, 2));
    }

    #[test]
    fn test_parse_amount_rejects_empty_text() {
        let error = parse_amount("price", "").unwrap_err();
        assert!(matches!(
            error,
            ServiceError::InvalidField { field: "price", .. }
        ));
    }

    #[test]
    fn test_parse_amount_rejects_currency_symbol() {
        assert!(parse_amount("total", "$6.49").is_err());
    }

    #[test]
    fn test_parse_purchase_date_extracts_day() {
        let date = parse_purchase_date("2022-03-20").unwrap();
        assert_eq!(date.year(), 2022);
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 20);
    }

    #[test]
    fn test_parse_purchase_date_rejects_short_text() {
        assert!(parse_purchase_date("2022-01").is_err());
        assert!(parse_purchase_date("").is_err());
    }

    #[test]
    fn test_parse_purchase_date_rejects_unpadded_month_or_day() {
        assert!(parse_purchase_date("2022-1-1").is_err());
        assert!(parse_purchase_date("2022-01-1").is_err());
        assert!(parse_purchase_date("2022-1-01").is_err());
    }

    #[test]
    fn test_parse_purchase_date_rejects_trailing_text() {
        assert!(parse_purchase_date("2022-01-01T").is_err());
        assert!(parse_purchase_date(" 2022-01-01").is_err());
    }

    #[test]
    fn test_parse_purchase_date_rejects_impossible_day() {
        assert!(parse_purchase_date("2022-02-30").is_err());
    }

    #[test]
    fn test_parse_purchase_time_extracts_hour() {
        let time = parse_purchase_time("14:33").unwrap();
        assert_eq!(time.hour(), 14);
        assert_eq!(time.minute(), 33);
    }

    #[test]
    fn test_parse_purchase_time_accepts_seconds() {
        let time = parse_purchase_time("15:59:59").unwrap();
        assert_eq!(time.hour(), 15);
    }

    #[test]
    fn test_parse_purchase_time_rejects_single_digit_hour() {
        assert!(parse_purchase_time("9:05").is_err());
        assert!(parse_purchase_time("14:5").is_err());
        assert!(parse_purchase_time("14:05:1").is_err());
    }

    #[test]
    fn test_parse_purchase_time_rejects_garbage() {
        let error = parse_purchase_time("ab:cd").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Could not parse purchaseTime 'ab:cd' as an HH:MM time"
        );
        assert!(parse_purchase_time("1").is_err());
        assert!(parse_purchase_time("25:00").is_err());
    }
}
