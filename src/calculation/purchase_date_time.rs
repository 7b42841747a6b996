//! Purchase date and time points.
//!
//! This module awards 6 points when the purchase day is odd and 10 points
//! when the purchase time falls between 2:00pm (inclusive) and 4:00pm
//! (exclusive). The date and time are parsed independently, so a malformed
//! time does not cost the receipt its odd-day points and vice versa.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use tracing::debug;

use crate::models::{PointsRule, RuleStep};

use super::parsing::{parse_purchase_date, parse_purchase_time};

/// Points awarded when the purchase day of month is odd.
pub const ODD_DAY_POINTS: u64 = 6;

/// Points awarded for purchases made in the afternoon window.
pub const AFTERNOON_POINTS: u64 = 10;

/// First hour (inclusive) of the afternoon window.
pub const AFTERNOON_START_HOUR: u32 = 14;

/// Hour at which the afternoon window closes (exclusive).
pub const AFTERNOON_END_HOUR: u32 = 16;

/// Returns the odd-day points for a purchase date.
pub fn odd_day_points(date: NaiveDate) -> u64 {
    if date.day() % 2 == 1 { ODD_DAY_POINTS } else { 0 }
}

/// Returns the afternoon points for a purchase time.
///
/// # Example
///
/// ```
/// use receipt_processor::calculation::afternoon_points;
/// use chrono::NaiveTime;
///
/// let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// assert_eq!(afternoon_points(at(14, 0)), 10);
/// assert_eq!(afternoon_points(at(15, 59)), 10);
/// assert_eq!(afternoon_points(at(16, 0)), 0);
/// assert_eq!(afternoon_points(at(13, 59)), 0);
/// ```
pub fn afternoon_points(time: NaiveTime) -> u64 {
    if (AFTERNOON_START_HOUR..AFTERNOON_END_HOUR).contains(&time.hour()) {
        AFTERNOON_POINTS
    } else {
        0
    }
}

/// Scores the purchase date and time.
///
/// # Example
///
/// ```
/// use receipt_processor::calculation::score_purchase_date_time;
///
/// assert_eq!(score_purchase_date_time("2022-01-01", "14:33").points, 16);
/// assert_eq!(score_purchase_date_time("2022-01-02", "13:59").points, 0);
/// assert_eq!(score_purchase_date_time("2022-01", "14:33").points, 10);
/// ```
pub fn score_purchase_date_time(purchase_date: &str, purchase_time: &str) -> RuleStep {
    let (day_points, day_reason) = match parse_purchase_date(purchase_date) {
        Ok(date) => {
            let points = odd_day_points(date);
            let parity = if points > 0 { "odd" } else { "even" };
            (points, format!("day {} is {} (+{})", date.day(), parity, points))
        }
        Err(err) => {
            debug!(purchase_date, error = %err, "Purchase date not parseable");
            (0, format!("{} (+0)", err))
        }
    };

    let (time_points, time_reason) = match parse_purchase_time(purchase_time) {
        Ok(time) => {
            let points = afternoon_points(time);
            let window = if points > 0 { "inside" } else { "outside" };
            (
                points,
                format!(
                    "{} is {} {}:00-{}:00 (+{})",
                    time.format("%H:%M"),
                    window,
                    AFTERNOON_START_HOUR,
                    AFTERNOON_END_HOUR,
                    points
                ),
            )
        }
        Err(err) => {
            debug!(purchase_time, error = %err, "Purchase time not parseable");
            (0, format!("{} (+0)", err))
        }
    };

    let points = day_points + time_points;
    debug!(day_points, time_points, points, "Scored purchase date and time");

    RuleStep {
        rule: PointsRule::PurchaseDateTime,
        points,
        input: serde_json::json!({
            "purchase_date": purchase_date,
            "purchase_time": purchase_time
        }),
        reasoning: format!("{}; {} = {} points", day_reason, time_reason, points),
    }
}
