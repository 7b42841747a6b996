//! Receipt total points.
//!
//! This module awards bonuses for round-dollar totals and for totals that
//! are a multiple of $0.25. Both bonuses are independent and may both apply.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{PointsRule, RuleStep};

use super::parsing::parse_amount;

/// Points awarded when the total has no cents.
pub const ROUND_DOLLAR_POINTS: u64 = 50;

/// Points awarded when the total is a multiple of $0.25.
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;

/// Returns true if the amount equals its own integer truncation.
pub fn is_round_dollar(amount: Decimal) -> bool {
    amount.fract().is_zero()
}

/// Returns true if the amount, in whole cents, is divisible by 25.
///
/// Fractions of a cent are truncated before the check. Amounts too large to
/// express in cents are never quarter multiples.
pub fn is_quarter_multiple(amount: Decimal) -> bool {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|cents| (cents.trunc() % Decimal::from(25)).is_zero())
        .unwrap_or(false)
}

/// Scores the receipt total.
///
/// A total that fails to parse contributes no points from either check.
///
/// # Example
///
/// ```
/// use receipt_processor::calculation::score_total;
///
/// assert_eq!(score_total("35.00").points, 75);
/// assert_eq!(score_total("35.25").points, 25);
/// assert_eq!(score_total("35.35").points, 0);
/// assert_eq!(score_total("n/a").points, 0);
/// ```
pub fn score_total(total: &str) -> RuleStep {
    let input = serde_json::json!({ "total": total });

    let amount = match parse_amount("total", total) {
        Ok(amount) => amount,
        Err(err) => {
            debug!(total, error = %err, "Total not parseable, awarding no total points");
            return RuleStep {
                rule: PointsRule::Total,
                points: 0,
                input,
                reasoning: format!("{}; no total points awarded", err),
            };
        }
    };

    let round_dollar = is_round_dollar(amount);
    let quarter_multiple = is_quarter_multiple(amount);

    let mut points = 0;
    let mut reasons = Vec::new();
    if round_dollar {
        points += ROUND_DOLLAR_POINTS;
        reasons.push(format!("round dollar amount (+{})", ROUND_DOLLAR_POINTS));
    }
    if quarter_multiple {
        points += QUARTER_MULTIPLE_POINTS;
        reasons.push(format!("multiple of 0.25 (+{})", QUARTER_MULTIPLE_POINTS));
    }

    debug!(total, round_dollar, quarter_multiple, points, "Scored receipt total");

    let reasoning = if reasons.is_empty() {
        format!("${} is neither a round dollar amount nor a multiple of 0.25", total)
    } else {
        format!("${}: {} = {} points", total, reasons.join(", "), points)
    };

    RuleStep {
        rule: PointsRule::Total,
        points,
        input,
        reasoning,
    }
}
