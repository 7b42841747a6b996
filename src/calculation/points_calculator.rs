//! Receipt points calculation.
//!
//! The total points for a receipt are the sum of four independent rules,
//! each reading a disjoint set of receipt fields. Calculation is pure: it
//! never fails, never mutates the receipt and holds no state between calls.

use tracing::debug;

use crate::models::{Receipt, RuleStep};

use super::items::score_items;
use super::purchase_date_time::score_purchase_date_time;
use super::retailer_name::score_retailer_name;
use super::total::score_total;

/// Applies every scoring rule to a receipt.
///
/// Returns one [`RuleStep`] per rule in the order retailer name, total,
/// items, purchase date and time.
pub fn calculate_breakdown(receipt: &Receipt) -> Vec<RuleStep> {
    vec![
        score_retailer_name(&receipt.retailer),
        score_total(&receipt.total),
        score_items(&receipt.items),
        score_purchase_date_time(&receipt.purchase_date, &receipt.purchase_time),
    ]
}

/// Adds up the points recorded in `steps`, saturating at `u64::MAX`.
pub fn sum_step_points(steps: &[RuleStep]) -> u64 {
    steps
        .iter()
        .fold(0u64, |total, step| total.saturating_add(step.points))
}

/// Calculates the points awarded for a receipt.
///
/// Fields that cannot be parsed contribute no points from the rule that
/// reads them; the remaining rules are unaffected.
///
/// # Example
///
/// ```
/// use receipt_processor::calculation::calculate_points;
/// use receipt_processor::models::{Receipt, ReceiptItem};
///
/// let gatorade = || ReceiptItem {
///     short_description: "Gatorade".to_string(),
///     price: "2.25".to_string(),
/// };
/// let receipt = Receipt {
///     retailer: "M&M Corner Market".to_string(),
///     purchase_date: "2022-03-20".to_string(),
///     purchase_time: "14:33".to_string(),
///     total: "9.00".to_string(),
///     items: vec![gatorade(), gatorade(), gatorade(), gatorade()],
/// };
///
/// assert_eq!(calculate_points(&receipt), 109);
/// ```
pub fn calculate_points(receipt: &Receipt) -> u64 {
    let points = sum_step_points(&calculate_breakdown(receipt));
    debug!(retailer = %receipt.retailer, points, "Calculated receipt points");
    points
}
