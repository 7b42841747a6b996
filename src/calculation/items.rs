//! Receipt item points.
//!
//! Items earn points in two independent ways:
//!
//! - An item whose trimmed description length is a positive multiple of 3
//!   earns its price x 0.2, rounded up to the nearest whole point.
//! - The receipt earns 5 points for every two items, regardless of their
//!   descriptions.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use crate::error::ServiceResult;
use crate::models::{PointsRule, ReceiptItem, RuleStep};

use super::parsing::parse_amount;

/// Points awarded for every complete pair of items.
pub const ITEM_PAIR_POINTS: u64 = 5;

/// Trimmed description lengths must be a multiple of this to earn price points.
pub const DESCRIPTION_LENGTH_MULTIPLE: usize = 3;

/// Returns the multiplier applied to qualifying item prices.
///
/// The multiplier is 0.2.
pub fn item_price_multiplier() -> Decimal {
    Decimal::new(2, 1)
}

/// Returns the pair points for a receipt with `item_count` items.
///
/// # Example
///
/// ```
/// use receipt_processor::calculation::item_pair_points;
///
/// assert_eq!(item_pair_points(5), 10);
/// assert_eq!(item_pair_points(1), 0);
/// ```
pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_POINTS
}

/// Returns the description points for a single item.
///
/// Length is measured after trimming leading and trailing whitespace. Items
/// whose description does not qualify earn nothing and their price is never
/// parsed. Qualifying items with a negative price earn nothing.
///
/// # Errors
///
/// Returns [`crate::error::ServiceError::InvalidField`] if the description
/// qualifies but the price cannot be parsed.
pub fn item_description_points(item: &ReceiptItem) -> ServiceResult<u64> {
    let trimmed_length = item.short_description.trim().len();
    if trimmed_length == 0 || trimmed_length % DESCRIPTION_LENGTH_MULTIPLE != 0 {
        return Ok(0);
    }

    let price = parse_amount("price", &item.price)?;
    let points = price
        .checked_mul(item_price_multiplier())
        .and_then(|scaled| scaled.ceil().to_u64())
        .unwrap_or(0);

    Ok(points)
}

/// Scores the receipt's items.
///
/// Items whose price cannot be parsed are skipped; the remaining items and
/// the pair points are still awarded. The total saturates at `u64::MAX`.
///
/// # Example
///
/// ```
/// use receipt_processor::calculation::score_items;
/// use receipt_processor::models::ReceiptItem;
///
/// let items = vec![
///     ReceiptItem {
///         short_description: "Emils Cheese Pizza".to_string(),
///         price: "12.25".to_string(),
///     },
///     ReceiptItem {
///         short_description: "Knorr Creamy Chicken".to_string(),
///         price: "1.26".to_string(),
///     },
/// ];
///
/// // 3 for the pizza, 5 for the pair
/// assert_eq!(score_items(&items).points, 8);
/// ```
pub fn score_items(items: &[ReceiptItem]) -> RuleStep {
    let mut description_points: u64 = 0;
    let mut qualifying_items = 0;
    let mut skipped_items = 0;

    for item in items {
        match item_description_points(item) {
            Ok(points) => {
                if points > 0 {
                    qualifying_items += 1;
                }
                description_points = description_points.saturating_add(points);
            }
            Err(err) => {
                skipped_items += 1;
                debug!(
                    description = %item.short_description,
                    error = %err,
                    "Skipping item with unparseable price"
                );
            }
        }
    }

    let pair_points = item_pair_points(items.len());
    let points = description_points.saturating_add(pair_points);

    debug!(
        item_count = items.len(),
        description_points,
        pair_points,
        skipped_items,
        "Scored receipt items"
    );

    let mut reasoning = format!(
        "{} pairs of items x {} = {} points; {} items with qualifying descriptions = {} points",
        items.len() / 2,
        ITEM_PAIR_POINTS,
        pair_points,
        qualifying_items,
        description_points
    );
    if skipped_items > 0 {
        reasoning.push_str(&format!(
            "; {} items skipped for unparseable prices",
            skipped_items
        ));
    }

    RuleStep {
        rule: PointsRule::Items,
        points,
        input: serde_json::json!({ "items": items }),
        reasoning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(description: &str, price: &str) -> ReceiptItem {
        ReceiptItem {
            short_description: description.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn test_length_multiple_of_three_earns_rounded_up_price_points() {
        // 18 characters, 12.25 * 0.2 = 2.45 -> 3
        let points = item_description_points(&item("Emils Cheese Pizza", "12.25")).unwrap();
        assert_eq!(points, 3);
    }

    #[test]
    fn test_other_lengths_earn_nothing() {
        // 20 characters
        let points = item_description_points(&item("Knorr Creamy Chicken", "1000.00")).unwrap();
        assert_eq!(points, 0);
    }

    #[test]
    fn test_description_is_trimmed_before_measuring() {
        // "Klarbrunn 12-PK 12 FL OZ" is 24 characters; 12.00 * 0.2 = 2.4 -> 3
        let points =
            item_description_points(&item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00")).unwrap();
        assert_eq!(points, 3);
    }

    #[test]
    fn test_exact_product_is_not_rounded_up() {
        // 12 characters, 10.00 * 0.2 = 2.0
        let points = item_description_points(&item("Dasani Water", "10.00")).unwrap();
        assert_eq!(points, 2);
    }

    #[test]
    fn test_small_price_rounds_up_to_one_point() {
        let points = item_description_points(&item("Gum", "0.01")).unwrap();
        assert_eq!(points, 1);
    }

    #[test]
    fn test_blank_description_earns_nothing() {
        let points = item_description_points(&item("   ", "12.00")).unwrap();
        assert_eq!(points, 0);
    }

    #[test]
    fn test_negative_price_earns_nothing() {
        let points = item_description_points(&item("Refund Pizza", "-25.00")).unwrap();
        assert_eq!(points, 0);
    }

    #[test]
    fn test_unparseable_price_is_an_error_for_the_item() {
        let result = item_description_points(&item("Emils Cheese Pizza", "free"));
        assert!(result.is_err());
    }

    #[test]
    fn test_unparseable_price_on_non_qualifying_item_is_ignored() {
        let points = item_description_points(&item("Knorr Creamy Chicken", "free")).unwrap();
        assert_eq!(points, 0);
    }

    #[test]
    fn test_pair_points() {
        assert_eq!(item_pair_points(0), 0);
        assert_eq!(item_pair_points(1), 0);
        assert_eq!(item_pair_points(2), 5);
        assert_eq!(item_pair_points(4), 10);
        assert_eq!(item_pair_points(5), 10);
    }

    #[test]
    fn test_five_items_earn_pair_points_independent_of_descriptions() {
        let items: Vec<ReceiptItem> = (0..5).map(|_| item("Gatorade", "2.25")).collect();
        let step = score_items(&items);
        assert_eq!(step.points, 10);
        assert_eq!(step.rule, PointsRule::Items);
    }

    #[test]
    fn test_bad_price_skips_only_that_item() {
        let items = vec![
            item("Emils Cheese Pizza", "not-a-price"),
            item("Emils Cheese Pizza", "12.25"),
        ];
        let step = score_items(&items);

        // 3 for the parseable pizza, 5 for the pair
        assert_eq!(step.points, 8);
        assert!(step.reasoning.contains("1 items skipped"));
    }

    #[test]
    fn test_no_items_scores_zero() {
        let step = score_items(&[]);
        assert_eq!(step.points, 0);
        assert!(!step.reasoning.contains("skipped"));
    }

    #[test]
    fn test_huge_prices_saturate_instead_of_overflowing() {
        let items = vec![
            item("Pie", "60000000000000000000.00"),
            item("Pie", "60000000000000000000.00"),
        ];
        let step = score_items(&items);
        assert_eq!(step.points, u64::MAX);
    }

    #[test]
    fn test_item_price_multiplier_is_exactly_0_2() {
        assert_eq!(item_price_multiplier(), Decimal::new(20, 2));
    }
}
