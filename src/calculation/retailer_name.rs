//! Retailer name points.
//!
//! One point is awarded for every alphanumeric character in the retailer
//! name. Whitespace and punctuation are ignored.

use tracing::debug;
use unicode_general_category::{GeneralCategory, get_general_category};

use crate::models::{PointsRule, RuleStep};

/// Counts the alphanumeric characters in a retailer name.
///
/// Letters from any script (general category `L*`) and decimal digits
/// (`Nd`) each count once. Other numerals such as `½` or `Ⅻ` and combining
/// marks do not count.
///
/// # Example
///
/// ```
/// use receipt_processor::calculation::count_alphanumeric;
///
/// assert_eq!(count_alphanumeric("M&M Corner Market"), 14);
/// assert_eq!(count_alphanumeric("  - & -  "), 0);
/// ```
pub fn count_alphanumeric(retailer: &str) -> u64 {
    retailer.chars().filter(|&c| is_letter_or_digit(c)).count() as u64
}

fn is_letter_or_digit(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

/// Scores the retailer name.
///
/// # Example
///
/// ```
/// use receipt_processor::calculation::score_retailer_name;
///
/// let step = score_retailer_name("Target");
/// assert_eq!(step.points, 6);
/// ```
pub fn score_retailer_name(retailer: &str) -> RuleStep {
    let points = count_alphanumeric(retailer);
    debug!(retailer, points, "Scored retailer name");

    RuleStep {
        rule: PointsRule::RetailerName,
        points,
        input: serde_json::json!({ "retailer": retailer }),
        reasoning: format!(
            "{} alphanumeric characters in '{}' x 1 point = {} points",
            points, retailer, points
        ),
    }
}
