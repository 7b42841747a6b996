//! Points breakdown models for the receipt processor.
//!
//! This module contains the [`PointsBreakdown`] type and the per-rule
//! [`RuleStep`] entries that explain how a receipt's points were awarded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies one of the fixed scoring rules.
///
/// # Example
///
/// ```
/// use receipt_processor::models::PointsRule;
///
/// assert_eq!(PointsRule::RetailerName.rule_id(), "retailer_name");
/// assert_eq!(PointsRule::RetailerName.to_string(), "Retailer Name");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointsRule {
    /// One point per alphanumeric character in the retailer name.
    RetailerName,
    /// Round-dollar and quarter-multiple bonuses on the receipt total.
    Total,
    /// Description-length bonuses and item pair points.
    Items,
    /// Odd purchase day and afternoon purchase time bonuses.
    PurchaseDateTime,
}

impl PointsRule {
    /// Returns the stable identifier used in serialized breakdowns.
    pub fn rule_id(&self) -> &'static str {
        match self {
            PointsRule::RetailerName => "retailer_name",
            PointsRule::Total => "total",
            PointsRule::Items => "items",
            PointsRule::PurchaseDateTime => "purchase_date_time",
        }
    }
}

impl std::fmt::Display for PointsRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointsRule::RetailerName => write!(f, "Retailer Name"),
            PointsRule::Total => write!(f, "Receipt Total"),
            PointsRule::Items => write!(f, "Receipt Items"),
            PointsRule::PurchaseDateTime => write!(f, "Purchase Date and Time"),
        }
    }
}

/// A single rule's contribution to a receipt's points.
///
/// Each step captures the input the rule looked at, the points it awarded
/// and a human-readable explanation of the decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleStep {
    /// The rule that produced this step.
    pub rule: PointsRule,
    /// The points awarded by the rule.
    pub points: u64,
    /// The receipt fields the rule read.
    pub input: serde_json::Value,
    /// Human-readable explanation of the points awarded.
    pub reasoning: String,
}

/// The complete points calculation for a stored receipt.
///
/// # Example
///
/// ```
/// use receipt_processor::models::PointsBreakdown;
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let breakdown = PointsBreakdown {
///     receipt_id: Uuid::new_v4(),
///     calculated_at: Utc::now(),
///     points: 0,
///     steps: vec![],
/// };
/// assert_eq!(breakdown.steps_total(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    /// The identifier of the scored receipt.
    pub receipt_id: Uuid,
    /// When the breakdown was produced.
    pub calculated_at: DateTime<Utc>,
    /// The total points awarded.
    pub points: u64,
    /// One step per scoring rule, in evaluation order.
    pub steps: Vec<RuleStep>,
}

impl PointsBreakdown {
    /// Returns the sum of the points recorded in each step, saturating at
    /// `u64::MAX`.
    pub fn steps_total(&self) -> u64 {
        self.steps
            .iter()
            .fold(0u64, |total, step| total.saturating_add(step.points))
    }
}
