//! Core data models for the receipt processor.
//!
//! This module contains the receipt types that are submitted for scoring
//! and the breakdown types that explain a receipt's points.

mod points_breakdown;
mod receipt;

pub use points_breakdown::{PointsBreakdown, PointsRule, RuleStep};
pub use receipt::{Receipt, ReceiptItem};
