//! Receipt model and related types.
//!
//! This module defines the [`Receipt`] and [`ReceiptItem`] structs that are
//! scored by the points calculator.

use serde::{Deserialize, Serialize};

/// A single purchased line item on a receipt.
///
/// The price is kept as submitted so that an unparseable price only
/// affects the item it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItem {
    /// The short product description printed on the receipt.
    pub short_description: String,
    /// The price paid for the item (e.g., "6.49").
    pub price: String,
}

/// A purchase record submitted for points calculation.
///
/// Numeric, date and time fields hold the submitted text. Parsing happens
/// inside each scoring rule, which treats a malformed field as worth zero
/// points rather than rejecting the whole receipt.
///
/// # Example
///
/// ```
/// use receipt_processor::models::{Receipt, ReceiptItem};
///
/// let receipt = Receipt {
///     retailer: "Target".to_string(),
///     purchase_date: "2022-01-01".to_string(),
///     purchase_time: "13:01".to_string(),
///     total: "6.49".to_string(),
///     items: vec![ReceiptItem {
///         short_description: "Mountain Dew 12PK".to_string(),
///         price: "6.49".to_string(),
///     }],
/// };
/// assert_eq!(receipt.item_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// The merchant name.
    pub retailer: String,
    /// The purchase date in `YYYY-MM-DD` form.
    pub purchase_date: String,
    /// The purchase time in 24-hour `HH:MM` form.
    pub purchase_time: String,
    /// The receipt total (e.g., "35.35").
    pub total: String,
    /// The purchased items, in printed order.
    pub items: Vec<ReceiptItem>,
}

impl Receipt {
    /// Returns the number of line items on the receipt.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
