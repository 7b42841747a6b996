//! Request types for the receipt processor API.
//!
//! This module defines the JSON request structures for the
//! `/receipts/process` endpoint.

use serde::{Deserialize, Serialize};

use crate::models::{Receipt, ReceiptItem};

/// Request body for the `/receipts/process` endpoint.
///
/// Every field is required. Field contents are not validated here; the
/// points calculator decides what malformed values are worth.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessReceiptRequest {
    /// The merchant name.
    pub retailer: String,
    /// The purchase date (`YYYY-MM-DD`).
    pub purchase_date: String,
    /// The purchase time (`HH:MM`).
    pub purchase_time: String,
    /// The purchased items.
    pub items: Vec<ReceiptItemRequest>,
    /// The receipt total.
    pub total: String,
}

/// Item information in a process request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItemRequest {
    /// The short product description.
    pub short_description: String,
    /// The item price.
    pub price: String,
}

impl From<ProcessReceiptRequest> for Receipt {
    fn from(req: ProcessReceiptRequest) -> Self {
        Receipt {
            retailer: req.retailer,
            purchase_date: req.purchase_date,
            purchase_time: req.purchase_time,
            total: req.total,
            items: req.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ReceiptItemRequest> for ReceiptItem {
    fn from(req: ReceiptItemRequest) -> Self {
        ReceiptItem {
            short_description: req.short_description,
            price: req.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_process_request() {
        let json = r#"{
            "retailer": "Walgreens",
            "purchaseDate": "2022-01-02",
            "purchaseTime": "08:13",
            "total": "2.65",
            "items": [
                {"shortDescription": "Pepsi - 12-oz", "price": "1.25"},
                {"shortDescription": "Dasani", "price": "1.40"}
            ]
        }"#;

        let request: ProcessReceiptRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.retailer, "Walgreens");
        assert_eq!(request.items.len(), 2);
        assert_eq!(request.items[1].short_description, "Dasani");
    }

    #[test]
    fn test_missing_total_is_rejected() {
        let json = r#"{
            "retailer": "Walgreens",
            "purchaseDate": "2022-01-02",
            "purchaseTime": "08:13",
            "items": []
        }"#;

        let error = serde_json::from_str::<ProcessReceiptRequest>(json).unwrap_err();
        assert!(error.to_string().contains("missing field `total`"));
    }

    #[test]
    fn test_numeric_total_is_rejected() {
        let json = r#"{
            "retailer": "Walgreens",
            "purchaseDate": "2022-01-02",
            "purchaseTime": "08:13",
            "items": [],
            "total": 2.65
        }"#;

        assert!(serde_json::from_str::<ProcessReceiptRequest>(json).is_err());
    }

    #[test]
    fn test_receipt_conversion_keeps_item_order() {
        let request = ProcessReceiptRequest {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            total: "7.75".to_string(),
            items: vec![
                ReceiptItemRequest {
                    short_description: "First".to_string(),
                    price: "1.00".to_string(),
                },
                ReceiptItemRequest {
                    short_description: "Second".to_string(),
                    price: "6.75".to_string(),
                },
            ],
        };

        let receipt: Receipt = request.into();
        assert_eq!(receipt.total, "7.75");
        assert_eq!(receipt.items[0].short_description, "First");
        assert_eq!(receipt.items[1].price, "6.75");
    }
}
