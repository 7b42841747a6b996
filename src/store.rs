//! Receipt storage.
//!
//! Receipts are stored behind the [`ReceiptStore`] trait so that handlers and
//! tests receive storage as an injected capability instead of reaching for
//! process-wide state. [`InMemoryReceiptStore`] is the only implementation;
//! stored receipts do not survive a restart.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};
use crate::models::Receipt;

/// Identifier assigned to a receipt when it is stored.
pub type ReceiptId = Uuid;

/// Storage abstraction mapping generated identifiers to receipts.
pub trait ReceiptStore: Send + Sync {
    /// Stores a receipt and returns its newly generated identifier.
    fn insert(&self, receipt: Receipt) -> ServiceResult<ReceiptId>;

    /// Looks up a receipt by identifier.
    fn fetch(&self, id: &ReceiptId) -> ServiceResult<Option<Receipt>>;
}

/// A [`ReceiptStore`] backed by a map held in memory.
///
/// # Example
///
/// ```
/// use receipt_processor::models::Receipt;
/// use receipt_processor::store::{InMemoryReceiptStore, ReceiptStore};
///
/// let store = InMemoryReceiptStore::new();
/// let receipt = Receipt {
///     retailer: "Target".to_string(),
///     purchase_date: "2022-01-01".to_string(),
///     purchase_time: "13:01".to_string(),
///     total: "1.25".to_string(),
///     items: vec![],
/// };
///
/// let id = store.insert(receipt.clone()).unwrap();
/// assert_eq!(store.fetch(&id).unwrap(), Some(receipt));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryReceiptStore {
    receipts: RwLock<HashMap<ReceiptId, Receipt>>,
}

impl InMemoryReceiptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored receipts.
    pub fn len(&self) -> ServiceResult<usize> {
        let guard = self.receipts.read().map_err(|_| poisoned())?;
        Ok(guard.len())
    }

    /// Returns true if no receipts have been stored.
    pub fn is_empty(&self) -> ServiceResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn insert(&self, receipt: Receipt) -> ServiceResult<ReceiptId> {
        let mut guard = self.receipts.write().map_err(|_| poisoned())?;

        let mut id = Uuid::new_v4();
        while guard.contains_key(&id) {
            id = Uuid::new_v4();
        }

        guard.insert(id, receipt);
        debug!(receipt_id = %id, stored = guard.len(), "Stored receipt");
        Ok(id)
    }

    fn fetch(&self, id: &ReceiptId) -> ServiceResult<Option<Receipt>> {
        let guard = self.receipts.read().map_err(|_| poisoned())?;
        Ok(guard.get(id).cloned())
    }
}

fn poisoned() -> ServiceError {
    ServiceError::StoreUnavailable {
        message: "receipt store lock poisoned".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn receipt(retailer: &str) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            total: "6.49".to_string(),
            items: vec![],
        }
    }

    #[test]
    fn test_insert_then_fetch_returns_receipt() {
        let store = InMemoryReceiptStore::new();
        let id = store.insert(receipt("Target")).unwrap();

        let fetched = store.fetch(&id).unwrap().unwrap();
        assert_eq!(fetched.retailer, "Target");
    }

    #[test]
    fn test_fetch_unknown_id_returns_none() {
        let store = InMemoryReceiptStore::new();
        assert!(store.fetch(&Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn test_each_insert_gets_a_distinct_id() {
        let store = InMemoryReceiptStore::new();
        let first = store.insert(receipt("Target")).unwrap();
        let second = store.insert(receipt("Target")).unwrap();

        assert_ne!(first, second);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = InMemoryReceiptStore::new();
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_concurrent_inserts_are_all_stored() {
        let store = Arc::new(InMemoryReceiptStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.insert(receipt(&format!("Shop {}", i))).unwrap())
            })
            .collect();

        let ids: Vec<ReceiptId> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(store.len().unwrap(), 8);
        for id in ids {
            assert!(store.fetch(&id).unwrap().is_some());
        }
    }

    #[test]
    fn test_store_usable_as_trait_object() {
        let store: Arc<dyn ReceiptStore> = Arc::new(InMemoryReceiptStore::new());
        let id = store.insert(receipt("Walgreens")).unwrap();
        assert!(store.fetch(&id).unwrap().is_some());
    }
}
