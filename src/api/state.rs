//! Application state for the receipt processor API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::store::{InMemoryReceiptStore, ReceiptStore};

/// Shared application state.
///
/// Holds the receipt store the handlers read from and write to. The store is
/// injected so tests can supply their own instance.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ReceiptStore>,
}

impl AppState {
    /// Creates a new application state around the given store.
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        Self { store }
    }

    /// Creates application state backed by an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryReceiptStore::new()))
    }

    /// Returns the receipt store.
    pub fn store(&self) -> &dyn ReceiptStore {
        self.store.as_ref()
    }
}
