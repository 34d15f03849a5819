use dashmap::DashMap;
use std::fmt;
use uuid::Uuid;

use crate::domain::scoring::Points;
use crate::models::Receipt;

/// Opaque identifier handed out for each processed receipt
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Generate a fresh random (v4) identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ReceiptId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for ReceiptId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated receipt together with the points it was awarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReceipt {
    pub receipt: Receipt,
    pub points: Points,
}

/// Storage for processed receipts, keyed by identifier.
///
/// Implementations must be safe to share across request handlers: a `get`
/// never observes a partially written entry.
pub trait ReceiptStore: Send + Sync {
    fn put(&self, id: ReceiptId, stored: StoredReceipt);

    fn get(&self, id: &ReceiptId) -> Option<StoredReceipt>;
}

/// Process-local store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryReceiptStore {
    receipts: DashMap<ReceiptId, StoredReceipt>,
}

impl InMemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.receipts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty()
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn put(&self, id: ReceiptId, stored: StoredReceipt) {
        self.receipts.insert(id, stored);
    }

    fn get(&self, id: &ReceiptId) -> Option<StoredReceipt> {
        self.receipts.get(id).map(|entry| entry.value().clone())
    }
}
