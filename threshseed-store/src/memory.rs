//! In-memory document store for tests and offline runs.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{Map, Value};

use threshseed_types::DeviceRecord;

use crate::{DocumentStore, StoreError};

/// An in-memory document store.
///
/// Documents are JSON objects keyed by device id. Upserts follow the same
/// field-level semantics as the Firestore adapter: only the `threshold`
/// field is written, any other fields on an existing document are kept.
///
/// # Example
///
/// ```rust
/// use threshseed_store::{DocumentStore, MemoryStore};
/// use threshseed_types::DeviceRecord;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let store = MemoryStore::new();
/// store.upsert_threshold(&DeviceRecord::new("device1", 16)).await.unwrap();
///
/// assert_eq!(store.threshold_of("device1"), Some(16));
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<BTreeMap<String, Map<String, Value>>>,
    write_log: Mutex<Vec<String>>,
    fail_on: Mutex<Option<String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make any upsert for `device_id` fail with a connection error.
    ///
    /// Used in tests to exercise mid-run abort behavior.
    pub fn fail_on(&self, device_id: impl Into<String>) {
        *self.fail_on.lock() = Some(device_id.into());
    }

    /// Insert a full document directly, bypassing upsert semantics.
    ///
    /// Lets tests pre-populate documents carrying fields other than
    /// `threshold`.
    pub fn insert_document(&self, device_id: impl Into<String>, fields: Map<String, Value>) {
        self.documents.lock().insert(device_id.into(), fields);
    }

    /// Threshold currently stored for `device_id`, if any.
    pub fn threshold_of(&self, device_id: &str) -> Option<i64> {
        self.documents
            .lock()
            .get(device_id)
            .and_then(|doc| doc.get("threshold"))
            .and_then(Value::as_i64)
    }

    /// Full document for `device_id`, if any.
    pub fn document(&self, device_id: &str) -> Option<Map<String, Value>> {
        self.documents.lock().get(device_id).cloned()
    }

    /// Number of documents in the store.
    pub fn len(&self) -> usize {
        self.documents.lock().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.lock().is_empty()
    }

    /// Device ids in the order their writes arrived, including overwrites.
    pub fn write_log(&self) -> Vec<String> {
        self.write_log.lock().clone()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn upsert_threshold(&self, record: &DeviceRecord) -> Result<(), StoreError> {
        if self.fail_on.lock().as_deref() == Some(record.device_id.as_str()) {
            return Err(StoreError::Connection(format!(
                "injected failure for {}",
                record.device_id
            )));
        }

        self.documents
            .lock()
            .entry(record.device_id.clone())
            .or_default()
            .insert("threshold".to_string(), Value::from(record.threshold));
        self.write_log.lock().push(record.device_id.clone());

        Ok(())
    }
}
