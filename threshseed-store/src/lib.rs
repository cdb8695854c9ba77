//! # threshseed-store
//!
//! Document store adapters for device threshold seeding.
//!
//! This crate provides the [`DocumentStore`] seam the seeder writes through,
//! plus ready-to-use backends:
//!
//! - **Firestore** (`firestore` feature) - Upserts documents via the Cloud
//!   Firestore REST API, using a field-level update mask so existing fields
//!   on a document survive re-seeding
//! - **Memory** (always available) - An in-memory store for tests and
//!   offline runs
//!
//! ## Quick Start (Firestore)
//!
//! ```rust,no_run
//! use threshseed_store::{DocumentStore, FirestoreStore};
//! use threshseed_types::DeviceRecord;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = FirestoreStore::builder()
//!         .project("my-gcp-project")
//!         .access_token("ya29...")
//!         .build();
//!
//!     store.upsert_threshold(&DeviceRecord::new("device1", 17)).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod memory;

#[cfg(feature = "firestore")]
pub mod firestore;

pub use error::StoreError;
pub use memory::MemoryStore;

#[cfg(feature = "firestore")]
pub use firestore::{FirestoreStore, FirestoreStoreBuilder};

use async_trait::async_trait;
use threshseed_types::DeviceRecord;

/// Default collection the seeder writes to.
pub const DEFAULT_COLLECTION: &str = "Devices";

/// A key-addressed document store that can upsert threshold records.
///
/// Implementations must provide field-level upsert semantics: if a document
/// with the record's `device_id` already exists, only its `threshold` field
/// is overwritten and any other fields are left untouched; otherwise the
/// document is created.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Upsert one record, keyed by its `device_id`.
    async fn upsert_threshold(&self, record: &DeviceRecord) -> Result<(), StoreError>;
}
