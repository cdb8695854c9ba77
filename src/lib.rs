//! # threshseed
//!
//! One-shot seeding of the `Devices` collection with randomized
//! temperature-alert thresholds.
//!
//! The library surface is a single [`Seeder`] over the [`DocumentStore`]
//! seam from `threshseed-store`; the binary wires it to Firestore and a
//! thread-local rng.
//!
//! ## Quick Start
//!
//! ```rust
//! use threshseed::{MemoryStore, Seeder};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), threshseed::StoreError> {
//! let store = MemoryStore::new();
//! let written = Seeder::new(&store).run(&mut rand::rng(), 10).await?;
//!
//! assert_eq!(written, 10);
//! # Ok(())
//! # }
//! ```

pub mod seeder;

pub use seeder::Seeder;

// Re-export the store seam and core types for convenience
pub use threshseed_store::{DocumentStore, MemoryStore, StoreError};
pub use threshseed_types::{device_id, DeviceRecord, ThresholdRange};

#[cfg(feature = "firestore")]
pub use threshseed_store::FirestoreStore;
