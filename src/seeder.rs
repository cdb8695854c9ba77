//! Seeder - the sequential seeding pass over the device range.

use rand::Rng;
use tracing::debug;

use threshseed_store::{DocumentStore, StoreError};
use threshseed_types::{device_id, DeviceRecord, ThresholdRange};

/// Seeds a document store with randomized per-device thresholds.
///
/// The seeder is a single linear pass: for each device index it formats the
/// id, samples a threshold from its range, and awaits the store upsert
/// before moving on. Any store error aborts the run immediately; documents
/// written before the failure stay persisted.
///
/// Both the store and the random source are injected, so tests can run
/// against a [`MemoryStore`](threshseed_store::MemoryStore) with a seeded
/// [`StdRng`](rand::rngs::StdRng).
///
/// # Example
///
/// ```rust
/// use threshseed::Seeder;
/// use threshseed_store::MemoryStore;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), threshseed_store::StoreError> {
/// let store = MemoryStore::new();
/// let written = Seeder::new(&store).run(&mut rand::rng(), 3).await?;
///
/// assert_eq!(written, 3);
/// assert!(store.threshold_of("device1").is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Seeder<'a, S> {
    store: &'a S,
    range: ThresholdRange,
}

impl<'a, S: DocumentStore> Seeder<'a, S> {
    /// Create a seeder over `store` with the default [15, 20] range.
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            range: ThresholdRange::DEFAULT,
        }
    }

    /// Override the threshold sampling range.
    pub fn with_range(mut self, range: ThresholdRange) -> Self {
        self.range = range;
        self
    }

    /// Seed `count` devices, returning the number of documents written.
    ///
    /// Devices are written strictly in order, `device1` through
    /// `device{count}`; the next write does not start until the previous one
    /// completed. `count = 0` writes nothing and succeeds.
    pub async fn run<R: Rng>(&self, rng: &mut R, count: u64) -> Result<u64, StoreError> {
        for i in 0..count {
            let record = DeviceRecord::new(
                device_id(i + 1),
                rng.random_range(self.range.min..=self.range.max),
            );

            self.store.upsert_threshold(&record).await?;

            debug!(device_id = %record.device_id, threshold = record.threshold, "device seeded");
            println!(
                "Loaded {} (threshold {})",
                record.device_id, record.threshold
            );
        }

        Ok(count)
    }
}
