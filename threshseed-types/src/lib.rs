//! # threshseed-types
//!
//! Core types for device threshold seeding. This crate defines the record
//! shape written to the `Devices` collection and the identifier and range
//! conventions shared by the store adapters and the seeder.
//!
//! ## Design Goals
//!
//! - **Zero required dependencies**: Core types work without any serialization framework
//! - **Optional serialization**: Enable the `serde` feature when wire formats are needed
//! - **Store agnostic**: Nothing here knows about Firestore or any other backend
//!
//! ## Example
//!
//! ```rust
//! use threshseed_types::{device_id, DeviceRecord, ThresholdRange};
//!
//! let range = ThresholdRange::DEFAULT;
//! let record = DeviceRecord::new(device_id(1), 17);
//!
//! assert_eq!(record.device_id, "device1");
//! assert!(range.contains(record.threshold));
//! ```

mod range;
mod record;

pub use range::*;
pub use record::*;

/// Prefix for generated device identifiers.
pub const DEVICE_ID_PREFIX: &str = "device";

/// Format the identifier for the `n`-th device.
///
/// Identifiers are 1-based: the first seeded device is `device1`.
///
/// ```rust
/// use threshseed_types::device_id;
///
/// assert_eq!(device_id(1), "device1");
/// assert_eq!(device_id(42), "device42");
/// ```
pub fn device_id(n: u64) -> String {
    format!("{DEVICE_ID_PREFIX}{n}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_id_is_one_based() {
        assert_eq!(device_id(1), "device1");
        assert_eq!(device_id(2), "device2");
        assert_eq!(device_id(100), "device100");
    }

    #[test]
    fn test_device_id_uses_prefix() {
        assert!(device_id(7).starts_with(DEVICE_ID_PREFIX));
    }
}
