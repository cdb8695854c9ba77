//! DeviceRecord - one seeded document.

/// A single device threshold record, as written to the document store.
///
/// Records are independent of each other: there are no cross-record
/// invariants, and the store owns the persisted copy once a write returns.
///
/// # Example
///
/// ```rust
/// use threshseed_types::DeviceRecord;
///
/// let record = DeviceRecord::new("device1", 18);
/// assert_eq!(record.threshold, 18);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceRecord {
    /// Document key in the `Devices` collection.
    pub device_id: String,

    /// Temperature-alert threshold for this device.
    pub threshold: i64,
}

impl DeviceRecord {
    /// Create a new record.
    pub fn new(device_id: impl Into<String>, threshold: i64) -> Self {
        Self {
            device_id: device_id.into(),
            threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_construction() {
        let record = DeviceRecord::new("device3", 15);
        assert_eq!(record.device_id, "device3");
        assert_eq!(record.threshold, 15);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let record = DeviceRecord::new("device1", 20);

        let json = serde_json::to_string(&record).unwrap();
        let parsed: DeviceRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, parsed);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_field_names() {
        let record = DeviceRecord::new("device1", 16);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["device_id"], "device1");
        assert_eq!(value["threshold"], 16);
    }
}
