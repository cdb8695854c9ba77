//! ThresholdRange - the closed integer interval thresholds are drawn from.

/// A closed integer interval `[min, max]` for threshold sampling.
///
/// Both bounds are inclusive. The seeding default is [15, 20], matching the
/// alert configuration the `Devices` collection is provisioned with.
///
/// # Example
///
/// ```rust
/// use threshseed_types::ThresholdRange;
///
/// let range = ThresholdRange::DEFAULT;
/// assert!(range.contains(15));
/// assert!(range.contains(20));
/// assert!(!range.contains(21));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThresholdRange {
    /// Inclusive lower bound.
    pub min: i64,
    /// Inclusive upper bound.
    pub max: i64,
}

impl ThresholdRange {
    /// The default seeding range, [15, 20].
    pub const DEFAULT: Self = Self { min: 15, max: 20 };

    /// Create a new range, or `None` if the bounds are inverted.
    pub fn new(min: i64, max: i64) -> Option<Self> {
        if min <= max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// Check whether `value` lies inside the range (bounds inclusive).
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Number of distinct values in the range.
    pub fn span(&self) -> u64 {
        (self.max - self.min) as u64 + 1
    }
}

impl Default for ThresholdRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range() {
        let range = ThresholdRange::DEFAULT;
        assert_eq!(range.min, 15);
        assert_eq!(range.max, 20);
        assert_eq!(range.span(), 6);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = ThresholdRange::new(15, 20).unwrap();
        assert!(range.contains(15));
        assert!(range.contains(17));
        assert!(range.contains(20));
        assert!(!range.contains(14));
        assert!(!range.contains(21));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        assert_eq!(ThresholdRange::new(20, 15), None);
    }

    #[test]
    fn test_single_value_range() {
        let range = ThresholdRange::new(18, 18).unwrap();
        assert!(range.contains(18));
        assert_eq!(range.span(), 1);
    }
}
