//! The block-height and water-profile data model.
//!
//! A chart is computed from a [`HeightSequence`], an ordered run of
//! non-negative block heights indexed along the x-axis. The water resting
//! on top of each block is captured in a [`WaterProfile`] of the same
//! length. Both are plain value types: they are created fresh for each
//! invocation and carry no state between renders.
//!
//! Heights are stored as `u32`, which makes non-negativity a type
//! invariant; rejecting negative input is the parser's job.

/// An ordered sequence of non-negative block heights.
///
/// The index of a height is its block position along the x-axis.
/// Sequences may be empty or contain a single block; both trap no water.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeightSequence {
    heights: Vec<u32>,
}

impl HeightSequence {
    /// Creates a height sequence from raw height values.
    pub fn new(heights: Vec<u32>) -> Self {
        Self { heights }
    }

    /// Returns the number of blocks in the sequence.
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Returns `true` if the sequence contains no blocks.
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Returns the raw height values as a slice.
    pub fn values(&self) -> &[u32] {
        &self.heights
    }

    /// Returns the tallest block height, or `None` for an empty sequence.
    ///
    /// The maximum drives the vertical scale of the chart; callers must
    /// treat `None` (and a maximum of zero) as degenerate geometry.
    pub fn max_height(&self) -> Option<u32> {
        self.heights.iter().copied().max()
    }
}

impl From<Vec<u32>> for HeightSequence {
    fn from(heights: Vec<u32>) -> Self {
        Self::new(heights)
    }
}

/// The water resting above each block of a [`HeightSequence`].
///
/// `values()[i]` is the number of water units held above block `i`:
/// `min(left_max_i, right_max_i) - height_i`. Both maxima include the
/// block itself, so every entry is non-negative by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaterProfile {
    water: Vec<u32>,
}

impl WaterProfile {
    /// Creates a water profile from per-block water amounts.
    pub fn new(water: Vec<u32>) -> Self {
        Self { water }
    }

    /// Returns the number of entries in the profile.
    pub fn len(&self) -> usize {
        self.water.len()
    }

    /// Returns `true` if the profile has no entries.
    pub fn is_empty(&self) -> bool {
        self.water.is_empty()
    }

    /// Returns the per-block water amounts as a slice.
    pub fn values(&self) -> &[u32] {
        &self.water
    }

    /// Sums the profile into a total water amount.
    pub fn total(&self) -> u64 {
        self.water.iter().map(|&w| u64::from(w)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_sequence_accessors() {
        let heights = HeightSequence::new(vec![3, 0, 2, 0, 4]);
        assert_eq!(heights.len(), 5);
        assert!(!heights.is_empty());
        assert_eq!(heights.values(), &[3, 0, 2, 0, 4]);
        assert_eq!(heights.max_height(), Some(4));
    }

    #[test]
    fn test_height_sequence_empty() {
        let heights = HeightSequence::default();
        assert_eq!(heights.len(), 0);
        assert!(heights.is_empty());
        assert_eq!(heights.max_height(), None);
    }

    #[test]
    fn test_height_sequence_all_zero_max() {
        let heights = HeightSequence::new(vec![0, 0, 0]);
        assert_eq!(heights.max_height(), Some(0));
    }

    #[test]
    fn test_height_sequence_from_vec() {
        let heights: HeightSequence = vec![1, 2].into();
        assert_eq!(heights.values(), &[1, 2]);
    }

    #[test]
    fn test_water_profile_total() {
        let profile = WaterProfile::new(vec![0, 3, 1, 3, 0]);
        assert_eq!(profile.len(), 5);
        assert_eq!(profile.total(), 7);
    }

    #[test]
    fn test_water_profile_empty_total() {
        let profile = WaterProfile::default();
        assert!(profile.is_empty());
        assert_eq!(profile.total(), 0);
    }

    #[test]
    fn test_water_profile_total_does_not_overflow_u32() {
        let profile = WaterProfile::new(vec![u32::MAX, u32::MAX]);
        assert_eq!(profile.total(), 2 * u64::from(u32::MAX));
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// The maximum is one of the heights and bounds all of them.
        #[test]
        fn max_height_is_a_tight_bound(values in prop::collection::vec(any::<u32>(), 1..100)) {
            let heights = HeightSequence::new(values.clone());
            let max = heights.max_height().unwrap();

            prop_assert!(values.contains(&max));
            prop_assert!(values.iter().all(|&h| h <= max));
        }

        /// The total never loses units to overflow.
        #[test]
        fn total_matches_wide_sum(values in prop::collection::vec(any::<u32>(), 0..100)) {
            let expected: u64 = values.iter().map(|&w| u64::from(w)).sum();
            prop_assert_eq!(WaterProfile::new(values).total(), expected);
        }
    }
}
