//! Trapped water computation.
//!
//! Two deliberately separate code paths compute the same quantity:
//!
//! - [`total_trapped`] is the classic two-pointer scan, O(n) time and O(1)
//!   extra space, and produces only the total.
//! - [`per_index_water`] computes the water resting above each individual
//!   block via prefix/suffix maxima, O(n) time and O(n) space, and is what
//!   the chart layout consumes.
//!
//! Keeping them independent is intentional; the property tests below pin
//! `per_index_water(h).total() == total_trapped(h)` so the two cannot
//! silently diverge.

use raintrap_core::profile::{HeightSequence, WaterProfile};

/// Computes the total amount of water trapped between the blocks.
///
/// Uses a two-pointer scan: whichever side currently has the lower height
/// is bounded by its own running maximum, so its water contribution is
/// settled and the pointer can move inward. Ties advance the right side.
///
/// Sequences of length 0 or 1 trap no water.
pub fn total_trapped(heights: &HeightSequence) -> u64 {
    let h = heights.values();
    if h.len() < 2 {
        return 0;
    }

    let mut l = 0;
    let mut r = h.len() - 1;
    let mut l_max = 0u32;
    let mut r_max = 0u32;
    let mut water = 0u64;

    while l < r {
        if h[l] < h[r] {
            l_max = l_max.max(h[l]);
            water += u64::from(l_max - h[l]);
            l += 1;
        } else {
            r_max = r_max.max(h[r]);
            water += u64::from(r_max - h[r]);
            r -= 1;
        }
    }

    water
}

/// Computes the water resting above each block.
///
/// Builds the suffix maxima right-to-left, then sweeps left-to-right with
/// a running prefix maximum: block `i` holds
/// `min(left_max, right_max[i]) - heights[i]`. Both maxima include the
/// block itself, so the subtraction never underflows.
pub fn per_index_water(heights: &HeightSequence) -> WaterProfile {
    let h = heights.values();
    let n = h.len();

    let mut right_max = vec![0u32; n];
    let mut running = 0u32;
    for i in (0..n).rev() {
        running = running.max(h[i]);
        right_max[i] = running;
    }

    let mut left_max = 0u32;
    let mut water = Vec::with_capacity(n);
    for i in 0..n {
        left_max = left_max.max(h[i]);
        water.push(left_max.min(right_max[i]) - h[i]);
    }

    WaterProfile::new(water)
}

/// The result of running both water computations over one sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaterSummary {
    total: u64,
    profile: WaterProfile,
}

impl WaterSummary {
    /// Computes the total and the per-block profile for a sequence.
    ///
    /// The two quantities come from independent code paths; in debug
    /// builds their agreement is asserted.
    pub fn compute(heights: &HeightSequence) -> Self {
        let total = total_trapped(heights);
        let profile = per_index_water(heights);
        debug_assert_eq!(total, profile.total());

        Self { total, profile }
    }

    /// Returns the total trapped water in units.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns the per-block water profile.
    pub fn profile(&self) -> &WaterProfile {
        &self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heights(values: &[u32]) -> HeightSequence {
        HeightSequence::new(values.to_vec())
    }

    #[test]
    fn test_empty_sequence_traps_nothing() {
        assert_eq!(total_trapped(&heights(&[])), 0);
        assert!(per_index_water(&heights(&[])).is_empty());
    }

    #[test]
    fn test_single_block_traps_nothing() {
        assert_eq!(total_trapped(&heights(&[5])), 0);
        assert_eq!(per_index_water(&heights(&[5])).values(), &[0]);
    }

    #[test]
    fn test_two_blocks_trap_nothing() {
        assert_eq!(total_trapped(&heights(&[2, 9])), 0);
    }

    #[test]
    fn test_classic_sequence() {
        // The canonical example: [0,1,0,2,1,0,1,3,2,1,2,1] holds 6 units
        assert_eq!(total_trapped(&heights(&[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1])), 6);
    }

    #[test]
    fn test_valley_sequence() {
        let h = heights(&[3, 0, 2, 0, 4]);
        assert_eq!(total_trapped(&h), 7);
        assert_eq!(per_index_water(&h).values(), &[0, 3, 1, 3, 0]);
    }

    #[test]
    fn test_flat_sequence() {
        let h = heights(&[5, 5, 5]);
        assert_eq!(total_trapped(&h), 0);
        assert_eq!(per_index_water(&h).values(), &[0, 0, 0]);
    }

    #[test]
    fn test_all_zero_sequence() {
        let h = heights(&[0, 0, 0, 0]);
        assert_eq!(total_trapped(&h), 0);
        assert_eq!(per_index_water(&h).values(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_monotonic_sequences_trap_nothing() {
        assert_eq!(total_trapped(&heights(&[1, 2, 3, 4, 5])), 0);
        assert_eq!(total_trapped(&heights(&[5, 4, 3, 2, 1])), 0);
    }

    #[test]
    fn test_deep_well() {
        // Tall walls with nothing between them
        let h = heights(&[100, 0, 0, 0, 100]);
        assert_eq!(total_trapped(&h), 300);
        assert_eq!(per_index_water(&h).values(), &[0, 100, 100, 100, 0]);
    }

    #[test]
    fn test_equal_walls_tie_break() {
        // heights[l] == heights[r] takes the right branch; the total must
        // come out the same either way
        let h = heights(&[4, 1, 4]);
        assert_eq!(total_trapped(&h), 3);
    }

    #[test]
    fn test_total_does_not_overflow_u32() {
        // Two max-height walls around a deep trench
        let h = heights(&[u32::MAX, 0, 0, 0, u32::MAX]);
        assert_eq!(total_trapped(&h), 3 * u64::from(u32::MAX));
    }

    #[test]
    fn test_summary_agrees_with_parts() {
        let h = heights(&[3, 0, 2, 0, 4]);
        let summary = WaterSummary::compute(&h);
        assert_eq!(summary.total(), 7);
        assert_eq!(summary.profile().values(), &[0, 3, 1, 3, 0]);
        assert_eq!(summary.profile().total(), summary.total());
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn heights_strategy() -> impl Strategy<Value = HeightSequence> {
        prop::collection::vec(0u32..10_000, 0..200).prop_map(HeightSequence::new)
    }

    proptest! {
        /// The two independent implementations always agree on the total.
        #[test]
        fn per_index_sums_to_total(heights in heights_strategy()) {
            prop_assert_eq!(per_index_water(&heights).total(), total_trapped(&heights));
        }

        /// The total is invariant under reversal of the input.
        #[test]
        fn total_is_reversal_invariant(heights in heights_strategy()) {
            let reversed = HeightSequence::new(
                heights.values().iter().rev().copied().collect(),
            );
            prop_assert_eq!(total_trapped(&heights), total_trapped(&reversed));
        }

        /// Short sequences trap no water.
        #[test]
        fn short_sequences_trap_nothing(height in any::<u32>()) {
            prop_assert_eq!(total_trapped(&HeightSequence::new(vec![])), 0);
            prop_assert_eq!(total_trapped(&HeightSequence::new(vec![height])), 0);
        }

        /// Every per-block amount is bounded by the tallest block: no
        /// column can hold more water than the terrain around it.
        #[test]
        fn profile_entries_are_bounded_by_max(heights in heights_strategy()) {
            let max = heights.max_height().unwrap_or(0);
            let profile = per_index_water(&heights);
            prop_assert!(profile.values().iter().all(|&w| w <= max));
        }
    }
}
