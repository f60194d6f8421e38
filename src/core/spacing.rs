//! Spacing: how long a familiar word stays away
//!
//! gap(k) = round(min(total * 0.02 * 2^(k-1), total * 0.6)), at least 1 step,
//! where k = max(familiar_count, 1).

use crate::{GAP_BASE_RATIO, GAP_CAP_RATIO, GAP_MIN_STEPS};
use crate::types::ProgressStore;

/// The cap is 30x the base gap, so doubling saturates by k = 6.
/// Clamping the exponent keeps `powi` finite for absurd counts.
const MAX_DOUBLINGS: u32 = 32;

/// Number of timeline steps a word must wait after its `familiar_count`-th mark.
///
/// Computed in f64 and rounded once, half away from zero.
pub fn compute_gap(total_words: usize, familiar_count: u32) -> u64 {
    let k = familiar_count.max(1);
    let total = total_words as f64;

    let doublings = (k - 1).min(MAX_DOUBLINGS) as i32;
    let raw = total * GAP_BASE_RATIO * 2f64.powi(doublings);
    let capped = raw.min(total * GAP_CAP_RATIO);

    (capped.round() as u64).max(GAP_MIN_STEPS)
}

/// May the word with `id` be picked at `step`? Unmarked words always may.
pub fn is_eligible(store: &ProgressStore, id: &str, step: u64) -> bool {
    store
        .get(id)
        .map(|record| record.is_available_at(step))
        .unwrap_or(true)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProgressRecord;

    #[test]
    fn test_first_mark_is_two_percent() {
        assert_eq!(compute_gap(100, 1), 2);
        assert_eq!(compute_gap(500, 1), 10);
    }

    #[test]
    fn test_gap_doubles_per_mark() {
        assert_eq!(compute_gap(100, 2), 4);
        assert_eq!(compute_gap(100, 3), 8);
        assert_eq!(compute_gap(100, 4), 16);
        assert_eq!(compute_gap(100, 5), 32);
    }

    #[test]
    fn test_gap_capped_at_sixty_percent() {
        // raw = 100 * 0.02 * 32 = 64 > 60
        assert_eq!(compute_gap(100, 6), 60);
        assert_eq!(compute_gap(100, 40), 60);
        assert_eq!(compute_gap(100, u32::MAX), 60);
    }

    #[test]
    fn test_zero_count_treated_as_first_mark() {
        assert_eq!(compute_gap(100, 0), compute_gap(100, 1));
    }

    #[test]
    fn test_small_lists_floor_at_one() {
        // 3 * 0.02 = 0.06 rounds to 0
        assert_eq!(compute_gap(3, 1), 1);
        assert_eq!(compute_gap(0, 1), 1);
        assert_eq!(compute_gap(0, 50), 1);
        assert_eq!(compute_gap(1, 10), 1);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        // 25 * 0.02 = 0.5
        assert_eq!(compute_gap(25, 1), 1);
        // 75 * 0.02 = 1.5
        assert_eq!(compute_gap(75, 1), 2);
    }

    #[test]
    fn test_monotonic_and_bounded() {
        for total in 0..300usize {
            let cap = ((total as f64 * GAP_CAP_RATIO).round() as u64).max(1);
            let mut previous = 0;
            for count in 0..24u32 {
                let gap = compute_gap(total, count);
                assert!(gap >= 1, "gap must be >= 1 (total={}, count={})", total, count);
                assert!(gap >= previous, "gap decreased at total={}, count={}", total, count);
                assert!(gap <= cap, "gap {} above cap {} (total={})", gap, cap, total);
                previous = gap;
            }
            assert_eq!(compute_gap(total, 23), cap);
        }
    }

    #[test]
    fn test_unmarked_word_is_eligible() {
        let store = ProgressStore::new();
        assert!(is_eligible(&store, "Haus", 0));
    }

    #[test]
    fn test_eligibility_boundary() {
        let mut store = ProgressStore::new();
        store.insert("Haus", ProgressRecord { familiar_count: 1, next_available_step: 7 });

        assert!(!is_eligible(&store, "Haus", 6));
        assert!(is_eligible(&store, "Haus", 7));
        assert!(is_eligible(&store, "Haus", 8));
    }
}
