//! Scheduler: picks the next word along the timeline
//!
//! Rules:
//! - advance scans offsets 1..=len from the current index, cyclically,
//!   and takes the first word that is unmarked or whose cooldown has elapsed
//!   at `step + offset`
//! - nothing eligible → take the neighbour at offset 1, step + 1
//! - retreat moves the index back one and leaves the step alone
//! - mark_familiar sets next_available_step = step + gap(count)
//! - step arithmetic saturates at u64::MAX instead of wrapping

use log::debug;

use crate::core::spacing::compute_gap;
use crate::types::{Cursor, ProgressRecord, ProgressStore, ReasonCode, Word};

/// Result of an advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    /// Where the cursor moved
    pub cursor: Cursor,
    /// Candidates scanned before the pick (0 for an empty list)
    pub offset: usize,
    /// Why this word was picked
    pub reason: ReasonCode,
}

/// Choose the next word.
///
/// The step grows by the winning offset, so a word that had to be skipped
/// still counts as elapsed time for the ones after it.
pub fn advance(words: &[Word], cursor: Cursor, store: &ProgressStore) -> Advance {
    let len = words.len();
    if len == 0 {
        return Advance {
            cursor,
            offset: 0,
            reason: ReasonCode::R100_EMPTY_LIST,
        };
    }

    for offset in 1..=len {
        let index = (cursor.index + offset) % len;
        let step = cursor.step.saturating_add(offset as u64);

        let reason = match store.get(&words[index].id) {
            None => ReasonCode::R101_PICKED_UNSEEN,
            Some(record) if record.is_available_at(step) => ReasonCode::R102_PICKED_DUE,
            Some(_) => continue,
        };

        return Advance {
            cursor: Cursor::new(index, step),
            offset,
            reason,
        };
    }

    // Full cycle without an eligible word. Never stall.
    let fallback = Cursor::new((cursor.index + 1) % len, cursor.step.saturating_add(1));
    debug!(
        "advance: all {} words cooling at step {}, falling back to index {}",
        len, cursor.step, fallback.index
    );
    Advance {
        cursor: fallback,
        offset: 1,
        reason: ReasonCode::R103_FALLBACK_ALL_COOLING,
    }
}

/// Index of the previous word. The timeline step is not involved.
pub fn retreat(words: &[Word], index: usize) -> usize {
    let len = words.len();
    if len == 0 {
        return index;
    }
    (index % len + len - 1) % len
}

/// Record a "familiar" mark on `word` at `step` and return the updated record.
///
/// `total_words` is the length of the list the word belongs to. The caller
/// is expected to advance afterwards.
pub fn mark_familiar(
    word: &Word,
    step: u64,
    total_words: usize,
    store: &mut ProgressStore,
) -> ProgressRecord {
    let record = store.get_or_insert(&word.id, step);
    record.familiar_count = record.familiar_count.saturating_add(1);

    let gap = compute_gap(total_words, record.familiar_count);
    record.next_available_step = step.saturating_add(gap);

    debug!(
        "mark_familiar: '{}' count={} gap={} next={}",
        word.id, record.familiar_count, gap, record.next_available_step
    );
    *record
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::spacing::is_eligible;

    fn abc() -> Vec<Word> {
        vec![Word::bare("A"), Word::bare("B"), Word::bare("C")]
    }

    fn cooling(next: u64) -> ProgressRecord {
        ProgressRecord { familiar_count: 3, next_available_step: next }
    }

    #[test]
    fn test_empty_list_is_noop() {
        let store = ProgressStore::new();
        let start = Cursor::new(0, 5);
        let result = advance(&[], start, &store);

        assert_eq!(result.cursor, start);
        assert_eq!(result.reason, ReasonCode::R100_EMPTY_LIST);
        assert_eq!(retreat(&[], 0), 0);
    }

    #[test]
    fn test_advance_to_neighbour_when_unmarked() {
        let words = abc();
        let store = ProgressStore::new();
        let result = advance(&words, Cursor::new(0, 0), &store);

        assert_eq!(result.cursor, Cursor::new(1, 1));
        assert_eq!(result.offset, 1);
        assert_eq!(result.reason, ReasonCode::R101_PICKED_UNSEEN);
    }

    #[test]
    fn test_advance_wraps_at_end() {
        let words = abc();
        let store = ProgressStore::new();
        let result = advance(&words, Cursor::new(2, 9), &store);
        assert_eq!(result.cursor, Cursor::new(0, 10));
    }

    #[test]
    fn test_advance_skips_cooling_word() {
        let words = abc();
        let mut store = ProgressStore::new();
        store.insert("B", cooling(50));

        let result = advance(&words, Cursor::new(0, 0), &store);
        // B skipped, C at offset 2
        assert_eq!(result.cursor, Cursor::new(2, 2));
        assert_eq!(result.offset, 2);
    }

    #[test]
    fn test_skipped_offsets_count_toward_eligibility() {
        let words = abc();
        let mut store = ProgressStore::new();
        store.insert("B", cooling(50));
        // C only eligible from step 2, which it reaches at offset 2
        store.insert("C", cooling(2));

        let result = advance(&words, Cursor::new(0, 0), &store);
        assert_eq!(result.cursor, Cursor::new(2, 2));
        assert_eq!(result.reason, ReasonCode::R102_PICKED_DUE);
    }

    #[test]
    fn test_current_word_is_last_candidate() {
        let words = abc();
        let mut store = ProgressStore::new();
        store.insert("B", cooling(50));
        store.insert("C", cooling(50));

        let result = advance(&words, Cursor::new(0, 0), &store);
        assert_eq!(result.cursor, Cursor::new(0, 3));
        assert_eq!(result.offset, 3);
    }

    #[test]
    fn test_all_cooling_falls_back_to_neighbour() {
        let words = abc();
        let mut store = ProgressStore::new();
        for w in &words {
            store.insert(w.id.clone(), cooling(100));
        }

        let result = advance(&words, Cursor::new(0, 0), &store);
        assert_eq!(result.cursor, Cursor::new(1, 1));
        assert_eq!(result.reason, ReasonCode::R103_FALLBACK_ALL_COOLING);
    }

    #[test]
    fn test_single_word_list() {
        let words = vec![Word::bare("A")];
        let mut store = ProgressStore::new();

        let result = advance(&words, Cursor::new(0, 0), &store);
        assert_eq!(result.cursor, Cursor::new(0, 1));

        store.insert("A", cooling(100));
        let result = advance(&words, Cursor::new(0, 1), &store);
        assert_eq!(result.cursor, Cursor::new(0, 2));
        assert_eq!(result.reason, ReasonCode::R103_FALLBACK_ALL_COOLING);

        assert_eq!(retreat(&words, 0), 0);
    }

    #[test]
    fn test_retreat_wraps() {
        let words = abc();
        assert_eq!(retreat(&words, 0), 2);
        assert_eq!(retreat(&words, 2), 1);
        assert_eq!(retreat(&words, 1), 0);
    }

    #[test]
    fn test_mark_familiar_creates_record() {
        let words = abc();
        let mut store = ProgressStore::new();

        let record = mark_familiar(&words[1], 1, words.len(), &mut store);
        assert_eq!(record.familiar_count, 1);
        assert_eq!(record.next_available_step, 2);
        assert_eq!(store.get("B"), Some(&record));
    }

    #[test]
    fn test_mark_familiar_grows_gap() {
        let words: Vec<Word> = (0..100).map(|i| Word::bare(format!("w{}", i))).collect();
        let mut store = ProgressStore::new();

        let first = mark_familiar(&words[0], 10, words.len(), &mut store);
        assert_eq!(first.next_available_step, 12);

        let second = mark_familiar(&words[0], 20, words.len(), &mut store);
        assert_eq!(second.familiar_count, 2);
        assert_eq!(second.next_available_step, 24);
    }

    #[test]
    fn test_marked_word_eligible_exactly_at_next_step() {
        let words: Vec<Word> = (0..50).map(|i| Word::bare(format!("w{}", i))).collect();
        let mut store = ProgressStore::new();

        let record = mark_familiar(&words[3], 40, words.len(), &mut store);
        for step in 40..record.next_available_step {
            assert!(!is_eligible(&store, "w3", step));
        }
        assert!(is_eligible(&store, "w3", record.next_available_step));
    }

    #[test]
    fn test_step_saturates_at_max() {
        let words = abc();
        let mut store = ProgressStore::new();

        let result = advance(&words, Cursor::new(0, u64::MAX), &store);
        assert_eq!(result.cursor, Cursor::new(1, u64::MAX));

        let record = mark_familiar(&words[1], u64::MAX, words.len(), &mut store);
        assert_eq!(record.next_available_step, u64::MAX);

        // Every word cooling until a step that can never be passed
        for w in &words {
            store.insert(w.id.clone(), cooling(u64::MAX));
        }
        let result = advance(&words, Cursor::new(2, u64::MAX - 1), &store);
        assert_eq!(result.cursor, Cursor::new(0, u64::MAX));
        assert_eq!(result.reason, ReasonCode::R102_PICKED_DUE);
    }

    #[test]
    fn test_records_keyed_by_id_not_text() {
        let words = vec![
            Word::bare("die Bank").with_id("bank-bench"),
            Word::bare("die Bank").with_id("bank-finance"),
            Word::bare("der See"),
        ];
        let mut store = ProgressStore::new();

        mark_familiar(&words[1], 1, words.len(), &mut store);
        assert!(store.contains("bank-finance"));
        assert!(!store.contains("bank-bench"));
        assert!(!store.contains("die Bank"));

        // Same text, different id: the unmarked twin stays eligible
        let result = advance(&words, Cursor::new(2, 1), &store);
        assert_eq!(result.cursor, Cursor::new(0, 2));
        assert_eq!(result.reason, ReasonCode::R101_PICKED_UNSEEN);
    }
}
