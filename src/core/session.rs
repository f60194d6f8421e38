//! Practice session: owns the cursor and progress for one list
//!
//! The scheduler functions are pure; this is the one place that holds the
//! state they operate on, plus the transient detail-view flag that resets
//! whenever the word changes.

use log::{info, warn};

use crate::core::progress::list_fingerprint;
use crate::core::scheduler::{advance, mark_familiar, retreat};
use crate::core::spacing::is_eligible;
use crate::types::{
    CardView, Cursor, ProgressFile, ProgressRecord, ProgressStore, ReasonCode, SessionStats,
    Word, WordStatus,
};

/// One practice session over a fixed word list
#[derive(Debug, Clone)]
pub struct PracticeSession {
    /// Word list, in display order
    words: Vec<Word>,
    /// Current index and timeline step
    cursor: Cursor,
    /// Progress by word id
    store: ProgressStore,
    /// Meaning and example shown for the current word
    details_expanded: bool,
    /// Reason for the last move
    last_reason: ReasonCode,
}

impl PracticeSession {
    /// Fresh session at the first word, step 0
    pub fn new(words: Vec<Word>) -> Self {
        Self::with_progress(words, ProgressStore::new(), Cursor::default())
    }

    /// Session with existing progress. An out-of-range index is reset to 0.
    pub fn with_progress(words: Vec<Word>, store: ProgressStore, cursor: Cursor) -> Self {
        let cursor = if cursor.index < words.len() || words.is_empty() {
            cursor
        } else {
            warn!(
                "cursor index {} outside list of {} words, starting at 0",
                cursor.index,
                words.len()
            );
            Cursor::new(0, cursor.step)
        };

        Self {
            words,
            cursor,
            store,
            details_expanded: false,
            last_reason: ReasonCode::R201_SESSION_START,
        }
    }

    /// Restore from a progress file.
    ///
    /// Records are keyed by id and always kept. The index only means
    /// something for the list it was saved against, so a fingerprint
    /// mismatch restarts at index 0 (keeping the step).
    pub fn restore(words: Vec<Word>, file: ProgressFile) -> Self {
        let mut cursor = file.cursor();
        if file.list_fingerprint != list_fingerprint(&words) {
            warn!("progress file was saved for a different word list, starting at the first word");
            cursor.index = 0;
        }
        info!(
            "restored {} progress records at step {}",
            file.records.len(),
            cursor.step
        );
        Self::with_progress(words, file.records, cursor)
    }

    /// Snapshot for persistence
    pub fn to_progress_file(&self) -> ProgressFile {
        ProgressFile::new(list_fingerprint(&self.words), self.cursor, self.store.clone())
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Move to the next scheduled word
    pub fn next(&mut self) -> Option<CardView> {
        let result = advance(&self.words, self.cursor, &self.store);
        self.last_reason = result.reason;
        if result.offset > 0 {
            self.details_expanded = false;
        }
        self.cursor = result.cursor;
        self.view()
    }

    /// Move back one word. The timeline does not move.
    pub fn previous(&mut self) -> Option<CardView> {
        if self.words.is_empty() {
            self.last_reason = ReasonCode::R100_EMPTY_LIST;
            return None;
        }
        self.cursor.index = retreat(&self.words, self.cursor.index);
        self.details_expanded = false;
        self.last_reason = ReasonCode::R200_RETREAT;
        self.view()
    }

    /// Mark the current word familiar without moving.
    /// Follow with [`next`](Self::next) once feedback has been shown.
    pub fn mark_familiar(&mut self) -> Option<ProgressRecord> {
        let word = self.words.get(self.cursor.index)?;
        Some(mark_familiar(word, self.cursor.step, self.words.len(), &mut self.store))
    }

    /// Mark familiar and advance immediately
    pub fn familiar_and_advance(&mut self) -> Option<CardView> {
        self.mark_familiar()?;
        self.next()
    }

    /// Show or hide meaning and example
    pub fn toggle_details(&mut self) -> Option<CardView> {
        if self.words.is_empty() {
            return None;
        }
        self.details_expanded = !self.details_expanded;
        self.last_reason = ReasonCode::R202_DETAILS_TOGGLED;
        self.view()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Word on screen, `None` for an empty list
    pub fn current_word(&self) -> Option<&Word> {
        self.words.get(self.cursor.index)
    }

    /// Display state of the current word
    pub fn view(&self) -> Option<CardView> {
        let word = self.current_word()?;
        let record = self.store.get(&word.id);
        Some(CardView {
            timestamp: chrono::Utc::now(),
            index: self.cursor.index,
            total: self.words.len(),
            step: self.cursor.step,
            word: word.clone(),
            status: self.status_of(word),
            familiar_count: record.map(|r| r.familiar_count).unwrap_or(0),
            next_available_step: record.map(|r| r.next_available_step),
            details_expanded: self.details_expanded,
            reason: self.last_reason,
        })
    }

    /// Status of `word` at the current step
    pub fn status_of(&self, word: &Word) -> WordStatus {
        if !self.store.contains(&word.id) {
            WordStatus::Unseen
        } else if is_eligible(&self.store, &word.id, self.cursor.step) {
            WordStatus::Due
        } else {
            WordStatus::Cooling
        }
    }

    /// Counts by status
    pub fn stats(&self) -> SessionStats {
        let mut stats = SessionStats {
            total: self.words.len(),
            step: self.cursor.step,
            ..SessionStats::default()
        };
        for word in &self.words {
            match self.status_of(word) {
                WordStatus::Unseen => stats.unseen += 1,
                WordStatus::Cooling => stats.cooling += 1,
                WordStatus::Due => stats.due += 1,
            }
        }
        for (_, record) in self.store.iter() {
            stats.familiar_marks += u64::from(record.familiar_count);
            stats.max_familiar_count = stats.max_familiar_count.max(record.familiar_count);
        }
        stats
    }

    /// The next `count` picks, without changing the session
    pub fn preview(&self, count: usize) -> Vec<(Cursor, ReasonCode)> {
        let mut cursor = self.cursor;
        let mut picks = Vec::with_capacity(count);
        for _ in 0..count {
            let result = advance(&self.words, cursor, &self.store);
            if result.reason == ReasonCode::R100_EMPTY_LIST {
                break;
            }
            cursor = result.cursor;
            picks.push((cursor, result.reason));
        }
        picks
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn store(&self) -> &ProgressStore {
        &self.store
    }

    pub fn details_expanded(&self) -> bool {
        self.details_expanded
    }

    pub fn last_reason(&self) -> ReasonCode {
        self.last_reason
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
