//! Per-word progress and the store that owns it

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::PROGRESS_FORMAT_VERSION;

/// Familiarity state of one word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    /// How many times the word was marked familiar
    #[serde(default)]
    pub familiar_count: u32,
    /// First timeline step at which the word may be picked again.
    /// Stored as `nextAvailableIndex`, the key existing progress files use.
    #[serde(default, rename = "nextAvailableIndex", alias = "nextAvailableStep")]
    pub next_available_step: u64,
}

impl ProgressRecord {
    /// Record for a word seen for the first time at `step`
    pub fn first_seen(step: u64) -> Self {
        Self {
            familiar_count: 0,
            next_available_step: step.saturating_add(1),
        }
    }

    /// May the word be picked at `step`?
    pub fn is_available_at(&self, step: u64) -> bool {
        step >= self.next_available_step
    }
}

/// Word id -> progress record. Records are created lazily and never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressStore {
    records: BTreeMap<String, ProgressRecord>,
}

impl ProgressStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record for `id`, if the word was ever marked
    pub fn get(&self, id: &str) -> Option<&ProgressRecord> {
        self.records.get(id)
    }

    /// Record for `id`, created with [`ProgressRecord::first_seen`] if absent
    pub fn get_or_insert(&mut self, id: &str, step: u64) -> &mut ProgressRecord {
        self.records
            .entry(id.to_string())
            .or_insert_with(|| ProgressRecord::first_seen(step))
    }

    /// Insert or replace a record
    pub fn insert(&mut self, id: impl Into<String>, record: ProgressRecord) {
        self.records.insert(id.into(), record);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProgressRecord)> {
        self.records.iter().map(|(id, r)| (id.as_str(), r))
    }
}

/// Position in the list plus the timeline step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// Index of the word on screen
    pub index: usize,
    /// Exposure counter, never moves backwards
    pub step: u64,
}

impl Cursor {
    pub fn new(index: usize, step: u64) -> Self {
        Self { index, step }
    }
}

/// On-disk form of a practice session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressFile {
    /// Format version
    pub version: u32,
    /// When the file was written
    pub saved_at: DateTime<Utc>,
    /// SHA-256 over the ordered word ids the cursor refers to
    pub list_fingerprint: String,
    /// Index of the word on screen when saved
    pub current_index: usize,
    /// Timeline step when saved
    pub current_step: u64,
    /// Progress by word id
    pub records: ProgressStore,
}

impl ProgressFile {
    /// Capture a cursor and store
    pub fn new(list_fingerprint: String, cursor: Cursor, records: ProgressStore) -> Self {
        Self {
            version: PROGRESS_FORMAT_VERSION,
            saved_at: Utc::now(),
            list_fingerprint,
            current_index: cursor.index,
            current_step: cursor.step,
            records,
        }
    }

    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.current_index, self.current_step)
    }
}
