//! Output structures for terminal display

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::types::{ReasonCode, Word, WordStatus};

/// What the front end shows after each move
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardView {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Index of the word in the list
    pub index: usize,
    /// List length
    pub total: usize,
    /// Timeline step
    pub step: u64,
    /// The word on screen
    pub word: Word,
    /// Status at the current step
    pub status: WordStatus,
    /// Times marked familiar
    pub familiar_count: u32,
    /// Next eligible step, if the word was ever marked
    pub next_available_step: Option<u64>,
    /// Meaning and example shown?
    pub details_expanded: bool,
    /// Why this word is on screen
    pub reason: ReasonCode,
}

impl CardView {
    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let mut out = format!(
            "{} {}  {}\n   {}",
            self.status.emoji(),
            self.word.text.bold(),
            format!("[{}/{}]", self.index + 1, self.total).dimmed(),
            self.word.phonetic.green(),
        );

        if self.details_expanded {
            if !self.word.meaning.is_empty() {
                out.push_str(&format!("\n   {}", self.word.meaning));
            }
            if !self.word.example.is_empty() {
                out.push_str(&format!("\n   {}", self.word.example.italic()));
            }
        }

        let schedule = match self.next_available_step {
            Some(next) => format!(
                "{} | familiar={} | step={} | next={}",
                self.status, self.familiar_count, self.step, next
            ),
            None => format!("{} | step={}", self.status, self.step),
        };
        out.push_str(&format!("\n   {}", self.status.paint(&schedule)));

        if self.reason.is_fallback() {
            out.push_str(&format!("\n   {}", self.reason.description().red()));
        }
        out
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "index={} | word={} | step={} | status={} | familiar={} | next={} | reason={}",
            self.index,
            self.word.text,
            self.step,
            self.status,
            self.familiar_count,
            self.next_available_step
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.reason.code()
        )
    }
}

/// Summary of a session's progress
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Words in the list
    pub total: usize,
    /// Words never marked
    pub unseen: usize,
    /// Words waiting out a gap
    pub cooling: usize,
    /// Marked words eligible again
    pub due: usize,
    /// Sum of all familiar marks
    pub familiar_marks: u64,
    /// Highest familiar count on any word
    pub max_familiar_count: u32,
    /// Current timeline step
    pub step: u64,
}

impl SessionStats {
    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "total={} | unseen={} | cooling={} | due={} | marks={} | max_familiar={} | step={}",
            self.total,
            self.unseen,
            self.cooling,
            self.due,
            self.familiar_marks,
            self.max_familiar_count,
            self.step
        )
    }
}
