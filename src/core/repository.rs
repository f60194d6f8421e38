//! Word repository: loads a JSON word list, repairing common typos
//!
//! Lists are typed by hand, often with a CJK input method active, so a
//! strict decode that fails gets one retry after:
//! - full-width `，` and `：` replaced with ASCII
//! - trailing commas before `]` or `}` removed

use std::collections::HashSet;
use std::path::Path;

use lazy_static::lazy_static;
use log::{info, warn};
use regex::Regex;

use crate::types::{StoreError, Word, WordList};

lazy_static! {
    /// `,` followed by optional whitespace and a closing bracket
    static ref RE_TRAILING_COMMA: Regex = Regex::new(r",\s*([\]}])").unwrap();
}

/// Load a word list from a JSON file
pub fn load_words(path: impl AsRef<Path>) -> Result<WordList, StoreError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let list = parse_words(&text)?;
    info!(
        "loaded {} words from {}{}",
        list.len(),
        path.display(),
        if list.repaired { " (repaired)" } else { "" }
    );
    Ok(list)
}

/// Parse a word list from JSON text
pub fn parse_words(text: &str) -> Result<WordList, StoreError> {
    let (words, repaired) = match serde_json::from_str::<Vec<Word>>(text) {
        Ok(words) => (words, false),
        Err(strict_err) => {
            let sanitized = sanitize_json(text);
            match serde_json::from_str::<Vec<Word>>(&sanitized) {
                Ok(words) => {
                    warn!("word list decoded only after repair: {}", strict_err);
                    (words, true)
                }
                Err(_) => return Err(StoreError::Repair(strict_err.to_string())),
            }
        }
    };

    let words = normalize_ids(words);
    let duplicate_ids = find_duplicate_ids(&words);
    if !duplicate_ids.is_empty() {
        warn!(
            "{} duplicate word ids, their progress will be shared: {:?}",
            duplicate_ids.len(),
            duplicate_ids
        );
    }

    Ok(WordList {
        words,
        repaired,
        duplicate_ids,
    })
}

/// Fix the punctuation mistakes that commonly break hand-written lists
pub fn sanitize_json(text: &str) -> String {
    let replaced = text.replace('，', ",").replace('：', ":");
    RE_TRAILING_COMMA.replace_all(&replaced, "$1").into_owned()
}

/// Words without an id are keyed by their text
fn normalize_ids(words: Vec<Word>) -> Vec<Word> {
    words
        .into_iter()
        .map(|mut word| {
            if word.id.trim().is_empty() {
                word.id = word.text.clone();
            }
            word
        })
        .collect()
}

/// Ids occurring more than once, in first-repeat order
fn find_duplicate_ids(words: &[Word]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for word in words {
        if !seen.insert(word.id.as_str()) && !duplicates.contains(&word.id) {
            duplicates.push(word.id.clone());
        }
    }
    duplicates
}

// =============================================================================
// TESTS
// =============================================================================
