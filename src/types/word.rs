//! Vocabulary entries

use serde::{Deserialize, Serialize};

/// One flashcard. Supplied by the word list and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Progress store key. Filled from `text` when the list omits it.
    #[serde(default)]
    pub id: String,
    /// Display text
    pub text: String,
    /// Pronunciation hint
    #[serde(default)]
    pub phonetic: String,
    /// Translation or definition
    #[serde(default)]
    pub meaning: String,
    /// Example sentence
    #[serde(default)]
    pub example: String,
}

impl Word {
    /// Create a word whose id is its display text
    pub fn new(
        text: impl Into<String>,
        phonetic: impl Into<String>,
        meaning: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        let text = text.into();
        Self {
            id: text.clone(),
            text,
            phonetic: phonetic.into(),
            meaning: meaning.into(),
            example: example.into(),
        }
    }

    /// Bare word with only a display text, mostly for tests
    pub fn bare(text: impl Into<String>) -> Self {
        Self::new(text, "", "", "")
    }

    /// Replace the id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// A loaded word list and what the loader had to do to get it
#[derive(Debug, Clone, Default)]
pub struct WordList {
    /// Words in list order
    pub words: Vec<Word>,
    /// The source only decoded after punctuation repair
    pub repaired: bool,
    /// Ids that occur more than once (progress for them is shared)
    pub duplicate_ids: Vec<String>,
}

impl WordList {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
