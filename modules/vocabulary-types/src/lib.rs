//! Shared types for the vocabulary bot and its stores.

use serde::{Deserialize, Serialize};

// =====================================================
// Domain Types
// =====================================================

/// Store-assigned identifier of a word record
pub type WordId = i64;

/// A persisted word with its memorization score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub id: WordId,
    pub word: String,
    pub translation: String,
    pub score: u32,
}

/// User-supplied word pair, before it is stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub word: String,
    pub translation: String,
}

impl Word {
    pub fn new(word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyStats {
    pub total_words: i64,
    pub memorized_count: i64,
}

impl VocabularyStats {
    pub fn in_progress_count(&self) -> i64 {
        self.total_words - self.memorized_count
    }
}
