//! Vocabulary store abstraction used by the command handlers.

use async_trait::async_trait;
use std::sync::Arc;
use vocabulary_types::{VocabularyStats, Word, WordId, WordRecord};

use crate::db::Database;
use crate::error::VocabError;

/// Persistent word storage.
///
/// Implementations decide what "memorized" means through their threshold:
/// `get_list` only returns words whose score is still below it.
#[async_trait]
pub trait VocabularyStore: Send + Sync {
    /// Store a new word with score 0
    async fn push(&self, word: Word) -> Result<(), VocabError>;

    /// Unmemorized words, lowest score first. `limit <= 0` means no limit.
    async fn get_list(&self, limit: i64) -> Result<Vec<WordRecord>, VocabError>;

    /// Add 1 to the score of every listed word; unknown ids are ignored
    async fn update_scores(&self, ids: &[WordId]) -> Result<(), VocabError>;

    /// Remove every listed word; unknown ids are ignored
    async fn delete_words(&self, ids: &[WordId]) -> Result<(), VocabError>;

    async fn stats(&self) -> Result<VocabularyStats, VocabError>;
}

/// SQLite-backed store bound to a memorization threshold
pub struct SqliteVocabulary {
    db: Arc<Database>,
    threshold: u32,
}

impl SqliteVocabulary {
    pub fn new(db: Arc<Database>, threshold: u32) -> Self {
        Self { db, threshold }
    }
}

#[async_trait]
impl VocabularyStore for SqliteVocabulary {
    async fn push(&self, word: Word) -> Result<(), VocabError> {
        let id = self.db.insert_word(&word)?;
        log::debug!("Vocabulary: stored '{}' as {}", word.word, id);
        Ok(())
    }

    async fn get_list(&self, limit: i64) -> Result<Vec<WordRecord>, VocabError> {
        Ok(self.db.list_unmemorized_words(self.threshold, limit)?)
    }

    async fn update_scores(&self, ids: &[WordId]) -> Result<(), VocabError> {
        let updated = self.db.increment_word_scores(ids)?;
        log::debug!("Vocabulary: incremented {} of {} scores", updated, ids.len());
        Ok(())
    }

    async fn delete_words(&self, ids: &[WordId]) -> Result<(), VocabError> {
        let deleted = self.db.delete_words(ids)?;
        log::debug!("Vocabulary: deleted {} of {} words", deleted, ids.len());
        Ok(())
    }

    async fn stats(&self) -> Result<VocabularyStats, VocabError> {
        Ok(self.db.vocabulary_stats(self.threshold)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(threshold: u32) -> SqliteVocabulary {
        let db = Arc::new(Database::new(":memory:").expect("in-memory db"));
        SqliteVocabulary::new(db, threshold)
    }

    #[tokio::test]
    async fn test_push_then_list_unlimited() {
        let store = store(5);
        store.push(Word::new("cat", "meow")).await.unwrap();

        let words = store.get_list(-1).await.unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "cat");
        assert_eq!(words[0].translation, "meow");
        assert_eq!(words[0].score, 0);
    }

    #[tokio::test]
    async fn test_score_equal_to_threshold_is_excluded() {
        let store = store(1);
        store.push(Word::new("cat", "meow")).await.unwrap();
        let id = store.get_list(-1).await.unwrap()[0].id;

        store.update_scores(&[id]).await.unwrap();
        assert!(store.get_list(-1).await.unwrap().is_empty());

        let stats = store.stats().await.unwrap();
        assert_eq!(stats.total_words, 1);
        assert_eq!(stats.memorized_count, 1);
    }

    #[tokio::test]
    async fn test_empty_updates_are_noops() {
        let store = store(5);
        store.push(Word::new("cat", "meow")).await.unwrap();

        store.update_scores(&[]).await.unwrap();
        store.delete_words(&[]).await.unwrap();

        let words = store.get_list(-1).await.unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].score, 0);
    }
}
