//! Vocabulary table - word/translation pairs with a memorization score

use crate::db::Database;
use rusqlite::{params, params_from_iter, Result as SqliteResult};
use vocabulary_types::{VocabularyStats, Word, WordId, WordRecord};

/// Initialize the vocabulary table
pub fn init_tables(conn: &rusqlite::Connection) -> SqliteResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS vocabulary (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            word TEXT NOT NULL,
            translation TEXT NOT NULL,
            score INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_vocabulary_score ON vocabulary(score)",
        [],
    )?;

    log::info!("Initialized vocabulary table");
    Ok(())
}

/// `?, ?, ?` for an `IN (...)` clause with `n` ids
fn id_placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}

impl Database {
    /// Insert a new word with score 0, returning its id
    pub fn insert_word(&self, word: &Word) -> SqliteResult<WordId> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO vocabulary (word, translation, score) VALUES (?1, ?2, 0)",
            params![word.word, word.translation],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Words with `score < threshold`, lowest score first, oldest first among equals.
    /// A `limit` of zero or below returns every matching word.
    pub fn list_unmemorized_words(&self, threshold: u32, limit: i64) -> SqliteResult<Vec<WordRecord>> {
        let conn = self.conn();
        let limit = if limit > 0 { limit } else { -1 };
        let mut stmt = conn.prepare(
            "SELECT id, word, translation, score
             FROM vocabulary
             WHERE score < ?1
             ORDER BY score ASC, id ASC
             LIMIT ?2",
        )?;

        let rows = stmt.query_map(params![threshold, limit], |row| {
            Ok(WordRecord {
                id: row.get(0)?,
                word: row.get(1)?,
                translation: row.get(2)?,
                score: row.get(3)?,
            })
        })?;

        let words = rows.collect::<SqliteResult<Vec<_>>>()?;
        Ok(words)
    }

    /// Increment the score of every listed word. Unknown ids are skipped.
    pub fn increment_word_scores(&self, ids: &[WordId]) -> SqliteResult<usize> {
        if ids.is_empty() {
            return Ok(0);
        }
        let conn = self.conn();
        let sql = format!(
            "UPDATE vocabulary
             SET score = score + 1, updated_at = datetime('now')
             WHERE id IN ({})",
            id_placeholders(ids.len())
        );
        conn.execute(&sql, params_from_iter(ids.iter()))
    }

    /// Delete every listed word. Unknown ids are skipped.
    pub fn delete_words(&self, ids: &[WordId]) -> SqliteResult<usize> {
        if ids.is_empty() {
            return Ok(0);
        }
        let conn = self.conn();
        let sql = format!(
            "DELETE FROM vocabulary WHERE id IN ({})",
            id_placeholders(ids.len())
        );
        conn.execute(&sql, params_from_iter(ids.iter()))
    }

    pub fn vocabulary_stats(&self, threshold: u32) -> SqliteResult<VocabularyStats> {
        let conn = self.conn();
        let total_words: i64 = conn.query_row("SELECT COUNT(*) FROM vocabulary", [], |r| r.get(0))?;
        let memorized_count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM vocabulary WHERE score >= ?1",
            params![threshold],
            |r| r.get(0),
        )?;
        Ok(VocabularyStats {
            total_words,
            memorized_count,
        })
    }
}
