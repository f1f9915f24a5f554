//! SQL implementation of the WordRepository trait.
//!
//! A word's decomposition lives in `word_morphemes`, one row per position.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::any::AnyRow;
use sqlx::Row;

use wc_core::domain::entities::word::{NewWord, Word};
use wc_core::errors::{DomainError, ValidationError};
use wc_core::repositories::WordRepository;

use super::{is_unique_violation, query_failed};
use crate::database::connection::{inserted_id, DatabasePool};

/// SQL implementation of WordRepository
pub struct SqlWordRepository {
    pool: DatabasePool,
}

impl SqlWordRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Map a `words` row; morpheme ids are filled in by the caller
    fn row_to_word(row: &AnyRow) -> Result<Word, DomainError> {
        Ok(Word {
            id: row.try_get("id").map_err(|e| query_failed("read id", e))?,
            text: row
                .try_get("text")
                .map_err(|e| query_failed("read text", e))?,
            morpheme_ids: Vec::new(),
            points: row
                .try_get("points")
                .map_err(|e| query_failed("read points", e))?,
            definition: row
                .try_get("definition")
                .map_err(|e| query_failed("read definition", e))?,
        })
    }

    /// Group `(word_id, morpheme_id)` rows, already ordered by position
    fn group_morpheme_ids(rows: &[AnyRow]) -> Result<HashMap<i64, Vec<i64>>, DomainError> {
        let mut grouped: HashMap<i64, Vec<i64>> = HashMap::new();
        for row in rows {
            let word_id: i64 = row
                .try_get("word_id")
                .map_err(|e| query_failed("read word_id", e))?;
            let morpheme_id: i64 = row
                .try_get("morpheme_id")
                .map_err(|e| query_failed("read morpheme_id", e))?;
            grouped.entry(word_id).or_default().push(morpheme_id);
        }
        Ok(grouped)
    }

    fn attach_morpheme_ids(
        word_rows: &[AnyRow],
        link_rows: &[AnyRow],
    ) -> Result<Vec<Word>, DomainError> {
        let mut ids = Self::group_morpheme_ids(link_rows)?;
        word_rows
            .iter()
            .map(|row| {
                let mut word = Self::row_to_word(row)?;
                word.morpheme_ids = ids.remove(&word.id).unwrap_or_default();
                Ok(word)
            })
            .collect()
    }
}

#[async_trait]
impl WordRepository for SqlWordRepository {
    async fn find_by_text(&self, text: &str) -> Result<Option<Word>, DomainError> {
        let row = sqlx::query("SELECT id, text, points, definition FROM words WHERE text = ?")
            .bind(text)
            .fetch_optional(self.pool.pool())
            .await
            .map_err(|e| query_failed("find word", e))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let mut word = Self::row_to_word(&row)?;

        let links = sqlx::query(
            "SELECT word_id, morpheme_id FROM word_morphemes WHERE word_id = ? ORDER BY position",
        )
        .bind(word.id)
        .fetch_all(self.pool.pool())
        .await
        .map_err(|e| query_failed("load word morphemes", e))?;

        word.morpheme_ids = Self::group_morpheme_ids(&links)?
            .remove(&word.id)
            .unwrap_or_default();
        Ok(Some(word))
    }

    async fn list_all(&self) -> Result<Vec<Word>, DomainError> {
        let words = sqlx::query("SELECT id, text, points, definition FROM words ORDER BY id")
            .fetch_all(self.pool.pool())
            .await
            .map_err(|e| query_failed("list words", e))?;

        let links = sqlx::query(
            "SELECT word_id, morpheme_id FROM word_morphemes ORDER BY word_id, position",
        )
        .fetch_all(self.pool.pool())
        .await
        .map_err(|e| query_failed("load word morphemes", e))?;

        Self::attach_morpheme_ids(&words, &links)
    }

    async fn create(&self, word: NewWord) -> Result<Word, DomainError> {
        let mut tx = self
            .pool
            .pool()
            .begin()
            .await
            .map_err(|e| query_failed("begin transaction", e))?;

        let result = sqlx::query("INSERT INTO words (text, points, definition) VALUES (?, ?, ?)")
            .bind(&word.text)
            .bind(word.points)
            .bind(&word.definition)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::from(ValidationError::DuplicateValue {
                        field: "text".to_string(),
                    })
                } else {
                    query_failed("create word", e)
                }
            })?;
        let id = inserted_id(&result).map_err(|e| query_failed("read word id", e))?;

        for (position, morpheme_id) in word.morpheme_ids.iter().enumerate() {
            sqlx::query(
                "INSERT INTO word_morphemes (word_id, morpheme_id, position) VALUES (?, ?, ?)",
            )
            .bind(id)
            .bind(*morpheme_id)
            .bind(position as i64)
            .execute(&mut *tx)
            .await
            .map_err(|e| query_failed("link word morpheme", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| query_failed("commit transaction", e))?;
        tracing::debug!(word_id = id, text = %word.text, "Word row inserted");

        Ok(Word {
            id,
            text: word.text,
            morpheme_ids: word.morpheme_ids,
            points: word.points,
            definition: word.definition,
        })
    }

    async fn record_player_word(&self, user_id: i64, word_id: i64) -> Result<bool, DomainError> {
        let sql = format!(
            "{} INTO player_words (user_id, word_id) VALUES (?, ?)",
            self.pool.insert_ignore()
        );
        let result = sqlx::query(&sql)
            .bind(user_id)
            .bind(word_id)
            .execute(self.pool.pool())
            .await
            .map_err(|e| query_failed("record found word", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_player_words(&self, user_id: i64) -> Result<Vec<Word>, DomainError> {
        let words = sqlx::query(
            r#"
            SELECT w.id, w.text, w.points, w.definition
            FROM words w
            JOIN player_words pw ON pw.word_id = w.id
            WHERE pw.user_id = ?
            ORDER BY w.id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.pool())
        .await
        .map_err(|e| query_failed("list found words", e))?;

        let links = sqlx::query(
            r#"
            SELECT wm.word_id, wm.morpheme_id
            FROM word_morphemes wm
            JOIN player_words pw ON pw.word_id = wm.word_id
            WHERE pw.user_id = ?
            ORDER BY wm.word_id, wm.position
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.pool())
        .await
        .map_err(|e| query_failed("load word morphemes", e))?;

        Self::attach_morpheme_ids(&words, &links)
    }
}
