//! SQL implementation of the MorphemeRepository trait.

use async_trait::async_trait;
use sqlx::any::AnyRow;
use sqlx::Row;

use wc_core::domain::entities::morpheme::{Morpheme, NewMorpheme};
use wc_core::errors::DomainError;
use wc_core::repositories::MorphemeRepository;

use super::query_failed;
use crate::database::connection::{inserted_id, DatabasePool};

/// SQL implementation of MorphemeRepository
pub struct SqlMorphemeRepository {
    pool: DatabasePool,
}

impl SqlMorphemeRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    fn row_to_morpheme(row: &AnyRow) -> Result<Morpheme, DomainError> {
        Ok(Morpheme {
            id: row.try_get("id").map_err(|e| query_failed("read id", e))?,
            text: row
                .try_get("text")
                .map_err(|e| query_failed("read text", e))?,
            definition: row
                .try_get("definition")
                .map_err(|e| query_failed("read definition", e))?,
        })
    }
}

#[async_trait]
impl MorphemeRepository for SqlMorphemeRepository {
    async fn list_all(&self) -> Result<Vec<Morpheme>, DomainError> {
        let rows = sqlx::query("SELECT id, text, definition FROM morphemes ORDER BY id")
            .fetch_all(self.pool.pool())
            .await
            .map_err(|e| query_failed("list morphemes", e))?;

        rows.iter().map(Self::row_to_morpheme).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Morpheme>, DomainError> {
        let row = sqlx::query("SELECT id, text, definition FROM morphemes WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool.pool())
            .await
            .map_err(|e| query_failed("find morpheme", e))?;

        row.as_ref().map(Self::row_to_morpheme).transpose()
    }

    async fn create(&self, morpheme: NewMorpheme) -> Result<Morpheme, DomainError> {
        let result = sqlx::query("INSERT INTO morphemes (text, definition) VALUES (?, ?)")
            .bind(&morpheme.text)
            .bind(&morpheme.definition)
            .execute(self.pool.pool())
            .await
            .map_err(|e| query_failed("create morpheme", e))?;

        let id = inserted_id(&result).map_err(|e| query_failed("read morpheme id", e))?;
        Ok(Morpheme::new(id, morpheme.text, morpheme.definition))
    }
}
