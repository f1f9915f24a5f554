//! Morpheme repository trait.

use async_trait::async_trait;

use crate::domain::entities::morpheme::{Morpheme, NewMorpheme};
use crate::errors::DomainError;

/// Repository trait for morpheme persistence
#[async_trait]
pub trait MorphemeRepository: Send + Sync {
    /// Every morpheme, ordered by id
    async fn list_all(&self) -> Result<Vec<Morpheme>, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Morpheme>, DomainError>;

    async fn create(&self, morpheme: NewMorpheme) -> Result<Morpheme, DomainError>;
}
