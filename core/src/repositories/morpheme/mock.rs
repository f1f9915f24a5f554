//! Mock implementation of MorphemeRepository for testing

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::morpheme::{Morpheme, NewMorpheme};
use crate::errors::DomainError;

use super::trait_::MorphemeRepository;

/// Mock morpheme repository for testing
#[derive(Clone, Default)]
pub struct MockMorphemeRepository {
    morphemes: Arc<RwLock<BTreeMap<i64, Morpheme>>>,
}

impl MockMorphemeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository preloaded with `(text, definition)` pairs, ids from 1
    pub fn with_morphemes(entries: &[(&str, &str)]) -> Self {
        let morphemes = entries
            .iter()
            .enumerate()
            .map(|(i, (text, definition))| {
                let id = i as i64 + 1;
                (id, Morpheme::new(id, *text, *definition))
            })
            .collect();
        Self {
            morphemes: Arc::new(RwLock::new(morphemes)),
        }
    }
}

#[async_trait]
impl MorphemeRepository for MockMorphemeRepository {
    async fn list_all(&self) -> Result<Vec<Morpheme>, DomainError> {
        Ok(self.morphemes.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Morpheme>, DomainError> {
        Ok(self.morphemes.read().await.get(&id).cloned())
    }

    async fn create(&self, morpheme: NewMorpheme) -> Result<Morpheme, DomainError> {
        let mut morphemes = self.morphemes.write().await;
        let id = morphemes.keys().next_back().copied().unwrap_or(0) + 1;
        let created = Morpheme::new(id, morpheme.text, morpheme.definition);
        morphemes.insert(id, created.clone());
        Ok(created)
    }
}
