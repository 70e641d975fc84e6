//! In-memory storage implementations for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{CursorResult, StoreResult};
use crate::traits::{CursorStore, VocabStore};
use crate::types::{Cursor, StoredPair, VocabularyPair};

/// In-memory vocabulary store keyed by `term`.
///
/// Useful for tests and local runs. Data is lost on restart.
pub struct MemoryVocabStore {
    pairs: RwLock<HashMap<String, StoredPair>>,
}

impl Default for MemoryVocabStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryVocabStore {
    pub fn new() -> Self {
        Self {
            pairs: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.pairs.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.read().unwrap().is_empty()
    }

    /// Clear all stored data.
    pub fn clear(&self) {
        self.pairs.write().unwrap().clear();
    }
}

#[async_trait]
impl VocabStore for MemoryVocabStore {
    async fn find_by_term(&self, term: &str) -> StoreResult<Option<StoredPair>> {
        Ok(self.pairs.read().unwrap().get(term).cloned())
    }

    async fn insert(&self, pair: &VocabularyPair) -> StoreResult<StoredPair> {
        let stored = StoredPair {
            id: uuid::Uuid::new_v4().to_string(),
            term: pair.term.clone(),
            translation: pair.translation.clone(),
        };
        self.pairs
            .write()
            .unwrap()
            .insert(stored.term.clone(), stored.clone());
        Ok(stored)
    }
}

/// In-memory cursor store.
#[derive(Default)]
pub struct MemoryCursorStore {
    cursor: RwLock<Option<Cursor>>,
}

impl MemoryCursorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with an existing cursor.
    pub fn with_cursor(cursor: Cursor) -> Self {
        Self {
            cursor: RwLock::new(Some(cursor)),
        }
    }
}

#[async_trait]
impl CursorStore for MemoryCursorStore {
    async fn load(&self) -> CursorResult<Option<Cursor>> {
        Ok(self.cursor.read().unwrap().clone())
    }

    async fn save(&self, cursor: &Cursor) -> CursorResult<()> {
        *self.cursor.write().unwrap() = Some(cursor.clone());
        Ok(())
    }
}
