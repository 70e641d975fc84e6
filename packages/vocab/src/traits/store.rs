//! Storage trait for the vocabulary document collection.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::types::{StoredPair, VocabularyPair};

/// A remote document collection of vocabulary pairs.
///
/// Duplicate detection is exact, case-sensitive equality on `term`, and is
/// the caller's responsibility: query first, insert when absent. The two
/// calls are deliberately not guarded by any transaction; concurrent
/// harvesters can race and double-insert.
#[async_trait]
pub trait VocabStore: Send + Sync {
    /// Find an existing document whose `term` equals `term` exactly.
    async fn find_by_term(&self, term: &str) -> StoreResult<Option<StoredPair>>;

    /// Insert a new document. The backend generates the id.
    async fn insert(&self, pair: &VocabularyPair) -> StoreResult<StoredPair>;
}
