//! Vocabulary pairs, extracted and stored.

use serde::{Deserialize, Serialize};

/// A term and its translation, as produced by [`crate::extract`].
///
/// Invariants upheld by the extractor: both fields are non-empty after
/// trimming, `term` contains at least one ASCII letter, and `translation`
/// contains at least one Japanese-script character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyPair {
    pub term: String,
    pub translation: String,
}

impl VocabularyPair {
    pub fn new(term: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            translation: translation.into(),
        }
    }
}

/// A vocabulary pair as persisted in a document store.
///
/// `id` is generated by the store backend, never by the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPair {
    pub id: String,
    pub term: String,
    pub translation: String,
}
