//! Raw post content as delivered by a feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single post fetched from a feed, before extraction.
///
/// Immutable once fetched; the extractor only ever reads `text`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPost {
    /// Feed-assigned post identifier
    pub id: String,

    /// Full post text, untouched
    pub text: String,

    /// When the post was published
    pub created_at: DateTime<Utc>,
}

impl RawPost {
    /// Create a post with the current time as its timestamp.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    /// Set the publication timestamp.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}
