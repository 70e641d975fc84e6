//! Adapters wiring the REST clients into the vocab trait seams.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};

use atlas_client::AtlasClient;
use twitter::TwitterClient;
use vocab::error::{FeedError, FeedResult, StoreError, StoreResult};
use vocab::traits::feed::{FeedPage, PostFeed};
use vocab::traits::store::VocabStore;
use vocab::types::{Cursor, RawPost, StoredPair, VocabularyPair};

/// A Twitter user timeline as a `PostFeed`.
///
/// The cursor is the newest tweet id seen so far, passed back to the API as
/// `since_id`.
pub struct TwitterFeed {
    client: TwitterClient,
    user_id: String,
}

impl TwitterFeed {
    /// Resolve `username` once and poll that user's timeline from then on.
    pub async fn for_username(client: TwitterClient, username: &str) -> Result<Self, FeedError> {
        let user = client
            .user_by_username(username)
            .await
            .map_err(feed_error)?;
        tracing::info!(username, user_id = %user.id, "Resolved timeline user");
        Ok(Self {
            client,
            user_id: user.id,
        })
    }
}

#[async_trait]
impl PostFeed for TwitterFeed {
    async fn fetch(&self, cursor: Option<&Cursor>, limit: u32) -> FeedResult<FeedPage> {
        let page = self
            .client
            .user_tweets(&self.user_id, cursor.map(Cursor::as_str), limit)
            .await
            .map_err(feed_error)?;

        let posts = page
            .data
            .into_iter()
            .map(|tweet| RawPost {
                id: tweet.id,
                text: tweet.text,
                created_at: tweet.created_at.unwrap_or_else(Utc::now),
            })
            .collect();

        let next_cursor = page.meta.newest_id.map(Cursor::new);
        Ok(FeedPage { posts, next_cursor })
    }
}

fn feed_error(err: twitter::TwitterError) -> FeedError {
    match err {
        twitter::TwitterError::Api { status: 429, message } => {
            tracing::warn!(message, "Twitter rate limit hit");
            FeedError::RateLimitExceeded
        }
        twitter::TwitterError::Api { status, message } => FeedError::Api { status, message },
        other => FeedError::Http(Box::new(other)),
    }
}

/// An Atlas Data API collection as a `VocabStore`.
pub struct AtlasVocabStore {
    client: AtlasClient,
    collection: String,
}

impl AtlasVocabStore {
    pub fn new(client: AtlasClient, collection: String) -> Self {
        Self { client, collection }
    }
}

#[async_trait]
impl VocabStore for AtlasVocabStore {
    async fn find_by_term(&self, term: &str) -> StoreResult<Option<StoredPair>> {
        let document = self
            .client
            .find_one(&self.collection, json!({ "term": term }))
            .await
            .map_err(store_error)?;

        Ok(document.as_ref().map(stored_pair_from_document))
    }

    async fn insert(&self, pair: &VocabularyPair) -> StoreResult<StoredPair> {
        let id = self
            .client
            .insert_one(
                &self.collection,
                json!({ "term": pair.term, "translation": pair.translation }),
            )
            .await
            .map_err(store_error)?;

        Ok(StoredPair {
            id,
            term: pair.term.clone(),
            translation: pair.translation.clone(),
        })
    }
}

fn store_error(err: atlas_client::AtlasError) -> StoreError {
    match err {
        atlas_client::AtlasError::Api { status, message } => StoreError::Api { status, message },
        other => StoreError::Backend(Box::new(other)),
    }
}

/// Map a Data API document onto a `StoredPair`.
///
/// The Data API speaks MongoDB extended JSON, so an ObjectId arrives as
/// `{"$oid": "..."}`; plain string ids (hand-inserted documents) are
/// accepted too.
fn stored_pair_from_document(doc: &Value) -> StoredPair {
    let id = doc["_id"]["$oid"]
        .as_str()
        .or_else(|| doc["_id"].as_str())
        .unwrap_or_default()
        .to_string();
    StoredPair {
        id,
        term: doc["term"].as_str().unwrap_or_default().to_string(),
        translation: doc["translation"].as_str().unwrap_or_default().to_string(),
    }
}
