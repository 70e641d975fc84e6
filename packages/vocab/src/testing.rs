//! Testing utilities including a mock feed.
//!
//! Useful for testing harvest logic without a network or a real feed API.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use crate::error::{FeedError, FeedResult};
use crate::traits::feed::{FeedPage, PostFeed};
use crate::types::{Cursor, RawPost};

/// Record of a call made to the mock feed.
#[derive(Debug, Clone)]
pub struct MockFeedCall {
    pub cursor: Option<String>,
    pub limit: u32,
}

/// A mock feed that serves canned pages in order and records calls.
///
/// Each `fetch` pops the next queued page; once the queue is empty it
/// returns empty pages. Build with [`MockFeed::with_page`] or
/// [`MockFeed::with_posts`].
#[derive(Default)]
pub struct MockFeed {
    pages: Arc<RwLock<VecDeque<FeedPage>>>,
    fail_next: Arc<RwLock<Option<String>>>,
    calls: Arc<RwLock<Vec<MockFeedCall>>>,
}

impl MockFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a page of posts; the cursor is derived from the first post.
    pub fn with_posts(self, posts: Vec<RawPost>) -> Self {
        self.pages.write().unwrap().push_back(FeedPage::new(posts));
        self
    }

    /// Queue a prebuilt page.
    pub fn with_page(self, page: FeedPage) -> Self {
        self.pages.write().unwrap().push_back(page);
        self
    }

    /// Make the next fetch fail with an API error.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        *self.fail_next.write().unwrap() = Some(message.into());
        self
    }

    /// All calls made to this mock.
    pub fn calls(&self) -> Vec<MockFeedCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl PostFeed for MockFeed {
    async fn fetch(&self, cursor: Option<&Cursor>, limit: u32) -> FeedResult<FeedPage> {
        self.calls.write().unwrap().push(MockFeedCall {
            cursor: cursor.map(|c| c.as_str().to_string()),
            limit,
        });

        if let Some(message) = self.fail_next.write().unwrap().take() {
            return Err(FeedError::Api {
                status: 500,
                message,
            });
        }

        Ok(self
            .pages
            .write()
            .unwrap()
            .pop_front()
            .unwrap_or_default())
    }
}
