//! Feed trait for pluggable post sources.

use async_trait::async_trait;

use crate::error::FeedResult;
use crate::types::{Cursor, RawPost};

/// One page of posts from a feed.
#[derive(Debug, Clone, Default)]
pub struct FeedPage {
    /// Posts in the order the feed returned them (newest first for the
    /// Twitter implementation). The harvest driver is order-agnostic.
    pub posts: Vec<RawPost>,

    /// Cursor marking the newest post in this page, if any. `None` when
    /// the page is empty.
    pub next_cursor: Option<Cursor>,
}

impl FeedPage {
    pub fn new(posts: Vec<RawPost>) -> Self {
        let next_cursor = posts.first().map(|p| Cursor::new(p.id.clone()));
        Self { posts, next_cursor }
    }

    /// Override the cursor (for feeds with token-based pagination).
    pub fn with_cursor(mut self, cursor: Cursor) -> Self {
        self.next_cursor = Some(cursor);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// A source of posts, polled one page at a time.
#[async_trait]
pub trait PostFeed: Send + Sync {
    /// Fetch posts published after `cursor` (all available when `None`),
    /// up to `limit` posts.
    async fn fetch(&self, cursor: Option<&Cursor>, limit: u32) -> FeedResult<FeedPage>;
}
