//! Rate-limited feed wrapper.
//!
//! Wraps any PostFeed implementation with rate limiting using the governor
//! crate, so polling never exceeds the remote API's request budget.

use async_trait::async_trait;
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;

use crate::error::FeedResult;
use crate::traits::feed::{FeedPage, PostFeed};
use crate::types::Cursor;

type DefaultRateLimiter = RateLimiter<
    governor::state::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
>;

/// A feed wrapper that enforces rate limits before every fetch.
pub struct RateLimitedFeed<F: PostFeed> {
    inner: F,
    limiter: Arc<DefaultRateLimiter>,
}

impl<F: PostFeed> RateLimitedFeed<F> {
    /// Create a new rate-limited feed.
    ///
    /// # Arguments
    /// * `feed` - The underlying feed to wrap
    /// * `requests_per_second` - Maximum fetches per second
    pub fn new(feed: F, requests_per_second: u32) -> Self {
        let quota = Quota::per_second(
            NonZeroU32::new(requests_per_second).expect("requests_per_second must be > 0"),
        );
        Self {
            inner: feed,
            limiter: Arc::new(RateLimiter::direct(quota)),
        }
    }

    /// Create with a custom quota.
    pub fn with_quota(feed: F, quota: Quota) -> Self {
        Self {
            inner: feed,
            limiter: Arc::new(RateLimiter::direct(quota)),
        }
    }

    /// Create with burst support.
    pub fn with_burst(feed: F, requests_per_second: u32, burst: u32) -> Self {
        let quota = Quota::per_second(
            NonZeroU32::new(requests_per_second).expect("requests_per_second must be > 0"),
        )
        .allow_burst(NonZeroU32::new(burst).expect("burst must be > 0"));

        Self {
            inner: feed,
            limiter: Arc::new(RateLimiter::direct(quota)),
        }
    }

    async fn wait_for_permit(&self) {
        self.limiter.until_ready().await;
    }
}

#[async_trait]
impl<F: PostFeed> PostFeed for RateLimitedFeed<F> {
    async fn fetch(&self, cursor: Option<&Cursor>, limit: u32) -> FeedResult<FeedPage> {
        self.wait_for_permit().await;
        self.inner.fetch(cursor, limit).await
    }
}

/// Extension trait for easy rate limiting.
pub trait FeedExt: PostFeed + Sized {
    /// Wrap this feed with rate limiting.
    fn rate_limited(self, requests_per_second: u32) -> RateLimitedFeed<Self> {
        RateLimitedFeed::new(self, requests_per_second)
    }

    /// Wrap with rate limiting and burst support.
    fn rate_limited_with_burst(self, requests_per_second: u32, burst: u32) -> RateLimitedFeed<Self> {
        RateLimitedFeed::with_burst(self, requests_per_second, burst)
    }
}

impl<F: PostFeed + Sized> FeedExt for F {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockFeed;
    use crate::types::RawPost;
    use std::time::Instant;

    #[tokio::test]
    async fn fetches_are_rate_limited() {
        let mock = MockFeed::new()
            .with_posts(vec![RawPost::new("1", "cat 猫")])
            .with_posts(vec![RawPost::new("2", "dog 犬")])
            .with_posts(vec![RawPost::new("3", "bird 鳥")]);

        // 2 requests per second
        let feed = mock.rate_limited(2);

        let start = Instant::now();
        for _ in 0..3 {
            feed.fetch(None, 10).await.unwrap();
        }
        let elapsed = start.elapsed();

        // First fetch is immediate, the rest wait for permits
        assert!(elapsed.as_millis() >= 500, "rate limiting not applied: {:?}", elapsed);
    }

    #[tokio::test]
    async fn extension_trait_wraps_any_feed() {
        let feed = MockFeed::new().rate_limited_with_burst(5, 10);
        let page = feed.fetch(None, 10).await.unwrap();
        assert!(page.is_empty());
    }
}
