//! Feed wrappers.

pub mod rate_limited;

pub use rate_limited::{FeedExt, RateLimitedFeed};
