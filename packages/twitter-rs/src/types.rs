use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A single tweet from the user-timeline endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Tweet {
    pub id: String,
    pub text: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Pagination metadata returned alongside a timeline page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TweetsMeta {
    pub result_count: u32,
    pub newest_id: Option<String>,
    pub oldest_id: Option<String>,
    pub next_token: Option<String>,
}

/// One page of a user's timeline.
///
/// `data` is absent entirely when there are no new tweets.
#[derive(Debug, Clone, Deserialize)]
pub struct TweetsResponse {
    #[serde(default)]
    pub data: Vec<Tweet>,
    #[serde(default)]
    pub meta: TweetsMeta,
}

/// A user record from the lookup-by-username endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
}

/// Wrapper for single-object API responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}
