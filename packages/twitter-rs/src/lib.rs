//! Pure Twitter API v2 REST client.
//!
//! A minimal client for the pieces of the v2 API a timeline poller needs:
//! resolving a username to a user id and paging through that user's tweets.
//!
//! # Example
//!
//! ```rust,ignore
//! use twitter::TwitterClient;
//!
//! let client = TwitterClient::new("your-bearer-token".into());
//!
//! let user = client.user_by_username("nihongo_vocab").await?;
//! let page = client.user_tweets(&user.id, None, 20).await?;
//! for tweet in &page.data {
//!     println!("{}", tweet.text);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{Result, TwitterError};
pub use types::{Tweet, TweetsMeta, TweetsResponse, User};

use types::ApiResponse;

const BASE_URL: &str = "https://api.twitter.com/2";

pub struct TwitterClient {
    client: reqwest::Client,
    bearer_token: String,
}

impl TwitterClient {
    pub fn new(bearer_token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            bearer_token,
        }
    }

    /// Resolve a username (without the `@`) to a user record.
    pub async fn user_by_username(&self, username: &str) -> Result<User> {
        let url = format!("{}/users/by/username/{}", BASE_URL, username);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.bearer_token)
            .send()
            .await?;

        let status = resp.status();
        if status.as_u16() == 404 {
            return Err(TwitterError::UserNotFound(username.to_string()));
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TwitterError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let api_resp: ApiResponse<User> = resp.json().await?;
        Ok(api_resp.data)
    }

    /// Fetch one page of a user's timeline, newest first.
    ///
    /// `since_id` limits the page to tweets newer than that id;
    /// `max_results` is clamped to the API's 5..=100 window.
    pub async fn user_tweets(
        &self,
        user_id: &str,
        since_id: Option<&str>,
        max_results: u32,
    ) -> Result<TweetsResponse> {
        let url = format!("{}/users/{}/tweets", BASE_URL, user_id);

        let max_results = max_results.clamp(5, 100).to_string();
        let mut query: Vec<(&str, &str)> = vec![
            ("tweet.fields", "created_at"),
            ("max_results", &max_results),
        ];
        if let Some(since_id) = since_id {
            query.push(("since_id", since_id));
        }

        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.bearer_token)
            .query(&query)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TwitterError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let page: TweetsResponse = resp.json().await?;
        tracing::debug!(
            user_id,
            count = page.meta.result_count,
            newest_id = page.meta.newest_id.as_deref().unwrap_or("-"),
            "Fetched timeline page"
        );
        Ok(page)
    }
}
