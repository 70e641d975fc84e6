use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Poller configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub twitter_bearer_token: String,
    pub twitter_username: String,
    pub atlas_base_url: String,
    pub atlas_api_key: String,
    pub atlas_data_source: String,
    pub atlas_database: String,
    pub atlas_collection: String,
    pub poll_interval_secs: u64,
    pub fetch_limit: u32,
    pub feed_requests_per_second: u32,
    pub cursor_path: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let feed_requests_per_second: u32 = env::var("FEED_RPS")
            .unwrap_or_else(|_| "1".to_string())
            .parse()
            .context("FEED_RPS must be a valid number")?;
        anyhow::ensure!(
            feed_requests_per_second >= 1,
            "FEED_RPS must be at least 1"
        );

        Ok(Self {
            twitter_bearer_token: env::var("TWITTER_BEARER_TOKEN")
                .context("TWITTER_BEARER_TOKEN must be set")?,
            twitter_username: env::var("TWITTER_USERNAME")
                .context("TWITTER_USERNAME must be set")?,
            atlas_base_url: env::var("ATLAS_BASE_URL")
                .context("ATLAS_BASE_URL must be set")?,
            atlas_api_key: env::var("ATLAS_API_KEY")
                .context("ATLAS_API_KEY must be set")?,
            atlas_data_source: env::var("ATLAS_DATA_SOURCE")
                .unwrap_or_else(|_| "Cluster0".to_string()),
            atlas_database: env::var("ATLAS_DATABASE")
                .unwrap_or_else(|_| "vocab".to_string()),
            atlas_collection: env::var("ATLAS_COLLECTION")
                .unwrap_or_else(|_| "words".to_string()),
            poll_interval_secs: env::var("POLL_INTERVAL_SECS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .context("POLL_INTERVAL_SECS must be a valid number")?,
            fetch_limit: env::var("FETCH_LIMIT")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .context("FETCH_LIMIT must be a valid number")?,
            feed_requests_per_second,
            cursor_path: env::var("CURSOR_PATH")
                .unwrap_or_else(|_| ".vocab-cursor".to_string()),
        })
    }
}
