//! Vocabulary poller.
//!
//! Polls a Twitter timeline on a fixed interval, extracts vocabulary pairs
//! from new tweets, and inserts unseen terms into an Atlas collection.

mod adapters;
mod config;
mod cursor_file;

use std::time::Duration;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adapters::{AtlasVocabStore, TwitterFeed};
use atlas_client::AtlasClient;
use config::Config;
use cursor_file::FileCursorStore;
use twitter::TwitterClient;
use vocab::{harvest_once, CursorStore, FeedExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,vocab=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        username = %config.twitter_username,
        interval_secs = config.poll_interval_secs,
        "Starting vocabulary poller"
    );

    let feed = TwitterFeed::for_username(
        TwitterClient::new(config.twitter_bearer_token.clone()),
        &config.twitter_username,
    )
    .await
    .context("Failed to resolve Twitter user")?
    .rate_limited(config.feed_requests_per_second);

    let store = AtlasVocabStore::new(
        AtlasClient::new(
            config.atlas_base_url.clone(),
            config.atlas_api_key.clone(),
            config.atlas_data_source.clone(),
            config.atlas_database.clone(),
        ),
        config.atlas_collection.clone(),
    );

    let cursors = FileCursorStore::new(&config.cursor_path);

    let mut interval = tokio::time::interval(Duration::from_secs(config.poll_interval_secs));

    loop {
        tokio::select! {
            _ = interval.tick() => {
                run_pass(&feed, &store, &cursors, config.fetch_limit).await;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutting down");
                break;
            }
        }
    }

    Ok(())
}

/// One polling pass. Failures are logged and the loop keeps its schedule;
/// there is no retry beyond the next tick.
async fn run_pass(
    feed: &impl vocab::PostFeed,
    store: &impl vocab::VocabStore,
    cursors: &FileCursorStore,
    fetch_limit: u32,
) {
    let cursor = match cursors.load().await {
        Ok(cursor) => cursor,
        Err(err) => {
            tracing::error!(error = %err, "Failed to load cursor, skipping pass");
            return;
        }
    };

    match harvest_once(feed, store, cursor.as_ref(), fetch_limit).await {
        Ok(report) => {
            if let Some(next) = &report.next_cursor {
                if let Err(err) = cursors.save(next).await {
                    tracing::error!(error = %err, "Failed to save cursor");
                }
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "Harvest pass failed");
        }
    }
}
