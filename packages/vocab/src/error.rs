//! Typed errors for the vocab library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to keep the
//! trait seams strongly typed for callers.

use thiserror::Error;

/// Errors that can occur while fetching posts from a feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Transport-level failure (connection, TLS, deserialization)
    #[error("feed transport error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The feed API rejected the request
    #[error("feed API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The feed API signalled its rate limit
    #[error("feed rate limit exceeded")]
    RateLimitExceeded,

    /// The cursor was rejected by the feed
    #[error("invalid cursor: {0}")]
    InvalidCursor(String),
}

/// Errors that can occur against the vocabulary document store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend failure (transport or server-side)
    #[error("store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The store API rejected the request
    #[error("store API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Errors that can occur loading or saving the poll cursor.
#[derive(Debug, Error)]
pub enum CursorError {
    /// Filesystem-backed cursor storage failed
    #[error("cursor I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other cursor backend failure
    #[error("cursor backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors from a harvest pass. Extraction itself never fails; only the
/// collaborators do.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("fetch failed: {0}")]
    Feed(#[from] FeedError),

    #[error("store operation failed: {0}")]
    Store(#[from] StoreError),
}

/// Result type alias for feed operations.
pub type FeedResult<T> = std::result::Result<T, FeedError>;

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type alias for cursor operations.
pub type CursorResult<T> = std::result::Result<T, CursorError>;

/// Result type alias for harvest passes.
pub type HarvestResult<T> = std::result::Result<T, HarvestError>;
