use thiserror::Error;

/// Errors from the Twitter API client.
#[derive(Debug, Error)]
pub enum TwitterError {
    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the API
    #[error("Twitter API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Username lookup returned no user
    #[error("user not found: {0}")]
    UserNotFound(String),
}

pub type Result<T> = std::result::Result<T, TwitterError>;
