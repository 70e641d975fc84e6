use thiserror::Error;

/// Errors from the Atlas Data API client.
#[derive(Debug, Error)]
pub enum AtlasError {
    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the Data API
    #[error("Atlas Data API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, AtlasError>;
