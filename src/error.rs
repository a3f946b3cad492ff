// Error types for the gitfolio application.
// Distinguishes transport, auth, rate-limit, and payload failures so the
// console can say which one masked the live data.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("authentication failed: invalid or expired token")]
    Unauthorized,

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("rate limit exceeded, resets at {reset_at}")]
    RateLimited { reset_at: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
