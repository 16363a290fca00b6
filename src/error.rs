/// Error type shared by every TKDHub tool
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TkdError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid URL '{line}': {reason}")]
    InvalidUrl { line: String, reason: String },

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid verification payload: {0}")]
    InvalidPayload(String),

    #[error("generative API key is not configured")]
    MissingApiKey,

    #[error("invalid generative config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for TkdError {
    fn from(err: serde_json::Error) -> Self {
        TkdError::InvalidPayload(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TkdError>;
