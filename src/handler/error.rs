use crate::handler::env::EnvError;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(Box<dyn std::error::Error + Send + Sync>),

    #[error("HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Missing key in remote configuration: {0}")]
    MissingConfigKey(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Environment error: {0}")]
    EnvError(#[from] EnvError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Not authenticated")]
    NotAuthenticated,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::RequestFailed(Box::new(err))
    }
}
