//! Error types for the sentiment client

use thiserror::Error;

/// Message shown when the input is empty after trimming
pub const EMPTY_REVIEW_MESSAGE: &str = "Please enter some text to analyze";

/// Message shown for every request-class failure
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze text. Please try again later.";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClientError {
    pub fn empty_review() -> Self {
        Self::Validation(EMPTY_REVIEW_MESSAGE.to_string())
    }

    /// Transport, status and decode failures all surface the same way
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Status { .. } | Self::Decode(_)
        )
    }

    /// Text safe to show to the user. Underlying detail stays in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            _ => ANALYSIS_FAILED_MESSAGE.to_string(),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

impl From<config::ConfigError> for ClientError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
