use berea_core::HttpError;
use http::StatusCode;
use thiserror::Error;

/// Errors that can occur during chat completion
#[derive(Debug, Error)]
pub enum ChatError {
    /// Client sent a malformed or invalid request
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Completion API returned a non-success status
    #[error("completion API error: {0}")]
    Upstream(String),

    /// Request could not be sent or the connection failed
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Completion API returned no usable content
    #[error("completion API returned an empty reply")]
    EmptyCompletion,
}

impl HttpError for ChatError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) | Self::Request(_) | Self::EmptyCompletion => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::InvalidRequest(_) => "invalid_request_error",
            Self::Upstream(_) | Self::Request(_) | Self::EmptyCompletion => "upstream_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Request(_) => "failed to reach the completion service".to_owned(),
            other => other.to_string(),
        }
    }
}
