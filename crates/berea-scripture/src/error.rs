use berea_core::HttpError;
use http::StatusCode;
use thiserror::Error;

/// Errors that can occur during scripture lookup
#[derive(Debug, Error)]
pub enum ScriptureError {
    /// Requested translation is not in the configured registry
    #[error("unsupported translation: {translation}")]
    UnknownTranslation { translation: String },

    /// Book name did not resolve against the book table
    #[error("unrecognized book: {book}")]
    UnknownBook { book: String },

    /// Upstream reported the reference does not exist
    #[error("verse not found: {reference}")]
    VerseNotFound { reference: String },

    /// Upstream returned a non-success status
    #[error("scripture API error: {0}")]
    Upstream(String),

    /// Request could not be sent or the connection failed
    #[error("scripture request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream response did not match the expected shape
    #[error("malformed scripture response: {0}")]
    MalformedResponse(String),
}

impl HttpError for ScriptureError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownTranslation { .. } | Self::UnknownBook { .. } => StatusCode::BAD_REQUEST,
            Self::VerseNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Upstream(_) | Self::Request(_) | Self::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::UnknownTranslation { .. } | Self::UnknownBook { .. } => "invalid_request_error",
            Self::VerseNotFound { .. } => "not_found_error",
            Self::Upstream(_) | Self::Request(_) | Self::MalformedResponse(_) => "upstream_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Request(_) => "failed to reach the scripture service".to_owned(),
            other => other.to_string(),
        }
    }
}
