//! Errors of the text-level entry points.

use pomoshtnik_validator::foundation::ValidationError;

/// Why a document could not be turned into a typed value.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The text is not JSON at all.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON does not have the expected shape.
    #[error("invalid payload: {0}")]
    Invalid(#[from] ValidationError),
}

impl DecodeError {
    /// The validation error, if the text parsed but did not decode.
    #[must_use]
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Json(_) => None,
            Self::Invalid(error) => Some(error),
        }
    }
}

/// Result type for text-level decoding.
pub type Result<T> = std::result::Result<T, DecodeError>;
