//! LLM error types

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during LLM operations
///
/// `ApiError` and `InvalidResponse` mean the service answered but the answer
/// is unusable; `Network` means the service could not be reached; `Timeout`
/// means the per-request deadline elapsed. No variant is retried anywhere in
/// this crate - a failed request fails the review run.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),
}

impl LlmError {
    /// Check if the model service could not be reached at all
    pub fn is_unavailable(&self) -> bool {
        matches!(self, LlmError::Network(_))
    }

    /// Check if the per-request timeout elapsed
    pub fn is_timeout(&self) -> bool {
        matches!(self, LlmError::Timeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_unavailable() {
        let err = LlmError::ApiError {
            status: 500,
            message: "Server error".to_string(),
        };
        assert!(!err.is_unavailable());

        let err = LlmError::InvalidResponse("empty completion".to_string());
        assert!(!err.is_unavailable());
    }

    #[test]
    fn test_is_timeout() {
        assert!(LlmError::Timeout(Duration::from_secs(30)).is_timeout());
        assert!(!LlmError::InvalidResponse("bad".to_string()).is_timeout());
    }

    #[test]
    fn test_display() {
        let err = LlmError::ApiError {
            status: 429,
            message: "rate limited".to_string(),
        };
        assert_eq!(err.to_string(), "API error 429: rate limited");
    }
}
