//! Provider error types.

use thiserror::Error;

use interviewsim_core::error::EvaluationError;

/// Errors that can occur when talking to the model provider or the
/// evaluation endpoint.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The API returned a 429 rate limit response.
    #[error("rate limited, retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    /// Authentication failed (invalid API key).
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The API returned an error response.
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The reply was not a valid `{"score", "note"}` evaluation.
    #[error("invalid evaluation: {reason}")]
    InvalidEvaluation { reason: String, raw: String },
}

impl ProviderError {
    /// HTTP status to report to callers of the evaluation endpoint.
    pub fn status_code(&self) -> u16 {
        match self {
            ProviderError::RateLimited { .. } => 429,
            ProviderError::AuthenticationFailed(_) => 401,
            ProviderError::ApiError { status, .. } if (400..600).contains(status) => *status,
            _ => 500,
        }
    }

    pub(crate) fn from_reqwest(e: reqwest::Error, timeout_secs: u64) -> Self {
        if e.is_timeout() {
            ProviderError::Timeout(timeout_secs)
        } else {
            ProviderError::NetworkError(e.to_string())
        }
    }
}

impl From<ProviderError> for EvaluationError {
    fn from(e: ProviderError) -> Self {
        let message = e.to_string();
        let raw = match e {
            ProviderError::InvalidEvaluation { raw, .. } => Some(raw),
            _ => None,
        };
        EvaluationError::RemoteEvaluation { message, raw }
    }
}
