//! Error types for the Repoforge clients

use repoforge_core::domain::error::{ApiError, STATUS_INTERNAL_SERVER_ERROR};
use thiserror::Error;

/// Result type alias for service client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when calling the Repoforge service
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Service answered with an error body
    #[error("API error (status {}): {}", .0.status, .0.message)]
    Api(ApiError),

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Status code reported by the service, if it answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status),
            _ => None,
        }
    }
}

/// Failure of a single call to the repository provider
///
/// Each variant maps onto one arm of the error taxonomy; see
/// [`ProviderError::into_api_error`].
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request never completed (connect, TLS, timeout, ...)
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be read
    #[error("invalid response body")]
    UnreadableBody(#[source] reqwest::Error),

    /// Non-2xx response whose body is not a provider error document
    #[error("invalid json response body")]
    InvalidErrorBody(#[source] serde_json::Error),

    /// Provider completed the call and refused it
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// 2xx response whose body is not a repository document
    #[error("error when trying to unmarshal body successful response")]
    InvalidSuccessBody(#[source] serde_json::Error),
}

impl ProviderError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Status code surfaced to callers
    pub fn status(&self) -> u16 {
        match self {
            Self::Rejected { status, .. } => *status,
            _ => STATUS_INTERNAL_SERVER_ERROR,
        }
    }

    pub fn into_api_error(self) -> ApiError {
        ApiError::new(self.status(), self.to_string())
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        err.into_api_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_keeps_provider_status() {
        let err = ProviderError::rejected(401, "Requires authentication").into_api_error();
        assert_eq!(err, ApiError::new(401, "Requires authentication"));
    }

    #[test]
    fn test_malformed_bodies_map_to_500() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ProviderError::InvalidErrorBody(parse_err).into_api_error();
        assert_eq!(err.status, 500);
        assert_eq!(err.message, "invalid json response body");

        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ApiError = ProviderError::InvalidSuccessBody(parse_err).into();
        assert_eq!(err.status, 500);
        assert_eq!(
            err.message,
            "error when trying to unmarshal body successful response"
        );
    }

    #[test]
    fn test_client_error_status() {
        let err = ClientError::Api(ApiError::bad_request("invalid json body"));
        assert_eq!(err.status(), Some(400));

        let err = ClientError::ParseError("eof".to_string());
        assert_eq!(err.status(), None);
    }
}
