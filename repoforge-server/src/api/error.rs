//! API Error Handling
//!
//! Converts errors into HTTP responses carrying an [`ApiError`] body.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use repoforge_core::domain::error::ApiError;

/// Error returned by handlers
#[derive(Debug)]
pub enum ResponseError {
    /// Request body is not the JSON the endpoint expects
    InvalidBody(JsonRejection),
    /// Failure already expressed as an API error
    Api(ApiError),
}

impl IntoResponse for ResponseError {
    fn into_response(self) -> Response {
        let error = match self {
            ResponseError::InvalidBody(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection.body_text());
                ApiError::bad_request("invalid json body").with_error(rejection.body_text())
            }
            ResponseError::Api(err) => {
                if err.status >= 500 {
                    tracing::error!("Internal error: {}", err);
                }
                err
            }
        };

        (status_code(error.status), Json(error)).into_response()
    }
}

impl From<JsonRejection> for ResponseError {
    fn from(rejection: JsonRejection) -> Self {
        ResponseError::InvalidBody(rejection)
    }
}

impl From<ApiError> for ResponseError {
    fn from(err: ApiError) -> Self {
        ResponseError::Api(err)
    }
}

/// Maps a numeric status onto an HTTP status, falling back to 500
pub fn status_code(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

pub type ApiResult<T> = Result<T, ResponseError>;
