//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use sandman_web_domain::error::{NotFoundError, SandmanError};

/// Maps [`SandmanError`] to an HTTP response with appropriate status code.
pub struct PageError(SandmanError);

impl From<SandmanError> for PageError {
    fn from(err: SandmanError) -> Self {
        Self(err)
    }
}

impl From<NotFoundError> for PageError {
    fn from(err: NotFoundError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            SandmanError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            SandmanError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
