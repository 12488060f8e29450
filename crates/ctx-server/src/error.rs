//! HTTP-facing errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ctx_protocol::ContextError;
use tracing::warn;

/// A [`ContextError`] on its way out as an HTTP response.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub ContextError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.error_code().is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(%status, error = %self.0, "request failed");
        (status, Json(self.0.to_body())).into_response()
    }
}

/// Failures starting the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind listener: {0}")]
    Bind(#[from] std::io::Error),
}
