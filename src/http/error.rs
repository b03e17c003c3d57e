//! API error type and its wire mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by route handlers and middleware.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Unknown project id. The variant carries the raw path text so the
    /// message echoes exactly what the client sent.
    ///
    /// Reported as 400, matching the historical surface of this API,
    /// even though the condition is semantically a not-found.
    #[error("There is no project with id {0} registered.")]
    ProjectNotFound(String),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::ProjectNotFound(_) => StatusCode::BAD_REQUEST,
        };
        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
