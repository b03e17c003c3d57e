//! Existence guard for id-scoped project routes.

use axum::{
    body::Body,
    extract::{Path, State},
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Reject the request when the `{id}` path segment does not resolve to a
/// live project; otherwise continue the pipeline.
///
/// Route params are text, so the id is parsed explicitly; a non-numeric
/// id matches no project. Nothing is attached to the request on success,
/// handlers look the project up again themselves.
pub async fn require_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let exists = id
        .parse::<u64>()
        .map(|id| state.store.contains(id))
        .unwrap_or(false);

    if !exists {
        tracing::debug!(%id, "Rejecting request for unknown project");
        return ApiError::ProjectNotFound(id).into_response();
    }

    next.run(req).await
}
