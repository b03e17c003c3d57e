//! Process-wide request counter middleware.

use std::sync::atomic::Ordering;

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use crate::http::server::AppState;

/// Count every inbound request and log the running total.
///
/// Pure side effect: the pipeline always continues, regardless of which
/// route (if any) the request matches or how the handler responds.
pub async fn count_requests(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let count = state.request_count.fetch_add(1, Ordering::Relaxed) + 1;
    tracing::info!(count, "Number of requests until now");

    next.run(req).await
}
