//! HTTP server setup and request handlers.
//!
//! # Responsibilities
//! - Create the Axum Router with all project routes
//! - Wire up middleware (tracing, request counter, existence guard)
//! - Bind server to listener, serve with graceful shutdown
//!
//! # Route Table
//! ```text
//! POST   /projects             create project, respond with full list
//! GET    /projects             list all projects and tasks
//! PUT    /projects/{id}        update project title       (guarded)
//! DELETE /projects/{id}        delete project              (guarded)
//! POST   /projects/{id}/tasks  append task to project      (guarded)
//! ```

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::http::error::ApiError;
use crate::http::middleware::{project_guard, request_counter};
use crate::store::{Project, ProjectStore};

/// Application state injected into handlers and middleware.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProjectStore>,
    pub request_count: Arc<AtomicU64>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(ProjectStore::new()),
            request_count: Arc::new(AtomicU64::new(0)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP server for the project API.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let state = AppState::new();
        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        // Id-scoped routes pass the existence guard before their handler.
        let guarded = Router::new()
            .route(
                "/projects/{id}",
                put(update_project).delete(delete_project),
            )
            .route("/projects/{id}/tasks", post(create_task))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                project_guard::require_project,
            ));

        Router::new()
            .route(
                "/projects",
                get(list_projects).post(create_project),
            )
            .merge(guarded)
            .layer(middleware::from_fn_with_state(
                state.clone(),
                request_counter::count_requests,
            ))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}

/// Request body carrying a project or task title.
///
/// Nothing is required: the store keeps whatever the body carried, and a
/// missing `title` stays absent when the project is serialized back out.
#[derive(Debug, Default, Deserialize)]
pub struct TitleBody {
    pub title: Option<String>,
}

/// Confirmation message returned by the mutating id-scoped handlers.
#[derive(Debug, Serialize)]
pub struct Confirmation {
    pub message: String,
}

/// POST /projects — append a new project, respond with the full list.
async fn create_project(
    State(state): State<AppState>,
    Json(body): Json<TitleBody>,
) -> Json<Vec<Project>> {
    let projects = state.store.create(body.title);
    Json(projects)
}

/// GET /projects — all projects and their tasks, in creation order.
async fn list_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.store.list())
}

/// PUT /projects/{id} — update the project's title.
async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<TitleBody>,
) -> Result<Json<Confirmation>, ApiError> {
    let title = body.title.clone().unwrap_or_default();

    if !state.store.update_title(parse_id(&id)?, body.title) {
        return Err(ApiError::ProjectNotFound(id));
    }

    Ok(Json(Confirmation {
        message: format!("Project's title updated to \"{title}\""),
    }))
}

/// DELETE /projects/{id} — remove the project.
async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Confirmation>, ApiError> {
    state.store.delete(parse_id(&id)?);

    Ok(Json(Confirmation {
        message: format!("Project {id} deleted."),
    }))
}

/// POST /projects/{id}/tasks — append a task to the project.
async fn create_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<TitleBody>,
) -> Result<Json<Confirmation>, ApiError> {
    let title = body.title.unwrap_or_default();

    if !state.store.add_task(parse_id(&id)?, title.clone()) {
        return Err(ApiError::ProjectNotFound(id));
    }

    Ok(Json(Confirmation {
        message: format!("Task \"{title}\" created!"),
    }))
}

/// Explicit coercion of the textual route param to a numeric id. The
/// guard has normally rejected unparseable ids already; this keeps the
/// handlers correct on their own.
fn parse_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::ProjectNotFound(raw.to_string()))
}
