//! In-Memory Project API
//!
//! A small REST API built with Tokio and Axum that manages a list of
//! projects, each holding an ordered list of task titles. All state lives
//! in process memory; nothing survives a restart.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────┐
//!                    │               PROJECT API                  │
//!                    │                                            │
//!   Client Request   │  ┌─────────┐   ┌───────────┐   ┌─────────┐ │
//!   ─────────────────┼─▶│ request │──▶│  project  │──▶│ route   │ │
//!                    │  │ counter │   │  guard    │   │ handler │ │
//!                    │  └─────────┘   │(id routes)│   └────┬────┘ │
//!                    │                └───────────┘        │      │
//!                    │                                     ▼      │
//!   Client Response  │                             ┌───────────┐  │
//!   ◀────────────────┼─────────────────────────────│  project  │  │
//!                    │                             │   store   │  │
//!                    │                             └───────────┘  │
//!                    └────────────────────────────────────────────┘
//! ```
//!
//! Every request passes through the request counter; id-scoped routes
//! additionally pass through the existence guard before reaching their
//! handler. Handlers read and mutate the shared in-memory store.

use std::path::Path;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use project_api::config::{self, AppConfig};
use project_api::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "project_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("project-api v0.1.0 starting");

    // Load configuration; a missing config.toml falls back to defaults.
    let config_path = Path::new("config.toml");
    let config = if config_path.exists() {
        config::load_config(config_path)?
    } else {
        tracing::debug!("No config.toml found, using defaults");
        AppConfig::default()
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
