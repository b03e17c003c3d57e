//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, routing)
//!     → middleware/request_counter.rs (count + log, every request)
//!     → middleware/project_guard.rs (id-scoped routes only)
//!     → handler (server.rs) reads/mutates the store
//!     → JSON response
//! ```

pub mod error;
pub mod middleware;
pub mod server;

pub use error::ApiError;
pub use server::{AppState, HttpServer};
