//! In-Memory Project API Library

pub mod config;
pub mod http;
pub mod store;

pub use config::AppConfig;
pub use http::HttpServer;
pub use store::{Project, ProjectStore};
