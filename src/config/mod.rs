//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → AppConfig (immutable for the process lifetime)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the server runs with no config file at all
//! - The only knob is the listener bind address

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::AppConfig;
pub use schema::ListenerConfig;
