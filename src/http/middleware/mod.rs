//! Request pipeline middleware.
//!
//! The request counter is layered onto the whole router and runs for
//! every inbound request. The project guard is layered onto the
//! id-scoped routes only, after the counter.

pub mod project_guard;
pub mod request_counter;
