//! HTTP server layer
//!
//! Axum server with:
//! - Quote pages and random redirects
//! - JSON list/detail endpoints
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod render;
pub mod routes;
pub mod server;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
