//! HTTP server layer
//!
//! Axum server with:
//! - Bearer token auth on every route
//! - CORS and security headers
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses, detail hidden in production

pub mod auth;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server};
