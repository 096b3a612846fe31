//! bookmarks-server: HTTP API for bookmark records
//!
//! Bearer-token protected CRUD over a single PostgreSQL table, with input
//! validation on writes and markup sanitization on reads.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod sanitize;
pub mod state;

pub use config::{Environment, ServerConfig};
pub use db::{BookmarkRepo, BookmarkStore, DbError};
pub use error::{Result, ServerError};
pub use http::{build_router, run_server};
pub use state::AppState;
