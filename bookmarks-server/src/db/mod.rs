//! Database layer - connection pool, schema and the bookmark repository
//!
//! # Design Principles
//!
//! - Connection pool with a configurable limit - no Arc<Mutex<Connection>>
//! - One statement per logical operation - no check-then-write in SQL
//! - Handlers see the `BookmarkStore` trait, not the pool

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
