//! Repository implementations for database access
//!
//! `BookmarkStore` is the seam the HTTP layer depends on; `BookmarkRepo` is
//! the PostgreSQL implementation.

pub mod bookmarks;

use async_trait::async_trait;

use crate::models::{Bookmark, BookmarkPatch, NewBookmark};

pub use bookmarks::BookmarkRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence operations on bookmark records.
///
/// Absence is not an error: `get` returns `None`, `delete` and `update`
/// report the number of rows they touched and leave the caller to decide
/// what zero means.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// All bookmarks in insertion order.
    async fn list(&self) -> Result<Vec<Bookmark>, DbError>;

    async fn get(&self, id: i64) -> Result<Option<Bookmark>, DbError>;

    /// Persist a new bookmark, returning it with its assigned id.
    async fn insert(&self, new: NewBookmark) -> Result<Bookmark, DbError>;

    /// Returns the number of rows removed (0 or 1).
    async fn delete(&self, id: i64) -> Result<u64, DbError>;

    /// Apply the supplied fields only. Returns the number of rows affected.
    async fn update(&self, id: i64, patch: BookmarkPatch) -> Result<u64, DbError>;
}
