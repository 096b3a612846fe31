//! Bookmark repository
//!
//! One statement per operation against `bookmark_list`:
//! - insert: INSERT ... RETURNING for the assigned id
//! - update: COALESCE per column so absent fields keep their value
//! - delete: row count reported back, no pre-check

use async_trait::async_trait;
use sqlx::PgPool;

use super::{BookmarkStore, DbError};
use crate::models::{Bookmark, BookmarkPatch, NewBookmark};

/// PostgreSQL bookmark repository
#[derive(Clone)]
pub struct BookmarkRepo {
    pool: PgPool,
}

impl BookmarkRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookmarkStore for BookmarkRepo {
    async fn list(&self) -> Result<Vec<Bookmark>, DbError> {
        let bookmarks: Vec<Bookmark> = sqlx::query_as(
            r#"
            SELECT id, title, url, rating, description
            FROM bookmark_list
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(bookmarks)
    }

    async fn get(&self, id: i64) -> Result<Option<Bookmark>, DbError> {
        let bookmark: Option<Bookmark> = sqlx::query_as(
            r#"
            SELECT id, title, url, rating, description
            FROM bookmark_list
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(bookmark)
    }

    async fn insert(&self, new: NewBookmark) -> Result<Bookmark, DbError> {
        let bookmark: Bookmark = sqlx::query_as(
            r#"
            INSERT INTO bookmark_list (title, url, rating, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, url, rating, description
            "#,
        )
        .bind(&new.title)
        .bind(&new.url)
        .bind(new.rating.get())
        .bind(&new.description)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(id = bookmark.id, "bookmark created");
        Ok(bookmark)
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM bookmark_list WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn update(&self, id: i64, patch: BookmarkPatch) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE bookmark_list
            SET title = COALESCE($2, title),
                url = COALESCE($3, url),
                rating = COALESCE($4, rating),
                description = COALESCE($5, description)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.url)
        .bind(patch.rating.map(|r| r.get()))
        .bind(patch.description)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
