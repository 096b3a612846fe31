//! Schema setup for the bookmark table

use sqlx::PgPool;

use super::DbError;

/// Create the `bookmark_list` table if it does not exist yet.
///
/// Ids come from the identity sequence; rows inserted with explicit ids
/// do not advance it, so seeding code must follow up with
/// `SELECT setval(pg_get_serial_sequence('bookmark_list', 'id'), MAX(id))`.
/// The rating bound is repeated as a CHECK constraint.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running bookmark migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookmark_list (
            id BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
            title TEXT NOT NULL,
            url TEXT NOT NULL,
            rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
            description TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Bookmark migrations complete");
    Ok(())
}
