//! PostgreSQL pool for the bookmark store

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Connection limit used when `serve`/`migrate` are not given one
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// A request waiting longer than this for a connection fails with a 500.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Open a pool of at most `max_connections` against `database_url`.
///
/// A limit of 0 is raised to 1.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    let max_connections = max_connections.max(1);
    tracing::debug!(max_connections, "connecting to bookmark database");

    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_reaches_bookmark_table() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url, 1).await.expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("migrations failed");

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bookmark_list")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert!(count >= 0);
        assert_eq!(pool.options().get_max_connections(), 1);
    }
}
