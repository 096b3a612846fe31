//! Schema setup command

use anyhow::{Context, Result};
use clap::Parser;

use bookmarks_server::db::{create_pool, migrations};

/// Pool size for the one-shot schema setup
const MIGRATE_CONNECTIONS: u32 = 1;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,
}

/// Create the bookmark table if it is missing
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool(&args.database_url, MIGRATE_CONNECTIONS)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    pool.close().await;
    Ok(())
}
