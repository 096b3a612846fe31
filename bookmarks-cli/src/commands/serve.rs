//! HTTP server command
//!
//! Runs the bookmarks API until Ctrl+C/SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use bookmarks_server::db::{create_pool, DEFAULT_MAX_CONNECTIONS};
use bookmarks_server::{run_server, Environment, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "BIND_ADDR", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Database URL
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Bearer token clients must send in the Authorization header
    #[arg(long, env = "API_TOKEN", hide_env_values = true)]
    pub api_token: String,

    /// Deployment mode: production hides storage error details
    #[arg(long = "env", env = "APP_ENV", default_value = "development")]
    pub environment: Environment,

    /// Maximum database connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Only accept cross-origin requests from localhost (default: all origins)
    #[arg(long)]
    pub cors_local_only: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    anyhow::ensure!(!args.api_token.trim().is_empty(), "API_TOKEN must not be empty");

    tracing::info!("Starting bookmarks server on {}", args.bind);

    let pool = create_pool(&args.database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        api_token: args.api_token,
        environment: args.environment,
        cors_permissive: !args.cors_local_only,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
