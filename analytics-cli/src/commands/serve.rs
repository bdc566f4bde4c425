//! HTTP server command
//!
//! Runs the items/events API until Ctrl+C or SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use analytics_server::{create_pool, run_server, ServerConfig, DEFAULT_DATABASE_URL};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (sqlite:// or postgres://); a local SQLite file when unset
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args
        .database_url
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

    tracing::info!("Starting analytics server on {}", args.bind);

    let db = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(db, config).await.context("Server error")?;

    Ok(())
}
