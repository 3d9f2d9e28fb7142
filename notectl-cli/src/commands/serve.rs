//! HTTP server command for the notectl API
//!
//! Resolves bind address and database URL from flags, environment, and
//! config, then runs the server until shutdown.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use notectl_core::NotectlConfig;
use notectl_server::db::{create_pool, migrations};
use notectl_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: from config, 127.0.0.1:3030)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides config)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: NotectlConfig) -> Result<()> {
    let database_url = args.database_url.unwrap_or(config.database.url);

    let bind_addr = match args.bind {
        Some(addr) => addr,
        None => config
            .server
            .bind
            .parse()
            .with_context(|| format!("Invalid bind address in config: {}", config.server.bind))?,
    };

    // The default database lives under ~/.notectl; SQLite creates the file
    // but not the directory.
    if let Some(dir) = dirs::home_dir().map(|home| home.join(".notectl")) {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    tracing::info!("Starting notectl server on {}", bind_addr);

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to set up database schema")?;

    let server_config = ServerConfig {
        bind_addr,
        cors_permissive: args.cors_permissive,
    };

    // Runs until Ctrl+C / SIGTERM
    run_server(pool, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
