//! notectl CLI - note-taking backend service
//!
//! Entry point for the `notectl` binary. The only subcommand is `serve`,
//! which runs the HTTP API over the configured SQLite database.

use anyhow::Result;
use clap::{Parser, Subcommand};

use notectl_core::NotectlConfig;

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "notectl",
    author,
    version,
    about = "REST backend for users, notes, and labels over SQLite"
)]
struct Cli {
    /// Enable debug logging (equivalent to RUST_LOG=debug)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = NotectlConfig::load()?;

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        default_level: config.log.level.clone(),
    })?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, config).await,
    }
}
