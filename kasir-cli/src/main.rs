//! kasir CLI - runs the kasir HTTP API
//!
//! - `serve`: provision the store and run the HTTP server
//! - `migrate`: create the product and category tables, then exit
//!
//! Settings come from flags, the environment, and a `.env` file in the
//! working directory, in that order of precedence.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "kasir",
    author,
    version,
    about = "Simple point-of-sale API for products and categories"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create database tables and exit
    Migrate(commands::migrate::MigrateArgs),
}

fn main() -> Result<()> {
    // Environment must be settled before clap reads `env = ...` args
    // and before the runtime starts worker threads.
    config::load_env();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(async {
        match cli.command {
            Commands::Serve(args) => commands::serve::run_serve(args).await,
            Commands::Migrate(args) => commands::migrate::run_migrate(args).await,
        }
    })
}
