//! HTTP server command for the kasir API

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;

use kasir_server::db::{create_pool, migrations};
use kasir_server::http::{run_server, AppState, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// PostgreSQL connection string
    #[arg(long = "db-conn", env = "DB_CONN", hide_env_values = true)]
    pub db_conn: Option<String>,

    /// Keep records in process memory instead of PostgreSQL (lost on restart)
    #[arg(long)]
    pub memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let state = if args.memory {
        tracing::warn!("Using in-memory store; data is lost on restart");
        AppState::in_memory()
    } else {
        let db_conn = args
            .db_conn
            .filter(|conn| !conn.is_empty())
            .context("DB_CONN not set. Set via --db-conn, DB_CONN env, or .env (or pass --memory)")?;

        let pool = create_pool(&db_conn)
            .await
            .context("Failed to initialize database")?;
        migrations::run(&pool)
            .await
            .context("Failed to run migrations")?;

        AppState::postgres(pool)
    };

    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.host, args.port),
    };

    // Run server (blocks until shutdown)
    run_server(state, config).await.context("Server error")?;

    Ok(())
}
