//! Schema setup command

use anyhow::{Context, Result};
use clap::Parser;

use kasir_server::db::{create_pool, migrations};

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// PostgreSQL connection string
    #[arg(long = "db-conn", env = "DB_CONN", hide_env_values = true)]
    pub db_conn: String,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool(&args.db_conn)
        .await
        .context("Failed to initialize database")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    pool.close().await;
    Ok(())
}
