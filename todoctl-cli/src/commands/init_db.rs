//! Create and seed the todos table without starting the server

use anyhow::{Context, Result};
use clap::Parser;
use todoctl_server::db::{close_pool, connect_and_bootstrap};

use super::DatabaseArgs;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let config = args.database.load_config()?;
    let settings = args.database.resolve(&config)?;

    let pool = connect_and_bootstrap(&settings.url, settings.max_connections)
        .await
        .context("Database startup failed")?;
    close_pool(&pool).await;

    println!("Database ready");
    Ok(())
}
