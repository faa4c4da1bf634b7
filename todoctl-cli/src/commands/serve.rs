//! HTTP server command for the to-do API

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use todoctl_server::http::{run_server, ServerConfig};
use todoctl_server::connect_and_bootstrap;

use super::DatabaseArgs;
use crate::config::resolve;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to [default: 127.0.0.1:8000]
    #[arg(long, short = 'b', env = "TODOCTL_BIND")]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

impl ServeArgs {
    fn server_config(&self, file: &crate::config::TodoctlConfig) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            bind_addr: resolve(self.bind, file.server.bind, defaults.bind_addr),
            cors_permissive: self.cors_permissive
                || file.server.cors_permissive.unwrap_or(defaults.cors_permissive),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let file = args.database.load_config()?;
    let settings = args.database.resolve(&file)?;
    let config = args.server_config(&file);

    tracing::info!("Starting todoctl server on {}", config.bind_addr);

    let pool = connect_and_bootstrap(&settings.url, settings.max_connections)
        .await
        .context("Database startup failed")?;

    // Blocks until shutdown; closes the pool on the way out
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
