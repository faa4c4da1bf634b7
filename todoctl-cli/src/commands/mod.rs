//! Command implementations for todoctl subcommands

pub mod init_db;
pub mod serve;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use todoctl_server::db::DEFAULT_MAX_CONNECTIONS;

use crate::config::{resolve, TodoctlConfig};

pub use init_db::run_init_db;
pub use serve::run_serve;

/// Database connection options shared by every command
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// PostgreSQL connection string (overrides config file)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "TODOCTL_MAX_CONNECTIONS")]
    pub max_connections: Option<u32>,

    /// Path to a TOML config file
    #[arg(long, env = "TODOCTL_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Database settings after applying flag/env/file/default precedence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Load the config file named by `--config`, if any.
    pub fn load_config(&self) -> Result<TodoctlConfig> {
        TodoctlConfig::load_optional(self.config.as_deref())
    }

    pub fn resolve(&self, config: &TodoctlConfig) -> Result<DatabaseSettings> {
        let url = self
            .database_url
            .clone()
            .or_else(|| config.database.url.clone())
            .context(
                "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, \
                 .env file, or database.url in the config file",
            )?;

        let max_connections = resolve(
            self.max_connections,
            config.database.max_connections,
            DEFAULT_MAX_CONNECTIONS,
        );
        if max_connections == 0 {
            anyhow::bail!("max_connections must be at least 1");
        }

        Ok(DatabaseSettings {
            url,
            max_connections,
        })
    }
}
