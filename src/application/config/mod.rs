pub mod csv;
pub mod database;
pub mod ip_range;
pub mod replicas;
pub mod server;

use std::collections::HashMap;
use std::env;

use anyhow::Context;

pub use csv::csv_to_tokens;
pub use ip_range::{parse_ip_range_list, IpRange};
pub use replicas::resolve_read_replicas;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server: server::ServerConfig,
    pub database: database::DatabaseConfig,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let env: HashMap<String, String> = env::vars().collect();
        Self::from_map(&env)
    }

    /// Load configuration from an explicit environment snapshot. The snapshot
    /// is read-only; every lookup, including replica indirection, goes
    /// through it.
    pub fn from_map(env: &HashMap<String, String>) -> anyhow::Result<Self> {
        let server = server::ServerConfig::from_map(env)
            .context("failed to parse IP_WHITELIST")?;
        let database = database::DatabaseConfig::from_map(env);

        tracing::debug!(
            "Configuration loaded: {} allowlist range(s), read replicas {}",
            server.ip_allowlist.len(),
            if database.read_replicas.is_some() {
                "configured"
            } else {
                "not configured"
            },
        );

        Ok(Self { server, database })
    }
}
