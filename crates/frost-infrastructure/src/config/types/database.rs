//! Document store configuration types

use std::time::Duration;

use frost_providers::constants::{
    POSTGRES_DEFAULT_CONNECTION_TIMEOUT_SECS, POSTGRES_DEFAULT_MAX_CONNECTIONS,
};
use serde::{Deserialize, Serialize};

/// Which document store to construct
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreProviderKind {
    /// Process-local store, lost on exit
    #[default]
    Memory,
    /// PostgreSQL via a connection pool
    Postgres,
}

/// Document store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Store to use
    pub provider: StoreProviderKind,
    /// Connection URL (also read from `DATABASE_URL`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Maximum pooled connections
    pub max_connections: u32,
    /// Connection checkout timeout in seconds
    pub connection_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Connection checkout timeout
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout_secs)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            provider: StoreProviderKind::default(),
            url: None,
            max_connections: POSTGRES_DEFAULT_MAX_CONNECTIONS,
            connection_timeout_secs: POSTGRES_DEFAULT_CONNECTION_TIMEOUT_SECS,
        }
    }
}
