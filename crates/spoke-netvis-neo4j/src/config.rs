//! Database session configuration.
//!
//! Configuration is loaded in order:
//! 1. `config/default.toml` (base settings)
//! 2. `config/{SPOKE_NETVIS_ENV}.toml` (environment-specific)
//! 3. Environment variables with `SPOKE_NETVIS_` prefix
//!
//! Credentials are never hard-coded; they arrive through files or the
//! environment (`SPOKE_NETVIS_NEO4J__PASSWORD` and friends).

use serde::{Deserialize, Serialize};

use spoke_netvis_core::error::{NetvisError, NetvisResult};

/// Settings for the authenticated Neo4j session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Neo4jConfig {
    /// Bolt URI of the graph database, e.g. `bolt://localhost:7687`.
    pub uri: String,
    pub user: String,
    pub password: String,
}

impl Default for Neo4jConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    neo4j: Option<Neo4jConfig>,
}

impl Neo4jConfig {
    /// Load configuration from files and environment.
    pub fn load() -> NetvisResult<Self> {
        let env =
            std::env::var("SPOKE_NETVIS_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(config::Environment::with_prefix("SPOKE_NETVIS").separator("__"));

        let file: ConfigFile = builder
            .build()
            .map_err(|e| NetvisError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| NetvisError::Config(e.to_string()))?;

        let config = file.neo4j.unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    /// Check the settings are usable before a connection is attempted.
    pub fn validate(&self) -> NetvisResult<()> {
        if self.uri.is_empty() {
            return Err(NetvisError::Config("neo4j.uri must not be empty".into()));
        }
        if self.user.is_empty() {
            return Err(NetvisError::Config("neo4j.user must not be empty".into()));
        }
        Ok(())
    }
}
