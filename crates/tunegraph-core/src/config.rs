//! Service configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! environment variables. CLI flags are applied last by the binary.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{TunegraphError, TunegraphResult};

/// Default number of first-hop neighbors kept around a focal node.
pub const DEFAULT_FIRST_HOP_LIMIT: usize = 30;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub graph: GraphConfig,
    pub database: DatabaseConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory of the built front-end, served for any unmatched path.
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            static_dir: PathBuf::from("dist"),
        }
    }
}

/// Configuration for connecting to Neo4j.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: usize,
    pub fetch_size: usize,
    /// Cap on first-hop neighbors, applied before second-hop expansion.
    pub first_hop_limit: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "neo4j".to_string(),
            database: "neo4j".to_string(),
            max_connections: 16,
            fetch_size: 200,
            first_hop_limit: DEFAULT_FIRST_HOP_LIMIT,
        }
    }
}

/// Relational store settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("session.db"),
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional TOML file and the process environment.
    pub fn load(path: Option<&Path>) -> TunegraphResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_toml(&std::fs::read_to_string(path)?)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> TunegraphResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Override fields from environment-style lookups.
    pub fn apply_env<F>(&mut self, lookup: F) -> TunegraphResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(uri) = lookup("NEO4J_URI") {
            self.graph.uri = uri;
        }
        if let Some(user) = lookup("NEO4J_USER") {
            self.graph.user = user;
        }
        if let Some(password) = lookup("NEO4J_PASSWORD") {
            self.graph.password = password;
        }
        if let Some(path) = lookup("TUNEGRAPH_DB") {
            self.database.path = PathBuf::from(path);
        }
        if let Some(port) = lookup("TUNEGRAPH_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| {
                    TunegraphError::config(format!("TUNEGRAPH_PORT is not a port: {port}"))
                })?;
        }
        Ok(())
    }

    /// Reject settings the service cannot run with.
    pub fn validate(&self) -> TunegraphResult<()> {
        if self.graph.first_hop_limit == 0 {
            return Err(TunegraphError::config("graph.first_hop_limit must be at least 1"));
        }
        if self.graph.max_connections == 0 {
            return Err(TunegraphError::config("graph.max_connections must be at least 1"));
        }
        Ok(())
    }
}
