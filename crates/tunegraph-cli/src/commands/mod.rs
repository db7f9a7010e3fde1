//! CLI command definitions and handlers.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use tunegraph_core::config::GraphConfig;
use tunegraph_core::AppConfig;
use tunegraph_graph::GraphClient;

pub mod graph;
pub mod serve;
pub mod status;

/// Traditional-music session explorer
#[derive(Parser)]
#[command(name = "tunegraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true, env = "TUNEGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// Explore the tune/set graph
    #[command(subcommand)]
    Graph(graph::GraphCommands),

    /// Check store connectivity and show counts
    Status,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config =
            AppConfig::load(self.config.as_deref()).context("Failed to load configuration")?;

        match self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Graph(cmd) => graph::execute(cmd, &config).await,
            Commands::Status => status::execute(&config).await,
        }
    }
}

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connect to Neo4j, failing fast when it is unreachable.
pub(crate) async fn connect_graph(config: &GraphConfig) -> Result<GraphClient> {
    tokio::time::timeout(CONNECT_TIMEOUT, GraphClient::connect(config))
        .await
        .with_context(|| format!("Timed out connecting to Neo4j at {}", config.uri))?
        .with_context(|| format!("Failed to connect to Neo4j at {}", config.uri))
}
