//! Web server command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use tunegraph_core::AppConfig;
use tunegraph_graph::NeighborhoodFetcher;
use tunegraph_web::AppState;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Directory of the built front-end
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// Path to the session SQLite database
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long)]
    pub log: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, mut config: AppConfig) -> Result<()> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(dir) = args.static_dir {
        config.server.static_dir = dir;
    }
    if let Some(db) = args.db {
        config.database.path = db;
    }

    tracing::info!(
        db = %config.database.path.display(),
        graph = %config.graph.uri,
        first_hop_limit = config.graph.first_hop_limit,
        "Starting tunegraph"
    );

    let db = tunegraph_db::init_pool(&config.database.path).with_context(|| {
        format!("Failed to open session database {}", config.database.path.display())
    })?;
    let client = super::connect_graph(&config.graph).await?;
    let fetcher = NeighborhoodFetcher::new(client, config.graph.first_hop_limit);
    let state = AppState::new(db, Arc::new(fetcher));

    let base = format!("http://{}:{}", config.server.host, config.server.port);
    println!();
    println!("  {} {}", "tunegraph".cyan().bold(), "Web Server".bold());
    println!();
    println!("  {}  {}", "Explorer".green(), base);
    println!("  {}       {}/api", "API".green(), base);
    println!("  {}     {}/graph/tune?tuneName=...", "Graph".green(), base);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    tunegraph_web::run_server(state, &config.server).await
}
