//! Graph explorer CLI commands.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use tunegraph_core::AppConfig;
use tunegraph_graph::{explore, EntityKind, NeighborhoodFetcher};

use crate::output;

#[derive(Subcommand)]
pub enum GraphCommands {
    /// Show the neighborhood of a tune
    Tune {
        /// Tune name, exactly as stored
        name: String,
        /// Print the raw JSON payload
        #[arg(long)]
        json: bool,
    },

    /// Show the neighborhood of a set
    Set {
        /// Set description (comma-joined tune names)
        description: String,
        /// Print the raw JSON payload
        #[arg(long)]
        json: bool,
    },
}

pub async fn execute(cmd: GraphCommands, config: &AppConfig) -> Result<()> {
    let (focus, key, json) = match cmd {
        GraphCommands::Tune { name, json } => (EntityKind::Tune, name, json),
        GraphCommands::Set { description, json } => (EntityKind::Set, description, json),
    };

    let client = super::connect_graph(&config.graph).await?;
    let fetcher = NeighborhoodFetcher::new(client, config.graph.first_hop_limit);
    let graph = explore(&fetcher, focus, &key).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&graph)?);
        return Ok(());
    }

    println!("{} {} {}", "Neighborhood of".bold(), focus.to_string().cyan(), key.yellow());
    println!("{}", "─".repeat(50));
    output::print_viz_graph(&graph);

    Ok(())
}
