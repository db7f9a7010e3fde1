//! Store connectivity status.

use anyhow::Result;
use colored::Colorize;

use tunegraph_core::AppConfig;
use tunegraph_db::queries::{sessions, sets, tunes};

pub async fn execute(config: &AppConfig) -> Result<()> {
    println!("{}", "Graph Store".bold());
    println!("{}", "─".repeat(40));
    println!("  URI:           {}", config.graph.uri.dimmed());
    match super::connect_graph(&config.graph).await {
        Ok(client) => {
            let counts = client.get_counts().await?;
            println!("  Tunes:         {}", counts.tunes.to_string().cyan());
            println!("  Sets:          {}", counts.sets.to_string().cyan());
            println!("  CONTAINS:      {}", counts.contains.to_string().cyan());
        }
        Err(e) => println!("  {}         {:#}", "Error".red(), e),
    }

    println!();
    println!("{}", "Session Database".bold());
    println!("{}", "─".repeat(40));
    println!("  Path:          {}", config.database.path.display().to_string().dimmed());
    match tunegraph_db::init_pool(&config.database.path) {
        Ok(db) => {
            println!("  Tunes:         {}", tunes::count_tunes(&db)?.to_string().cyan());
            println!("  Sets:          {}", sets::count_sets(&db)?.to_string().cyan());
            println!("  Sessions:      {}", sessions::count_sessions(&db)?.to_string().cyan());
        }
        Err(e) => println!("  {}         {}", "Error".red(), e),
    }
    println!("{}", "─".repeat(40));

    Ok(())
}
