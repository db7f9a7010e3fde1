//! Terminal output formatting.

use std::collections::HashMap;

use colored::{ColoredString, Colorize};
use tunegraph_core::{NodeRole, VizGraph, VizNode};

fn role_of(node: &VizNode) -> Option<NodeRole> {
    [NodeRole::Focal, NodeRole::FirstHop, NodeRole::SecondHop]
        .into_iter()
        .find(|role| role.background() == node.color.background)
}

fn role_tag(node: &VizNode) -> ColoredString {
    match role_of(node) {
        Some(NodeRole::Focal) => "focal".yellow().bold(),
        Some(NodeRole::FirstHop) => "hop 1".green(),
        Some(NodeRole::SecondHop) => "hop 2".blue(),
        None => "?".dimmed(),
    }
}

/// Print a folded neighborhood as node and edge lists.
pub fn print_viz_graph(graph: &VizGraph) {
    if graph.is_empty() {
        println!("{}", "Not found in graph.".red());
        return;
    }

    println!("\n{} ({}):", "Nodes".bold(), graph.nodes.len());
    for node in &graph.nodes {
        println!(
            "  {} [{}] {} {}",
            "•".dimmed(),
            role_tag(node),
            node.label,
            format!("#{}", node.id).dimmed()
        );
    }

    let labels: HashMap<i64, &str> = graph
        .nodes
        .iter()
        .map(|n| (n.id, n.label.as_str()))
        .collect();
    let label = |id: i64| labels.get(&id).copied().unwrap_or("?");

    if !graph.edges.is_empty() {
        println!("\n{} ({}):", "Edges".bold(), graph.edges.len());
        for edge in &graph.edges {
            println!(
                "  {} {} {}",
                label(edge.from),
                "→".dimmed(),
                label(edge.to)
            );
        }
    }
}
