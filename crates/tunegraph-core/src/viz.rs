//! Visualization payload returned by the graph explorer.
//!
//! The shapes match what vis-network style renderers consume directly:
//! nodes carry `id`, `label` and a `color` object, edges are `{from, to}`.

use serde::{Deserialize, Serialize};

/// Position of a node relative to the focal entity of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    Focal,
    FirstHop,
    SecondHop,
}

impl NodeRole {
    /// Background color that tags this role in the rendered graph.
    pub fn background(&self) -> &'static str {
        match self {
            Self::Focal => "yellow",
            Self::FirstHop => "#aaddaa",
            Self::SecondHop => "#aaaadd",
        }
    }

    pub fn color(&self) -> NodeColor {
        NodeColor {
            background: self.background().to_string(),
            border: self.background().to_string(),
        }
    }
}

/// Node color as understood by the front-end renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeColor {
    pub background: String,
    pub border: String,
}

/// A tune or set in the visualization graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VizNode {
    pub id: i64,
    pub label: String,
    pub color: NodeColor,
}

impl VizNode {
    pub fn new(id: i64, label: impl Into<String>, role: NodeRole) -> Self {
        Self {
            id,
            label: label.into(),
            color: role.color(),
        }
    }
}

/// A directed edge between two node ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VizEdge {
    pub from: i64,
    pub to: i64,
}

/// Folded neighborhood: unique nodes and unique ordered edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VizGraph {
    pub nodes: Vec<VizNode>,
    pub edges: Vec<VizEdge>,
}

impl VizGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
