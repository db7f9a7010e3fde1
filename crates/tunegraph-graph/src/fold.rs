//! Folding of neighborhood path records into a visualization graph.
//!
//! Nodes are unique by domain id and edges unique by ordered `(from, to)`
//! pair; both keep first-insertion order so a fixed record sequence always
//! folds to the same payload.
//!
//! Besides the focal→first-hop edges the query returns, the fold infers
//! edges from second-hop entities by label containment. A set description
//! is the comma-joined names of its tunes, so a set whose label contains a
//! tune name is taken to contain that tune. This is a plain substring test
//! and produces false positives for short names (a tune called "Bar" matches
//! a set "Barley, ..."). Identical labels never produce an edge.

use std::collections::{HashMap, HashSet};

use tunegraph_core::{NodeRole, VizEdge, VizGraph, VizNode};

use crate::queries::neighborhood::{EntityKind, GraphEntity, PathRecord};

/// Fold `records` rooted at an entity of kind `focus`.
pub fn fold(focus: EntityKind, records: &[PathRecord]) -> VizGraph {
    let mut folder = GraphFolder::new(focus);
    for record in records {
        folder.push(record);
    }
    folder.finish()
}

/// Incremental fold state.
#[derive(Debug)]
pub struct GraphFolder {
    focus: EntityKind,
    nodes: Vec<VizNode>,
    node_ids: HashMap<i64, usize>,
    edges: Vec<VizEdge>,
    edge_set: HashSet<VizEdge>,
}

impl GraphFolder {
    pub fn new(focus: EntityKind) -> Self {
        Self {
            focus,
            nodes: Vec::new(),
            node_ids: HashMap::new(),
            edges: Vec::new(),
            edge_set: HashSet::new(),
        }
    }

    /// Merge one record.
    pub fn push(&mut self, record: &PathRecord) {
        let focal = &record.focal;
        self.add_node(focal, NodeRole::Focal);

        for first in &record.first_hop {
            self.add_node(first, NodeRole::FirstHop);
        }

        let second_hop: Vec<&GraphEntity> = record
            .second_hop
            .iter()
            .filter(|entity| entity.id != focal.id)
            .collect();

        for &second in &second_hop {
            self.add_node(second, NodeRole::SecondHop);
        }

        for &second in &second_hop {
            self.infer_edges(second);
        }

        for first in &record.first_hop {
            self.add_edge(focal.id, first.id);
        }
    }

    pub fn finish(self) -> VizGraph {
        VizGraph {
            nodes: self.nodes,
            edges: self.edges,
        }
    }

    fn add_node(&mut self, entity: &GraphEntity, role: NodeRole) {
        if self.node_ids.contains_key(&entity.id) {
            return;
        }
        self.node_ids.insert(entity.id, self.nodes.len());
        self.nodes.push(VizNode::new(entity.id, entity.label.clone(), role));
    }

    fn add_edge(&mut self, from: i64, to: i64) {
        let edge = VizEdge { from, to };
        if self.edge_set.insert(edge) {
            self.edges.push(edge);
        }
    }

    /// Link `second` to every emitted node whose label matches it.
    fn infer_edges(&mut self, second: &GraphEntity) {
        let targets: Vec<i64> = self
            .nodes
            .iter()
            .filter(|node| node.label != second.label)
            .filter(|node| match self.focus {
                // Second hop are tunes: match sets naming them.
                EntityKind::Tune => node.label.contains(second.label.as_str()),
                // Second hop are sets: match tunes they name.
                EntityKind::Set => second.label.contains(node.label.as_str()),
            })
            .map(|node| node.id)
            .collect();

        for to in targets {
            self.add_edge(second.id, to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(id: i64, label: &str) -> GraphEntity {
        GraphEntity::new(id, label)
    }

    fn edge(from: i64, to: i64) -> VizEdge {
        VizEdge { from, to }
    }

    fn drowsy_maggie() -> Vec<PathRecord> {
        vec![PathRecord {
            focal: e(1, "Drowsy Maggie"),
            first_hop: vec![
                e(101, "Drowsy Maggie, The Blarney Pilgrim"),
                e(102, "Drowsy Maggie, Cooley's"),
            ],
            second_hop: vec![
                e(1, "Drowsy Maggie"),
                e(2, "The Blarney Pilgrim"),
                e(3, "Cooley's"),
            ],
        }]
    }

    fn assert_unique(graph: &VizGraph) {
        let ids: HashSet<i64> = graph.nodes.iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), graph.nodes.len(), "duplicate node id");
        let edges: HashSet<VizEdge> = graph.edges.iter().copied().collect();
        assert_eq!(edges.len(), graph.edges.len(), "duplicate edge");
    }

    #[test]
    fn test_drowsy_maggie_scenario() {
        let graph = fold(EntityKind::Tune, &drowsy_maggie());

        let ids: Vec<i64> = graph.nodes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 101, 102, 2, 3]);

        assert_eq!(graph.nodes[0].color.background, "yellow");
        assert_eq!(graph.nodes[1].color.background, "#aaddaa");
        assert_eq!(graph.nodes[3].color.background, "#aaaadd");

        assert_eq!(
            graph.edges,
            vec![edge(2, 101), edge(3, 102), edge(1, 101), edge(1, 102)]
        );
        assert_unique(&graph);
    }

    #[test]
    fn test_empty_records_fold_to_empty_graph() {
        let graph = fold(EntityKind::Tune, &[]);
        assert!(graph.is_empty());
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_focal_excluded_from_second_hop() {
        let records = vec![PathRecord {
            focal: e(1, "The Kesh"),
            first_hop: vec![e(50, "The Kesh")],
            second_hop: vec![e(1, "The Kesh")],
        }];
        let graph = fold(EntityKind::Tune, &records);

        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.nodes[0].color.background, "yellow");
        assert!(graph.edges.iter().all(|e| e.from != e.to));
        // Identical labels never link.
        assert_eq!(graph.edges, vec![edge(1, 50)]);
    }

    #[test]
    fn test_short_label_false_positive_is_kept() {
        let records = vec![PathRecord {
            focal: e(1, "Out on the Ocean"),
            first_hop: vec![
                e(200, "Out on the Ocean, Bar"),
                e(201, "Out on the Ocean, Barley"),
            ],
            second_hop: vec![e(7, "Bar")],
        }];
        let graph = fold(EntityKind::Tune, &records);

        assert!(graph.edges.contains(&edge(7, 200)));
        assert!(graph.edges.contains(&edge(7, 201)));
    }

    #[test]
    fn test_set_rooted_inference_direction() {
        let records = vec![PathRecord {
            focal: e(101, "Drowsy Maggie, The Blarney Pilgrim"),
            first_hop: vec![e(1, "Drowsy Maggie"), e(2, "The Blarney Pilgrim")],
            second_hop: vec![
                e(101, "Drowsy Maggie, The Blarney Pilgrim"),
                e(102, "Drowsy Maggie, Cooley's"),
            ],
        }];
        let graph = fold(EntityKind::Set, &records);

        let ids: Vec<i64> = graph.nodes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![101, 1, 2, 102]);
        // Set 102 names tune 1 but not tune 2; the focal set is a different
        // label that 102 does not contain.
        assert_eq!(graph.edges, vec![edge(102, 1), edge(101, 1), edge(101, 2)]);
    }

    #[test]
    fn test_repeated_records_do_not_duplicate() {
        let mut records = drowsy_maggie();
        records.extend(drowsy_maggie());
        let graph = fold(EntityKind::Tune, &records);

        assert_eq!(graph, fold(EntityKind::Tune, &drowsy_maggie()));
        assert_unique(&graph);
    }

    #[test]
    fn test_first_seen_role_wins() {
        // Tune 3 reached as second hop by the first record and as focal by the second.
        let records = vec![
            PathRecord {
                focal: e(1, "Drowsy Maggie"),
                first_hop: vec![e(102, "Drowsy Maggie, Cooley's")],
                second_hop: vec![e(3, "Cooley's")],
            },
            PathRecord {
                focal: e(3, "Cooley's"),
                first_hop: vec![e(102, "Drowsy Maggie, Cooley's")],
                second_hop: vec![e(1, "Drowsy Maggie")],
            },
        ];
        let graph = fold(EntityKind::Tune, &records);

        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(graph.nodes[2].color.background, "#aaaadd");
        assert!(graph.edges.contains(&edge(3, 102)));
        assert!(graph.edges.contains(&edge(1, 102)));
        assert_unique(&graph);
    }

    #[test]
    fn test_fold_is_deterministic() {
        let records: Vec<PathRecord> = (0..5)
            .map(|i| PathRecord {
                focal: e(i, &format!("Tune {i}")),
                first_hop: (0..4).map(|s| e(100 + s, &format!("Tune {i}, Tune {s}"))).collect(),
                second_hop: (0..6).map(|t| e(t, &format!("Tune {t}"))).collect(),
            })
            .collect();

        let a = serde_json::to_string(&fold(EntityKind::Tune, &records)).unwrap();
        let b = serde_json::to_string(&fold(EntityKind::Tune, &records)).unwrap();
        assert_eq!(a, b);
        assert_unique(&fold(EntityKind::Tune, &records));
    }

    #[test]
    fn test_one_focal_edge_per_first_hop_node() {
        let records = vec![PathRecord {
            focal: e(1, "Drowsy Maggie"),
            first_hop: (0..12)
                .map(|s| e(1000 + s, &format!("Drowsy Maggie, Reel {s}")))
                .collect(),
            second_hop: vec![],
        }];
        let graph = fold(EntityKind::Tune, &records);

        let targets: Vec<i64> = graph
            .edges
            .iter()
            .filter(|e| e.from == 1)
            .map(|e| e.to)
            .collect();
        assert_eq!(targets, (1000..1012).collect::<Vec<i64>>());
    }
}
