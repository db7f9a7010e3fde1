//! Bounded neighborhood around a focal tune or set.
//!
//! The graph holds `(:SetTable)-[:CONTAINS]->(:Tune)` edges only, so the
//! neighborhood of a tune is the sets containing it plus the other tunes of
//! those sets, and symmetrically for a set.

use async_trait::async_trait;
use neo4rs::{query, DeError, Node, Query, Row};
use tracing::debug;

use tunegraph_core::VizGraph;

use crate::client::{GraphClient, GraphError};
use crate::fold::fold;

/// Tune-rooted traversal. The first hop is capped before expansion.
const TUNE_NEIGHBORHOOD: &str = "MATCH (t:Tune {name: $name})<-[:CONTAINS]-(s:SetTable)
 WITH t, collect(s)[..$limit] AS limitedSets
 UNWIND limitedSets AS ls
 MATCH (ls)-[:CONTAINS]->(other:Tune)
 RETURN t, limitedSets, collect(DISTINCT other) AS otherTunes";

/// Set-rooted traversal. The first hop is capped before expansion.
const SET_NEIGHBORHOOD: &str = "MATCH (s:SetTable {description: $name})-[:CONTAINS]->(t:Tune)
 WITH s, collect(t)[..$limit] AS limitedTunes
 UNWIND limitedTunes AS lt
 MATCH (lt)<-[:CONTAINS]-(other:SetTable)
 RETURN s, limitedTunes, collect(DISTINCT other) AS otherSets";

/// The two node labels of the session graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Tune,
    Set,
}

impl EntityKind {
    /// The kind on the other side of a `CONTAINS` edge.
    pub fn opposite(self) -> Self {
        match self {
            Self::Tune => Self::Set,
            Self::Set => Self::Tune,
        }
    }

    pub fn id_property(self) -> &'static str {
        match self {
            Self::Tune => "tune_id",
            Self::Set => "set_id",
        }
    }

    pub fn label_property(self) -> &'static str {
        match self {
            Self::Tune => "name",
            Self::Set => "description",
        }
    }

    fn cypher(self) -> &'static str {
        match self {
            Self::Tune => TUNE_NEIGHBORHOOD,
            Self::Set => SET_NEIGHBORHOOD,
        }
    }

    /// Record field names: (focal, capped first hop, second hop).
    fn fields(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::Tune => ("t", "limitedSets", "otherTunes"),
            Self::Set => ("s", "limitedTunes", "otherSets"),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tune => write!(f, "tune"),
            Self::Set => write!(f, "set"),
        }
    }
}

/// A graph node reduced to its domain id and display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEntity {
    pub id: i64,
    pub label: String,
}

impl GraphEntity {
    pub fn new(id: i64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    fn from_node(node: &Node, kind: EntityKind) -> Result<Self, GraphError> {
        let id: i64 = node.get(kind.id_property()).map_err(|e| {
            GraphError::Decode(format!("{kind} node without {}: {e}", kind.id_property()))
        })?;
        // A null label is stored as an absent property; it folds as "".
        let label = match node.get::<String>(kind.label_property()) {
            Ok(label) => label,
            Err(DeError::NoSuchProperty) => String::new(),
            Err(e) => {
                return Err(GraphError::Decode(format!(
                    "{kind} {id} has an unreadable {}: {e}",
                    kind.label_property()
                )));
            }
        };
        Ok(Self { id, label })
    }
}

/// One row of the neighborhood query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRecord {
    pub focal: GraphEntity,
    /// Directly connected entities, at most the configured cap, in store order.
    pub first_hop: Vec<GraphEntity>,
    /// Entities connected to any capped first-hop entity. May include the focal.
    pub second_hop: Vec<GraphEntity>,
}

impl PathRecord {
    fn from_row(row: &Row, focus: EntityKind) -> Result<Self, GraphError> {
        let (focal_field, first_field, second_field) = focus.fields();

        let focal: Node = row
            .get(focal_field)
            .map_err(|e| GraphError::Decode(format!("field '{focal_field}': {e}")))?;
        let first: Vec<Node> = row
            .get(first_field)
            .map_err(|e| GraphError::Decode(format!("field '{first_field}': {e}")))?;
        let second: Vec<Node> = row
            .get(second_field)
            .map_err(|e| GraphError::Decode(format!("field '{second_field}': {e}")))?;

        let neighbor = focus.opposite();
        Ok(Self {
            focal: GraphEntity::from_node(&focal, focus)?,
            first_hop: first
                .iter()
                .map(|n| GraphEntity::from_node(n, neighbor))
                .collect::<Result<_, _>>()?,
            second_hop: second
                .iter()
                .map(|n| GraphEntity::from_node(n, focus))
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Anything that can produce the path records of a neighborhood.
#[async_trait]
pub trait NeighborhoodSource: Send + Sync {
    /// Fetch the records rooted at the entity whose name (tune) or
    /// description (set) equals `key`. No match yields an empty vector.
    async fn fetch_neighborhood(
        &self,
        focus: EntityKind,
        key: &str,
    ) -> Result<Vec<PathRecord>, GraphError>;
}

/// Neo4j-backed neighborhood source.
#[derive(Clone)]
pub struct NeighborhoodFetcher {
    client: GraphClient,
    first_hop_limit: usize,
}

impl NeighborhoodFetcher {
    pub fn new(client: GraphClient, first_hop_limit: usize) -> Self {
        Self {
            client,
            first_hop_limit,
        }
    }
}

/// Build the capped neighborhood query rooted at `key`.
fn neighborhood_query(focus: EntityKind, key: &str, limit: usize) -> Query {
    query(focus.cypher()).param("name", key).param("limit", limit as i64)
}

#[async_trait]
impl NeighborhoodSource for NeighborhoodFetcher {
    async fn fetch_neighborhood(
        &self,
        focus: EntityKind,
        key: &str,
    ) -> Result<Vec<PathRecord>, GraphError> {
        let q = neighborhood_query(focus, key, self.first_hop_limit);
        let rows = self.client.query(q).await?;
        rows.iter().map(|row| PathRecord::from_row(row, focus)).collect()
    }
}

/// Fetch the neighborhood of `key` and fold it into a visualization graph.
pub async fn explore(
    source: &dyn NeighborhoodSource,
    focus: EntityKind,
    key: &str,
) -> Result<VizGraph, GraphError> {
    let records = source.fetch_neighborhood(focus, key).await?;
    let graph = fold(focus, &records);

    debug!(
        %focus,
        key,
        records = records.len(),
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "Folded neighborhood"
    );
    Ok(graph)
}
