//! Neo4j connection client.

use neo4rs::{query, ConfigBuilder, Graph, Query};
use serde::de::DeserializeOwned;

use tunegraph_core::config::GraphConfig;

/// Errors from graph operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Neo4j connection error: {0}")]
    Connection(String),

    #[error("Neo4j query error: {0}")]
    Query(#[from] neo4rs::Error),

    #[error("Unexpected graph data: {0}")]
    Decode(String),
}

/// Client for Neo4j graph reads.
///
/// Clone is cheap: the underlying `Graph` is a shared connection pool,
/// safe to use from concurrent request handlers.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Create a new GraphClient from config.
    ///
    /// `Graph::connect` only builds the pool; the `RETURN 1` ping forces a
    /// real bolt handshake so an unreachable server fails here instead of on
    /// the first request.
    pub async fn connect(config: &GraphConfig) -> Result<Self, GraphError> {
        let neo4j_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .db(config.database.as_str())
            .max_connections(config.max_connections)
            .fetch_size(config.fetch_size)
            .build()
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        let graph = Graph::connect(neo4j_config)
            .await
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        graph
            .run(query("RETURN 1"))
            .await
            .map_err(|e| {
                GraphError::Connection(format!("Neo4j is not responding to queries: {e}"))
            })?;

        tracing::info!(uri = %config.uri, "Connected to Neo4j");
        Ok(Self { graph })
    }

    /// Execute a read query and collect all rows, in the order the store returns them.
    pub async fn query(&self, query: Query) -> Result<Vec<neo4rs::Row>, GraphError> {
        let mut stream = self.graph.execute(query).await?;
        let mut rows = Vec::new();
        while let Some(row) = stream.next().await? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Execute a query and return a single scalar value.
    pub async fn query_scalar<T: DeserializeOwned>(
        &self,
        query: Query,
        field: &str,
    ) -> Result<Option<T>, GraphError> {
        let rows = self.query(query).await?;
        match rows.into_iter().next() {
            Some(row) => {
                let val: T = row
                    .get(field)
                    .map_err(|e| GraphError::Decode(format!("field '{field}': {e}")))?;
                Ok(Some(val))
            }
            None => Ok(None),
        }
    }

    /// Count tunes, sets and containment edges for status display.
    pub async fn get_counts(&self) -> Result<GraphCounts, GraphError> {
        let tunes: i64 = self
            .query_scalar(query("MATCH (t:Tune) RETURN count(t) AS count"), "count")
            .await?
            .unwrap_or(0);
        let sets: i64 = self
            .query_scalar(query("MATCH (s:SetTable) RETURN count(s) AS count"), "count")
            .await?
            .unwrap_or(0);
        let contains: i64 = self
            .query_scalar(
                query("MATCH (:SetTable)-[r:CONTAINS]->(:Tune) RETURN count(r) AS count"),
                "count",
            )
            .await?
            .unwrap_or(0);

        Ok(GraphCounts {
            tunes: tunes as usize,
            sets: sets as usize,
            contains: contains as usize,
        })
    }

    /// Get a reference to the underlying neo4rs Graph.
    pub fn inner(&self) -> &Graph {
        &self.graph
    }
}

/// Node and relationship counts.
#[derive(Debug, Clone, Copy)]
pub struct GraphCounts {
    pub tunes: usize,
    pub sets: usize,
    pub contains: usize,
}
