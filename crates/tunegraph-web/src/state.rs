//! Application state.

use std::sync::Arc;

use tunegraph_db::DbPool;
use tunegraph_graph::NeighborhoodSource;

/// Store handles shared across handlers, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub graph: Arc<dyn NeighborhoodSource>,
}

impl AppState {
    pub fn new(db: DbPool, graph: Arc<dyn NeighborhoodSource>) -> Self {
        Self { db, graph }
    }
}
