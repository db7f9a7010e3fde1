//! # Tunegraph Graph
//!
//! Neo4j integration for the tune/set relationship explorer.
//!
//! Provides the bounded neighborhood query around a focal tune or set
//! and the fold that turns its path records into a visualization graph.

pub mod client;
pub mod fold;
pub mod queries;

pub use client::{GraphClient, GraphCounts, GraphError};
pub use fold::{fold, GraphFolder};
pub use queries::neighborhood::{
    explore, EntityKind, GraphEntity, NeighborhoodFetcher, NeighborhoodSource, PathRecord,
};
pub use tunegraph_core::config::GraphConfig;
