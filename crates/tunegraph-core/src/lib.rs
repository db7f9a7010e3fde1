//! Tunegraph Core Library
//!
//! Domain models for traditional-music session data, the visualization
//! payload produced by the graph explorer, and service configuration.

pub mod config;
pub mod error;
pub mod session;
pub mod set;
pub mod tune;
pub mod viz;

pub use config::AppConfig;
pub use error::{TunegraphError, TunegraphResult};
pub use viz::{NodeColor, NodeRole, VizEdge, VizGraph, VizNode};
