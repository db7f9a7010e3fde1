//! Read queries against the session graph.

pub mod neighborhood;
