//! Route handlers.

pub mod graph;
pub mod health;
pub mod sessions;
pub mod sets;
pub mod tunes;
