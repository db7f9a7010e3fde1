//! Database query implementations.

pub mod sessions;
pub mod sets;
pub mod tunes;

/// Upper bound on rows returned by list queries.
pub const LIST_LIMIT: i64 = 100;
