//! Tunegraph Database Layer
//!
//! Read-only access to the relational session database (tunes, sets,
//! sessions and the ordering tables that join them).

pub mod pool;
pub mod queries;

pub use pool::{DbError, DbPool, DbResult};

/// Open the session database at `path` in read-only mode.
pub fn init_pool(path: impl AsRef<std::path::Path>) -> DbResult<DbPool> {
    DbPool::open_read_only(path)
}
