//! Session lookups.

pub mod model;

use crate::error::{TunegraphError, TunegraphResult};
use crate::set;
use model::{Session, SessionSet};
use tunegraph_db::queries::sessions as queries;
use tunegraph_db::{DbError, DbPool};

/// List sessions, newest first.
pub fn list_sessions(pool: &DbPool) -> TunegraphResult<Vec<Session>> {
    let rows = queries::list_sessions(pool)?;
    Ok(rows.into_iter().map(Session::from_row).collect())
}

/// Get a session by ID.
pub fn get_session(pool: &DbPool, session_id: i64) -> TunegraphResult<Session> {
    let row = queries::get_session(pool, session_id).map_err(|e| match e {
        DbError::NotFound(_) => TunegraphError::SessionNotFound(session_id),
        e => e.into(),
    })?;
    Ok(Session::from_row(row))
}

/// List the sets played at a session, each with its ordered tunes.
pub fn list_session_sets(pool: &DbPool, session_id: i64) -> TunegraphResult<Vec<SessionSet>> {
    get_session(pool, session_id)?;

    queries::list_sets_for_session(pool, session_id)?
        .into_iter()
        .map(|row| {
            Ok(SessionSet {
                set_index: row.set_index,
                set: set::get_set(pool, row.set_id)?,
            })
        })
        .collect()
}
