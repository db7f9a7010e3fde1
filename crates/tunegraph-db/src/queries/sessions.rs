//! Session-related database queries.

use rusqlite::{params, Row};

use crate::pool::{DbError, DbPool, DbResult};
use crate::queries::LIST_LIMIT;

/// Session row joined with its location.
#[derive(Debug, Clone)]
pub struct SessionRow {
    pub session_id: i64,
    pub session_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: Option<String>,
    pub location_id: Option<i64>,
    pub location_description: Option<String>,
    pub location_address: Option<String>,
    pub location_url: Option<String>,
}

/// A set together with its position inside a session.
#[derive(Debug, Clone)]
pub struct SessionSetRow {
    pub set_index: Option<i64>,
    pub set_id: i64,
    pub description: Option<String>,
}

const SESSION_SELECT: &str = "SELECT s.session_id, s.session_date, s.start_time, s.end_time, s.description,
        l.location_id, l.description, l.address, l.url
 FROM Session s
 LEFT JOIN Location l ON l.location_id = s.location_id";

fn session_from_row(row: &Row<'_>) -> rusqlite::Result<SessionRow> {
    Ok(SessionRow {
        session_id: row.get(0)?,
        session_date: row.get(1)?,
        start_time: row.get(2)?,
        end_time: row.get(3)?,
        description: row.get(4)?,
        location_id: row.get(5)?,
        location_description: row.get(6)?,
        location_address: row.get(7)?,
        location_url: row.get(8)?,
    })
}

/// List sessions, newest first.
pub fn list_sessions(pool: &DbPool) -> DbResult<Vec<SessionRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(&format!(
            "{SESSION_SELECT}
             ORDER BY s.session_date DESC, s.session_id DESC
             LIMIT ?1"
        ))?;

        let rows = stmt
            .query_map(params![LIST_LIMIT], session_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    })
}

/// Get a session by ID.
pub fn get_session(pool: &DbPool, session_id: i64) -> DbResult<SessionRow> {
    pool.with_conn(|conn| {
        conn.query_row(
            &format!("{SESSION_SELECT} WHERE s.session_id = ?1"),
            params![session_id],
            session_from_row,
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => {
                DbError::NotFound(format!("Session: {}", session_id))
            }
            e => DbError::Connection(e),
        })
    })
}

/// List the sets played at a session in order.
pub fn list_sets_for_session(pool: &DbPool, session_id: i64) -> DbResult<Vec<SessionSetRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT ss.set_index, st.set_id, st.description
             FROM SetToSession ss
             JOIN SetTable st ON st.set_id = ss.set_id
             WHERE ss.session_id = ?1
             ORDER BY ss.set_index, st.set_id",
        )?;

        let rows = stmt
            .query_map(params![session_id], |row| {
                Ok(SessionSetRow {
                    set_index: row.get(0)?,
                    set_id: row.get(1)?,
                    description: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    })
}

/// Count all sessions.
pub fn count_sessions(pool: &DbPool) -> DbResult<i64> {
    pool.with_conn(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM Session", [], |row| row.get(0))?))
}
