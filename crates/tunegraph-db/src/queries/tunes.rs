//! Tune-related database queries.

use rusqlite::{params, Row};

use crate::pool::{DbError, DbPool, DbResult};
use crate::queries::sets::SetRow;
use crate::queries::LIST_LIMIT;

/// Tune row from database.
#[derive(Debug, Clone)]
pub struct TuneRow {
    pub tune_id: i64,
    pub the_session_tune_id: Option<i64>,
    pub name: String,
    pub abc: Option<String>,
    pub tune_type: Option<String>,
    pub tune_meter: Option<String>,
    pub tune_mode: Option<String>,
    pub tune_url: Option<String>,
}

pub(crate) const TUNE_COLUMNS: &str =
    "t.tune_id, t.the_session_tune_id, t.name, t.abc, t.tune_type, t.tune_meter, t.tune_mode, t.tune_url";

/// Map the leading `TUNE_COLUMNS` of a row, starting at `offset`.
pub(crate) fn tune_from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<TuneRow> {
    Ok(TuneRow {
        tune_id: row.get(offset)?,
        the_session_tune_id: row.get(offset + 1)?,
        name: row.get(offset + 2)?,
        abc: row.get(offset + 3)?,
        tune_type: row.get(offset + 4)?,
        tune_meter: row.get(offset + 5)?,
        tune_mode: row.get(offset + 6)?,
        tune_url: row.get(offset + 7)?,
    })
}

/// List tunes ordered by name, optionally filtered by a name substring.
pub fn list_tunes(pool: &DbPool, name_filter: Option<&str>) -> DbResult<Vec<TuneRow>> {
    let pattern = format!("%{}%", name_filter.unwrap_or(""));
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(&format!(
            "SELECT {TUNE_COLUMNS} FROM Tune t
             WHERE t.name LIKE ?1
             ORDER BY t.name, t.tune_id
             LIMIT ?2"
        ))?;

        let rows = stmt
            .query_map(params![pattern, LIST_LIMIT], |row| tune_from_row(row, 0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    })
}

/// Get a tune by ID.
pub fn get_tune(pool: &DbPool, tune_id: i64) -> DbResult<TuneRow> {
    pool.with_conn(|conn| {
        conn.query_row(
            &format!("SELECT {TUNE_COLUMNS} FROM Tune t WHERE t.tune_id = ?1"),
            params![tune_id],
            |row| tune_from_row(row, 0),
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => DbError::NotFound(format!("Tune: {}", tune_id)),
            e => DbError::Connection(e),
        })
    })
}

/// List the sets a tune is played in.
pub fn list_sets_for_tune(pool: &DbPool, tune_id: i64) -> DbResult<Vec<SetRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT s.set_id, s.description
             FROM TuneToSet ts
             JOIN SetTable s ON s.set_id = ts.set_id
             WHERE ts.tune_id = ?1
             ORDER BY s.set_id
             LIMIT ?2",
        )?;

        let rows = stmt
            .query_map(params![tune_id, LIST_LIMIT], |row| {
                Ok(SetRow {
                    set_id: row.get(0)?,
                    description: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    })
}

/// Count all tunes.
pub fn count_tunes(pool: &DbPool) -> DbResult<i64> {
    pool.with_conn(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM Tune", [], |row| row.get(0))?))
}
