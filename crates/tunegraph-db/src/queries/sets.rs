//! Set-related database queries.

use rusqlite::params;

use crate::pool::{DbError, DbPool, DbResult};
use crate::queries::tunes::{tune_from_row, TuneRow, TUNE_COLUMNS};

/// SetTable row from database.
#[derive(Debug, Clone)]
pub struct SetRow {
    pub set_id: i64,
    pub description: Option<String>,
}

/// A tune together with its position inside a set.
#[derive(Debug, Clone)]
pub struct SetTuneRow {
    pub tune_index: Option<i64>,
    pub tune: TuneRow,
}

/// Get a set by ID.
pub fn get_set(pool: &DbPool, set_id: i64) -> DbResult<SetRow> {
    pool.with_conn(|conn| {
        conn.query_row(
            "SELECT set_id, description FROM SetTable WHERE set_id = ?1",
            params![set_id],
            |row| {
                Ok(SetRow {
                    set_id: row.get(0)?,
                    description: row.get(1)?,
                })
            },
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => DbError::NotFound(format!("Set: {}", set_id)),
            e => DbError::Connection(e),
        })
    })
}

/// List the tunes of a set in playing order.
pub fn list_tunes_in_set(pool: &DbPool, set_id: i64) -> DbResult<Vec<SetTuneRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(&format!(
            "SELECT ts.tune_index, {TUNE_COLUMNS}
             FROM TuneToSet ts
             JOIN Tune t ON t.tune_id = ts.tune_id
             WHERE ts.set_id = ?1
             ORDER BY ts.tune_index, t.tune_id"
        ))?;

        let rows = stmt
            .query_map(params![set_id], |row| {
                Ok(SetTuneRow {
                    tune_index: row.get(0)?,
                    tune: tune_from_row(row, 1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    })
}

/// Count all sets.
pub fn count_sets(pool: &DbPool) -> DbResult<i64> {
    pool.with_conn(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM SetTable", [], |row| row.get(0))?)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::test_support::seeded_pool;

    #[test]
    fn test_tunes_in_set_follow_tune_index() {
        let pool = seeded_pool();
        let tunes = list_tunes_in_set(&pool, 101).unwrap();
        let names: Vec<&str> = tunes.iter().map(|t| t.tune.name.as_str()).collect();
        assert_eq!(names, vec!["Drowsy Maggie", "The Blarney Pilgrim"]);
        assert_eq!(tunes[1].tune_index, Some(2));
    }

    #[test]
    fn test_get_set() {
        let pool = seeded_pool();
        let set = get_set(&pool, 102).unwrap();
        assert_eq!(set.description.as_deref(), Some("Drowsy Maggie, Cooley's"));
        assert!(matches!(get_set(&pool, 7), Err(DbError::NotFound(_))));
        assert_eq!(count_sets(&pool).unwrap(), 2);
    }
}
