//! Tune lookups.

pub mod model;

use crate::error::{TunegraphError, TunegraphResult};
use crate::set::model::SetSummary;
use model::Tune;
use tunegraph_db::queries::tunes as queries;
use tunegraph_db::{DbError, DbPool};

/// List tunes, optionally filtered by a name substring.
pub fn list_tunes(pool: &DbPool, name_filter: Option<&str>) -> TunegraphResult<Vec<Tune>> {
    let rows = queries::list_tunes(pool, name_filter)?;
    Ok(rows.into_iter().map(Tune::from_row).collect())
}

/// Get a tune by ID.
pub fn get_tune(pool: &DbPool, tune_id: i64) -> TunegraphResult<Tune> {
    let row = queries::get_tune(pool, tune_id).map_err(|e| match e {
        DbError::NotFound(_) => TunegraphError::TuneNotFound(tune_id),
        e => e.into(),
    })?;
    Ok(Tune::from_row(row))
}

/// List the sets a tune appears in. Fails if the tune does not exist.
pub fn list_sets_for_tune(pool: &DbPool, tune_id: i64) -> TunegraphResult<Vec<SetSummary>> {
    get_tune(pool, tune_id)?;
    let rows = queries::list_sets_for_tune(pool, tune_id)?;
    Ok(rows.into_iter().map(SetSummary::from_row).collect())
}
