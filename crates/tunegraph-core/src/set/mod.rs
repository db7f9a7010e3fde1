//! Set lookups.

pub mod model;

use crate::error::{TunegraphError, TunegraphResult};
use model::{Set, SetSummary, SetTune};
use tunegraph_db::queries::sets as queries;
use tunegraph_db::{DbError, DbPool};

/// Get a set with its ordered tunes.
pub fn get_set(pool: &DbPool, set_id: i64) -> TunegraphResult<Set> {
    let summary = queries::get_set(pool, set_id)
        .map(SetSummary::from_row)
        .map_err(|e| match e {
            DbError::NotFound(_) => TunegraphError::SetNotFound(set_id),
            e => e.into(),
        })?;

    let tunes = queries::list_tunes_in_set(pool, set_id)?
        .into_iter()
        .map(SetTune::from_row)
        .collect();

    Ok(Set {
        set_id: summary.set_id,
        description: summary.description,
        tunes,
    })
}
