//! Tune domain models.

use serde::{Deserialize, Serialize};
use tunegraph_db::queries::tunes::TuneRow;

/// A tune as recorded from a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tune {
    pub tune_id: i64,
    pub the_session_tune_id: Option<i64>,
    pub name: String,
    pub abc: Option<String>,
    pub tune_type: Option<String>,
    pub tune_meter: Option<String>,
    pub tune_mode: Option<String>,
    pub tune_url: Option<String>,
}

impl Tune {
    /// Create from database row.
    pub fn from_row(row: TuneRow) -> Self {
        Self {
            tune_id: row.tune_id,
            the_session_tune_id: row.the_session_tune_id,
            name: row.name,
            abc: row.abc,
            tune_type: row.tune_type,
            tune_meter: row.tune_meter,
            tune_mode: row.tune_mode,
            tune_url: row.tune_url,
        }
    }
}
