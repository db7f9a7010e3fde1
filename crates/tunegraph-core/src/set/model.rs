//! Set domain models.
//!
//! A set is an ordered group of tunes played back to back. Its description
//! is the comma-joined list of its tune names.

use serde::{Deserialize, Serialize};
use tunegraph_db::queries::sets::{SetRow, SetTuneRow};

use crate::tune::model::Tune;

/// A set without its tunes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetSummary {
    pub set_id: i64,
    pub description: String,
}

impl SetSummary {
    pub fn from_row(row: SetRow) -> Self {
        Self {
            set_id: row.set_id,
            description: row.description.unwrap_or_default(),
        }
    }
}

/// A tune at its position in a set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetTune {
    pub tune_index: Option<i64>,
    #[serde(flatten)]
    pub tune: Tune,
}

impl SetTune {
    pub fn from_row(row: SetTuneRow) -> Self {
        Self {
            tune_index: row.tune_index,
            tune: Tune::from_row(row.tune),
        }
    }
}

/// A set with its tunes in playing order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Set {
    pub set_id: i64,
    pub description: String,
    pub tunes: Vec<SetTune>,
}
