//! Session domain models.

use serde::{Deserialize, Serialize};
use tunegraph_db::queries::sessions::SessionRow;

use crate::set::model::Set;

/// Where a session is held.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub location_id: i64,
    pub description: Option<String>,
    pub address: Option<String>,
    pub url: Option<String>,
}

/// One evening of tunes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub session_id: i64,
    pub session_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: Option<String>,
    pub location: Option<Location>,
}

impl Session {
    /// Create from database row.
    pub fn from_row(row: SessionRow) -> Self {
        let location = row.location_id.map(|location_id| Location {
            location_id,
            description: row.location_description,
            address: row.location_address,
            url: row.location_url,
        });

        Self {
            session_id: row.session_id,
            session_date: row.session_date,
            start_time: row.start_time,
            end_time: row.end_time,
            description: row.description,
            location,
        }
    }
}

/// A set at its position in a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSet {
    pub set_index: Option<i64>,
    #[serde(flatten)]
    pub set: Set,
}
