use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{new_id, now};

/// Identity and audit provenance shared by all persisted entities.
///
/// Embedded (flattened) in each entity rather than inherited. Records carry
/// who created/last touched them and when; `created_at` doubles as the
/// ordering tiebreaker for user-defined records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Auditing {
    /// Unique identifier (UUIDv4, no dashes).
    pub id: String,

    /// Creation timestamp (RFC 3339 on the wire).
    pub created_at: DateTime<Utc>,

    /// Last update timestamp (RFC 3339 on the wire).
    pub updated_at: DateTime<Utc>,

    /// User id that created the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// User id that last updated the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

impl Auditing {
    /// Fresh audit block: new id, both timestamps set to now.
    pub fn new(created_by: Option<String>) -> Self {
        let ts = now();
        Self {
            id: new_id(),
            created_at: ts,
            updated_at: ts,
            created_by: created_by.clone(),
            updated_by: created_by,
        }
    }

    /// Rebuild with `updated_at` set to now and a new updating actor.
    ///
    /// Mutation always goes through a rebuild like this one; entities are
    /// never touched in place.
    pub fn touched(&self, updated_by: Option<String>) -> Self {
        Self {
            updated_at: now(),
            updated_by,
            ..self.clone()
        }
    }

    /// Creation time as epoch milliseconds.
    pub fn created_at_millis(&self) -> i64 {
        self.created_at.timestamp_millis()
    }
}
