use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{FieldMap, RecordId};

/// A stored record: generated identity, store timestamps, declared fields.
///
/// `fields` holds exactly the schema-normalized payload; identity and
/// timestamps never appear inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub fields: FieldMap,
}
