use serde::{Deserialize, Serialize};

/// One persisted event awaiting upload.
///
/// `id` is assigned by the store and strictly increases with insertion order.
/// Records are only ever inserted or deleted, never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: i64,
    /// Byte length of `payload`, captured at insert time.
    pub size: i64,
    /// Serialized event body. Opaque to the store.
    pub payload: String,
}

/// `(id, size)` projection of a record, without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: i64,
    pub size: i64,
}

impl From<&EventRecord> for EventSummary {
    fn from(record: &EventRecord) -> Self {
        Self {
            id: record.id,
            size: record.size,
        }
    }
}
