use serde::{Deserialize, Serialize};

/// An ordered run of pending records materialized for one upload attempt.
///
/// Never persisted. On success the caller deletes every record up to
/// `last_id`; on failure the batch is dropped and the records stay queued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// JSON array text: `[e1,e2,...]`.
    pub payload: String,
    pub first_id: i64,
    pub last_id: i64,
    /// Records whose payload made it into `payload`.
    pub event_count: usize,
    /// Summed stored sizes of the included records.
    pub size: i64,
    /// Ids covered by the batch range but excluded as unusable.
    pub skipped: Vec<i64>,
}

impl Batch {
    /// True when every record in the range was skipped.
    pub fn is_empty(&self) -> bool {
        self.event_count == 0
    }
}
