use serde::{Deserialize, Serialize};

use super::defaults;

/// Capacity and batching limits applied by the recorder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecorderConfig {
    /// Oldest events are evicted while the pending queue exceeds this many bytes.
    pub max_db_size_bytes: i64,
    /// Upper bound on the summed event sizes of one batch.
    pub max_submission_bytes: i64,
    /// Upper bound on the number of events in one batch.
    pub max_events_per_batch: usize,
    /// Successful uploads per drain before yielding.
    pub max_submissions: usize,
    /// First bundle sequence id when the host has none persisted.
    pub initial_bundle_sequence_id: i64,
    /// Log every recorded event payload at info level.
    pub log_events: bool,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            max_db_size_bytes: defaults::DEFAULT_MAX_DB_SIZE_BYTES,
            max_submission_bytes: defaults::DEFAULT_MAX_SUBMISSION_BYTES,
            max_events_per_batch: defaults::DEFAULT_MAX_EVENTS_PER_BATCH,
            max_submissions: defaults::DEFAULT_MAX_SUBMISSIONS,
            initial_bundle_sequence_id: defaults::DEFAULT_INITIAL_BUNDLE_SEQUENCE_ID,
            log_events: false,
        }
    }
}
