//! Batch materialization: consecutive records joined into a JSON array.

use clickstream_core::config::RecorderConfig;
use clickstream_core::errors::SerializationError;
use clickstream_core::models::{Batch, EventRecord};

/// Size and count caps for one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchLimits {
    pub max_bytes: i64,
    pub max_events: usize,
}

impl From<&RecorderConfig> for BatchLimits {
    fn from(config: &RecorderConfig) -> Self {
        Self {
            max_bytes: config.max_submission_bytes,
            max_events: config.max_events_per_batch,
        }
    }
}

/// Reject payloads that cannot be sent as an element of a JSON array.
pub fn validate_payload(record: &EventRecord) -> Result<(), SerializationError> {
    if record.payload.trim().is_empty() {
        return Err(SerializationError::InvalidPayload {
            event_id: record.id,
            reason: "empty payload".to_string(),
        });
    }
    serde_json::from_str::<serde::de::IgnoredAny>(&record.payload).map_err(|e| {
        SerializationError::InvalidPayload {
            event_id: record.id,
            reason: e.to_string(),
        }
    })?;
    Ok(())
}

/// Build the next batch from `records` (ascending ids).
///
/// Takes records in order and stops before the one that would push the batch
/// past `max_bytes` or `max_events`. The first usable record is always taken,
/// even when it alone exceeds `max_bytes`. Unusable payloads are left out of
/// the array but stay inside the id range, so deleting up to `last_id`
/// reclaims them. Returns `None` for an empty slice.
pub fn build_batch(records: &[EventRecord], limits: BatchLimits) -> Option<Batch> {
    let first = records.first()?;

    let mut payload = String::from("[");
    let mut size = 0i64;
    let mut event_count = 0usize;
    let mut last_id = first.id;
    let mut skipped = Vec::new();

    for record in records {
        if let Err(e) = validate_payload(record) {
            tracing::warn!(error = %e, "excluding unusable event from batch");
            skipped.push(record.id);
            last_id = record.id;
            continue;
        }

        let over_size = size + record.size > limits.max_bytes;
        let over_count = event_count + 1 > limits.max_events;
        if event_count > 0 && (over_size || over_count) {
            break;
        }

        if event_count > 0 {
            payload.push(',');
        }
        payload.push_str(&record.payload);
        size += record.size;
        event_count += 1;
        last_id = record.id;
    }
    payload.push(']');

    Some(Batch {
        payload,
        first_id: first.id,
        last_id,
        event_count,
        size,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, payload: &str) -> EventRecord {
        EventRecord {
            id,
            size: payload.len() as i64,
            payload: payload.to_string(),
        }
    }

    fn limits(max_bytes: i64, max_events: usize) -> BatchLimits {
        BatchLimits {
            max_bytes,
            max_events,
        }
    }

    #[test]
    fn joins_records_into_json_array() {
        let records = vec![record(1, "{\"a\":1}"), record(2, "{\"b\":2}")];
        let batch = build_batch(&records, limits(1024, 100)).unwrap();
        assert_eq!(batch.payload, "[{\"a\":1},{\"b\":2}]");
        assert_eq!((batch.first_id, batch.last_id), (1, 2));
        assert_eq!(batch.event_count, 2);
        assert_eq!(batch.size, 14);
        let parsed: serde_json::Value = serde_json::from_str(&batch.payload).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
    }

    #[test]
    fn stops_before_size_limit() {
        let records = vec![record(1, "[1111]"), record(2, "[2222]"), record(3, "[3333]")];
        let batch = build_batch(&records, limits(12, 100)).unwrap();
        assert_eq!(batch.payload, "[[1111],[2222]]");
        assert_eq!(batch.last_id, 2);
    }

    #[test]
    fn stops_at_event_count_limit() {
        let records: Vec<_> = (1..=5).map(|i| record(i, &i.to_string())).collect();
        let batch = build_batch(&records, limits(1024, 3)).unwrap();
        assert_eq!(batch.payload, "[1,2,3]");
        assert_eq!(batch.last_id, 3);
    }

    #[test]
    fn oversized_first_record_is_sent_alone() {
        let big = format!("\"{}\"", "x".repeat(100));
        let records = vec![record(1, &big), record(2, "1")];
        let batch = build_batch(&records, limits(10, 100)).unwrap();
        assert_eq!(batch.event_count, 1);
        assert_eq!(batch.last_id, 1);
    }

    #[test]
    fn unusable_payloads_are_skipped_but_covered() {
        let records = vec![record(1, "{\"ok\":1}"), record(2, "{broken"), record(3, "")];
        let batch = build_batch(&records, limits(1024, 100)).unwrap();
        assert_eq!(batch.payload, "[{\"ok\":1}]");
        assert_eq!(batch.skipped, vec![2, 3]);
        assert_eq!(batch.last_id, 3);
        assert_eq!(batch.event_count, 1);
    }

    #[test]
    fn all_skipped_yields_empty_batch() {
        let records = vec![record(4, "  "), record(5, "nope")];
        let batch = build_batch(&records, limits(1024, 100)).unwrap();
        assert!(batch.is_empty());
        assert_eq!(batch.payload, "[]");
        assert_eq!(batch.last_id, 5);
    }

    #[test]
    fn no_records_no_batch() {
        assert!(build_batch(&[], limits(1024, 100)).is_none());
    }
}
