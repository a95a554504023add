//! Batch limits hold for arbitrary event sizes, and batches partition the queue.

use clickstream_core::models::EventRecord;
use clickstream_recorder::{build_batch, BatchLimits};
use proptest::prelude::*;

fn records_from(pads: &[usize]) -> Vec<EventRecord> {
    pads.iter()
        .enumerate()
        .map(|(i, pad)| {
            let payload = format!("{{\"p\":\"{}\"}}", "x".repeat(*pad));
            EventRecord {
                id: i as i64 + 1,
                size: payload.len() as i64,
                payload,
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn batch_stays_within_limits(
        pads in prop::collection::vec(0usize..200, 1..60),
        max_bytes in 8i64..2_000,
        max_events in 1usize..20,
    ) {
        let records = records_from(&pads);
        let limits = BatchLimits { max_bytes, max_events };
        let batch = build_batch(&records, limits).unwrap();

        prop_assert!(batch.event_count >= 1);
        prop_assert!(batch.event_count <= max_events);
        prop_assert!(batch.event_count == 1 || batch.size <= max_bytes);
        prop_assert_eq!(batch.first_id, 1);
        prop_assert_eq!(batch.last_id, batch.event_count as i64);
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&batch.payload).unwrap();
        prop_assert_eq!(parsed.len(), batch.event_count);
    }

    #[test]
    fn consecutive_batches_cover_every_record_once(
        pads in prop::collection::vec(0usize..100, 1..80),
        max_bytes in 16i64..1_000,
    ) {
        let records = records_from(&pads);
        let limits = BatchLimits { max_bytes, max_events: 10 };

        let mut rest = records.as_slice();
        let mut covered = Vec::new();
        while let Some(batch) = build_batch(rest, limits) {
            covered.extend(batch.first_id..=batch.last_id);
            let taken = (batch.last_id - batch.first_id + 1) as usize;
            rest = &rest[taken..];
        }
        let expected: Vec<i64> = records.iter().map(|r| r.id).collect();
        prop_assert_eq!(covered, expected);
    }
}
