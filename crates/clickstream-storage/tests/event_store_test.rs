//! Event store contract: ordering, range delete, aggregates, lifecycle.

use clickstream_core::errors::{ClickstreamError, StorageError};
use clickstream_core::models::EventSummary;
use clickstream_core::traits::IEventStore;
use clickstream_storage::EventStore;

fn payload_of_size(n: usize) -> String {
    "x".repeat(n)
}

// ─── Ordering ──────────────────────────────────────────────

#[test]
fn query_oldest_returns_insertion_order() {
    let store = EventStore::open_in_memory().unwrap();
    let ids: Vec<i64> = (0..10)
        .map(|i| store.insert(&format!("{{\"n\":{i}}}")).unwrap())
        .collect();

    let oldest = store.query_oldest(10).unwrap();
    let got: Vec<i64> = oldest.iter().map(|s| s.id).collect();
    assert_eq!(got, ids);
    assert!(got.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn query_oldest_respects_limit_and_omits_payload() {
    let store = EventStore::open_in_memory().unwrap();
    for i in 0..5 {
        store.insert(&payload_of_size(i + 1)).unwrap();
    }
    let oldest = store.query_oldest(3).unwrap();
    assert_eq!(
        oldest,
        vec![
            EventSummary { id: 1, size: 1 },
            EventSummary { id: 2, size: 2 },
            EventSummary { id: 3, size: 3 },
        ]
    );
    assert!(store.query_oldest(0).unwrap().is_empty());
}

#[test]
fn query_all_materializes_payloads_in_order() {
    let store = EventStore::open_in_memory().unwrap();
    store.insert("{\"a\":1}").unwrap();
    store.insert("{\"b\":2}").unwrap();

    let all = store.query_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].payload, "{\"a\":1}");
    assert_eq!(all[0].size, 7);
    assert_eq!(all[1].payload, "{\"b\":2}");
    assert!(all[0].id < all[1].id);
}

#[test]
fn query_after_pages_through_the_queue() {
    let store = EventStore::open_in_memory().unwrap();
    for i in 0..7 {
        store.insert(&format!("{i}")).unwrap();
    }
    let first = store.query_after(0, 3).unwrap();
    assert_eq!(first.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    let second = store.query_after(3, 3).unwrap();
    assert_eq!(second.iter().map(|r| r.id).collect::<Vec<_>>(), vec![4, 5, 6]);
    let third = store.query_after(6, 3).unwrap();
    assert_eq!(third.iter().map(|r| r.id).collect::<Vec<_>>(), vec![7]);
    assert!(store.query_after(7, 3).unwrap().is_empty());
}

#[test]
fn size_is_byte_length_not_char_count() {
    let store = EventStore::open_in_memory().unwrap();
    store.insert("\"é\"").unwrap();
    assert_eq!(store.total_size().unwrap(), 4);
}

// ─── Range delete ──────────────────────────────────────────

#[test]
fn delete_up_to_is_idempotent() {
    let store = EventStore::open_in_memory().unwrap();
    for _ in 0..4 {
        store.insert("{}").unwrap();
    }

    assert_eq!(store.delete_up_to(2).unwrap(), 2);
    let count = store.total_count().unwrap();
    let size = store.total_size().unwrap();

    assert_eq!(store.delete_up_to(2).unwrap(), 0);
    assert_eq!(store.delete_up_to(1).unwrap(), 0);
    assert_eq!(store.total_count().unwrap(), count);
    assert_eq!(store.total_size().unwrap(), size);
}

#[test]
fn delete_scoped_by_id_not_position() {
    let store = EventStore::open_in_memory().unwrap();
    let a = store.insert("1").unwrap();
    let b = store.insert("2").unwrap();
    let c = store.insert("3").unwrap();
    assert_eq!((a, b, c), (1, 2, 3));

    assert_eq!(store.delete_one(b).unwrap(), 1);
    assert_eq!(store.delete_up_to(c).unwrap(), 2);
    assert_eq!(store.total_count().unwrap(), 0);
}

#[test]
fn delete_one_missing_returns_zero() {
    let store = EventStore::open_in_memory().unwrap();
    let id = store.insert("{}").unwrap();
    assert_eq!(store.delete_up_to(id).unwrap(), 1);
    assert_eq!(store.delete_one(id).unwrap(), 0);
    assert_eq!(store.delete_one(999).unwrap(), 0);
}

#[test]
fn ids_are_never_reused_after_deleting_the_newest() {
    let store = EventStore::open_in_memory().unwrap();
    store.insert("a").unwrap();
    let second = store.insert("b").unwrap();
    store.delete_up_to(second).unwrap();

    let third = store.insert("c").unwrap();
    assert!(third > second, "id {third} reused after delete of {second}");
}

// ─── Aggregates ────────────────────────────────────────────

#[test]
fn empty_store_aggregates_are_zero() {
    let store = EventStore::open_in_memory().unwrap();
    assert_eq!(store.total_size().unwrap(), 0);
    assert_eq!(store.total_count().unwrap(), 0);
    let stats = store.stats().unwrap();
    assert_eq!(stats.count, 0);
    assert_eq!(stats.oldest_id, None);
    assert_eq!(stats.newest_id, None);
}

#[test]
fn total_size_tracks_pending_records() {
    let store = EventStore::open_in_memory().unwrap();
    let first = store.insert(&payload_of_size(10)).unwrap();
    store.insert(&payload_of_size(20)).unwrap();
    store.insert(&payload_of_size(30)).unwrap();
    assert_eq!(store.total_size().unwrap(), 60);
    assert_eq!(store.total_count().unwrap(), 3);

    store.delete_up_to(first).unwrap();
    assert_eq!(store.total_size().unwrap(), 50);
    assert_eq!(store.total_count().unwrap(), 2);
}

#[test]
fn insert_bulk_assigns_ascending_ids() {
    let store = EventStore::open_in_memory().unwrap();
    let ids = store.insert_bulk(&["1", "22", "333"]).unwrap();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(store.total_size().unwrap(), 6);
}

// ─── Scenarios ─────────────────────────────────────────────

#[test]
fn end_to_end_insert_query_delete() {
    let store = EventStore::open_in_memory().unwrap();
    store.insert(&payload_of_size(5)).unwrap();
    store.insert(&payload_of_size(7)).unwrap();

    let oldest = store.query_oldest(2).unwrap();
    assert_eq!(
        oldest,
        vec![EventSummary { id: 1, size: 5 }, EventSummary { id: 2, size: 7 }]
    );

    // Upload acknowledged: reclaim everything up to the batch's last id.
    store.delete_up_to(oldest[1].id).unwrap();
    assert_eq!(store.total_count().unwrap(), 0);
    assert_eq!(store.total_size().unwrap(), 0);
}

// ─── Lifecycle ─────────────────────────────────────────────

#[test]
fn operations_after_close_are_storage_faults() {
    let store = EventStore::open_in_memory().unwrap();
    store.insert("{}").unwrap();
    store.close().unwrap();
    assert!(store.is_closed());

    let err = store.insert("{}").unwrap_err();
    assert!(matches!(err, ClickstreamError::Storage(StorageError::Closed)));
    assert!(store.total_count().unwrap_err().is_storage_fault());
    assert!(store.query_oldest(1).is_err());
    assert!(store.delete_up_to(1).is_err());

    // Closing twice is harmless.
    store.close().unwrap();
}

#[test]
fn fresh_store_passes_integrity_check() {
    let store = EventStore::open_in_memory().unwrap();
    store.insert("{}").unwrap();
    assert!(store.integrity_check().unwrap());
}
