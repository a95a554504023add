//! Property tests for the event store.

use clickstream_core::traits::IEventStore;
use clickstream_storage::EventStore;
use proptest::prelude::*;

fn arb_payloads() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z0-9]{0,40}", 1..40)
}

proptest! {
    #[test]
    fn oldest_ids_are_strictly_increasing(payloads in arb_payloads()) {
        let store = EventStore::open_in_memory().unwrap();
        let inserted: Vec<i64> = payloads.iter().map(|p| store.insert(p).unwrap()).collect();

        let oldest = store.query_oldest(payloads.len()).unwrap();
        let ids: Vec<i64> = oldest.iter().map(|s| s.id).collect();
        prop_assert_eq!(&ids, &inserted);
        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn total_size_equals_sum_of_pending_sizes(
        payloads in arb_payloads(),
        cut in 0usize..40,
    ) {
        let store = EventStore::open_in_memory().unwrap();
        let ids: Vec<i64> = payloads.iter().map(|p| store.insert(p).unwrap()).collect();

        let cut = cut.min(ids.len() - 1);
        store.delete_up_to(ids[cut]).unwrap();

        let expected: i64 = payloads[cut + 1..].iter().map(|p| p.len() as i64).sum();
        prop_assert_eq!(store.total_size().unwrap(), expected);
        prop_assert_eq!(store.total_count().unwrap(), (ids.len() - cut - 1) as i64);

        let summed: i64 = store.query_all().unwrap().iter().map(|r| r.size).sum();
        prop_assert_eq!(summed, expected);
    }

    #[test]
    fn repeated_range_delete_is_a_noop(payloads in arb_payloads(), k in 1i64..40) {
        let store = EventStore::open_in_memory().unwrap();
        for p in &payloads {
            store.insert(p).unwrap();
        }
        store.delete_up_to(k).unwrap();
        let count = store.total_count().unwrap();
        prop_assert_eq!(store.delete_up_to(k).unwrap(), 0);
        prop_assert_eq!(store.total_count().unwrap(), count);
    }
}
