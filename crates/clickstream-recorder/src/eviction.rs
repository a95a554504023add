//! Local capacity enforcement: drop the oldest records while over the limit.

use clickstream_core::constants::EVICTION_QUERY_LIMIT;
use clickstream_core::errors::ClickstreamResult;
use clickstream_core::traits::IEventStore;

/// Delete oldest records until `total_size() <= max_bytes`. Returns how many
/// records were deleted.
pub fn evict_oldest(store: &dyn IEventStore, max_bytes: i64) -> ClickstreamResult<usize> {
    let mut evicted = 0usize;
    loop {
        let mut total = store.total_size()?;
        if total <= max_bytes {
            break;
        }
        let oldest = store.query_oldest(EVICTION_QUERY_LIMIT)?;
        if oldest.is_empty() {
            break;
        }
        for summary in oldest {
            if total <= max_bytes {
                break;
            }
            if store.delete_one(summary.id)? > 0 {
                total -= summary.size;
                evicted += 1;
            }
        }
    }
    if evicted > 0 {
        tracing::warn!(evicted, max_bytes, "event store over capacity, evicted oldest events");
    }
    Ok(evicted)
}
