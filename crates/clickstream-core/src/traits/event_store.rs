use crate::errors::ClickstreamResult;
use crate::models::{EventRecord, EventSummary};

/// Durable, append-only, strictly ordered queue of pending events.
///
/// All operations block on local I/O. The store serializes id assignment
/// across concurrent writers but holds no lock across a query/upload/delete
/// sequence: at most one drain may be in flight at a time.
pub trait IEventStore: Send + Sync {
    // --- Write ---
    fn insert(&self, payload: &str) -> ClickstreamResult<i64>;

    // --- Read ---
    fn query_oldest(&self, limit: usize) -> ClickstreamResult<Vec<EventSummary>>;
    fn query_all(&self) -> ClickstreamResult<Vec<EventRecord>>;
    fn query_after(&self, after_id: i64, limit: usize) -> ClickstreamResult<Vec<EventRecord>>;

    // --- Delete ---
    fn delete_up_to(&self, last_id: i64) -> ClickstreamResult<usize>;
    fn delete_one(&self, id: i64) -> ClickstreamResult<usize>;

    // --- Aggregation ---
    fn total_size(&self) -> ClickstreamResult<i64>;
    fn total_count(&self) -> ClickstreamResult<i64>;

    // --- Lifecycle ---
    fn close(&self) -> ClickstreamResult<()>;
}
