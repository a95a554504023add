//! Pending queue aggregates read by capacity checks.

use rusqlite::Connection;

use clickstream_core::errors::ClickstreamResult;

use crate::to_storage_err;

/// Sum of `event_size` over the queue. 0 when empty.
pub fn total_size(conn: &Connection) -> ClickstreamResult<i64> {
    conn.query_row(
        "SELECT COALESCE(SUM(event_size), 0) FROM clickstream_event",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Number of pending records.
pub fn total_count(conn: &Connection) -> ClickstreamResult<i64> {
    conn.query_row("SELECT COUNT(*) FROM clickstream_event", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Snapshot of the queue for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueStats {
    pub count: i64,
    pub total_size: i64,
    pub oldest_id: Option<i64>,
    pub newest_id: Option<i64>,
}

/// Count, size and id bounds in a single pass.
pub fn queue_stats(conn: &Connection) -> ClickstreamResult<QueueStats> {
    conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(event_size), 0), MIN(event_id), MAX(event_id)
         FROM clickstream_event",
        [],
        |row| {
            Ok(QueueStats {
                count: row.get(0)?,
                total_size: row.get(1)?,
                oldest_id: row.get(2)?,
                newest_id: row.get(3)?,
            })
        },
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
