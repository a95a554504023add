//! Insert, ordered reads and deletes on `clickstream_event`.

use rusqlite::{params, Connection, Row};

use clickstream_core::errors::ClickstreamResult;
use clickstream_core::models::{EventRecord, EventSummary};

use crate::to_storage_err;

/// Append a record and return its store-assigned id.
/// Must run under the connection lock so `last_insert_rowid` belongs to this insert.
pub fn insert_event(conn: &Connection, payload: &str) -> ClickstreamResult<i64> {
    let size = payload.len() as i64;
    conn.execute(
        "INSERT INTO clickstream_event (event_size, event_json) VALUES (?1, ?2)",
        params![size, payload],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(conn.last_insert_rowid())
}

/// Up to `limit` `(id, size)` pairs, oldest first. Payloads are not read.
pub fn query_oldest(conn: &Connection, limit: usize) -> ClickstreamResult<Vec<EventSummary>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT event_id, event_size FROM clickstream_event
             ORDER BY event_id ASC LIMIT ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![sql_limit(limit)], |row| {
            Ok(EventSummary {
                id: row.get(0)?,
                size: row.get(1)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let out = rows
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(out)
}

/// Every pending record, oldest first.
pub fn query_all(conn: &Connection) -> ClickstreamResult<Vec<EventRecord>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT event_id, event_size, event_json FROM clickstream_event
             ORDER BY event_id ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], row_to_record)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let out = rows
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(out)
}

/// Up to `limit` full records with `event_id > after_id`, oldest first.
pub fn query_after(
    conn: &Connection,
    after_id: i64,
    limit: usize,
) -> ClickstreamResult<Vec<EventRecord>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT event_id, event_size, event_json FROM clickstream_event
             WHERE event_id > ?1
             ORDER BY event_id ASC LIMIT ?2",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![after_id, sql_limit(limit)], row_to_record)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let out = rows
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(out)
}

/// Delete every record with `event_id <= last_id`. Returns rows deleted.
pub fn delete_up_to(conn: &Connection, last_id: i64) -> ClickstreamResult<usize> {
    conn.execute(
        "DELETE FROM clickstream_event WHERE event_id <= ?1",
        params![last_id],
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Delete a single record. 0 when it is already gone.
pub fn delete_one(conn: &Connection, id: i64) -> ClickstreamResult<usize> {
    conn.execute(
        "DELETE FROM clickstream_event WHERE event_id = ?1",
        params![id],
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<EventRecord> {
    Ok(EventRecord {
        id: row.get(0)?,
        size: row.get(1)?,
        payload: row.get(2)?,
    })
}

/// SQLite takes a signed LIMIT; clamp instead of wrapping.
fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}
