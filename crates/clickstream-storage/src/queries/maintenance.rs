//! Integrity check and space reclamation.

use rusqlite::Connection;

use clickstream_core::errors::ClickstreamResult;

use crate::to_storage_err;

/// PRAGMA integrity_check. True when the database reports "ok".
pub fn integrity_check(conn: &Connection) -> ClickstreamResult<bool> {
    let result: String = conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(result == "ok")
}

/// Fold the WAL back into the main database file.
pub fn checkpoint(conn: &Connection) -> ClickstreamResult<()> {
    conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")
        .map_err(|e| to_storage_err(e.to_string()))
}
