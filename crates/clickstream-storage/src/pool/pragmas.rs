//! PRAGMA configuration applied to every SQLite connection.
//!
//! WAL mode, NORMAL sync, configurable busy_timeout.

use std::time::Duration;

use rusqlite::Connection;

use clickstream_core::errors::ClickstreamResult;

use crate::recovery::classify_sqlite_err;
use crate::to_storage_err;

/// Apply durability and locking pragmas to a connection.
///
/// This is the first statement that reads the file header, so a file that is
/// not a database fails here with `CorruptionDetected`.
pub fn apply_pragmas(conn: &Connection, busy_timeout_ms: u32) -> ClickstreamResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        ",
    )
    .map_err(classify_sqlite_err)?;
    conn.busy_timeout(Duration::from_millis(u64::from(busy_timeout_ms)))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Verify that WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> ClickstreamResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
