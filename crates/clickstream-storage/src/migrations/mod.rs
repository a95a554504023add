//! Schema migrations using PRAGMA user_version.

pub mod v001_event_table;

use rusqlite::Connection;

use clickstream_core::errors::{ClickstreamResult, StorageError};

use crate::to_storage_err;

/// Latest schema version this build knows about.
pub const LATEST_VERSION: u32 = 1;

/// Run all pending migrations.
pub fn run_migrations(conn: &Connection) -> ClickstreamResult<()> {
    let current = current_version(conn)?;

    let migrations: &[(&str, u32)] = &[(v001_event_table::MIGRATION_SQL, 1)];

    for (sql, version) in migrations {
        if current < *version {
            conn.execute_batch(sql)
                .map_err(|e| StorageError::MigrationFailed {
                    version: *version,
                    reason: e.to_string(),
                })?;
            conn.pragma_update(None, "user_version", version)
                .map_err(|e| StorageError::MigrationFailed {
                    version: *version,
                    reason: e.to_string(),
                })?;
            tracing::info!(version = version, "applied migration");
        }
    }

    Ok(())
}

/// Get the current schema version.
pub fn current_version(conn: &Connection) -> ClickstreamResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}
