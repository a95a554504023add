//! PRAGMA integrity_check, detect corruption early.

use rusqlite::{Connection, ErrorCode};

use clickstream_core::errors::{ClickstreamError, ClickstreamResult, StorageError};

use crate::queries::maintenance;
use crate::to_storage_err;

/// Run integrity check. Returns true if database is healthy.
pub fn check_integrity(conn: &Connection) -> ClickstreamResult<bool> {
    maintenance::integrity_check(conn)
}

/// Like [`check_integrity`] but turns an unhealthy result into a storage fault.
pub fn ensure_integrity(conn: &Connection) -> ClickstreamResult<()> {
    if check_integrity(conn)? {
        Ok(())
    } else {
        tracing::error!("integrity check failed on event store");
        Err(StorageError::CorruptionDetected {
            details: "PRAGMA integrity_check did not return ok".to_string(),
        }
        .into())
    }
}

/// Map a SQLite failure, reporting a damaged or foreign file as corruption.
pub fn classify_sqlite_err(e: rusqlite::Error) -> ClickstreamError {
    match e.sqlite_error_code() {
        Some(ErrorCode::DatabaseCorrupt | ErrorCode::NotADatabase) => {
            tracing::error!(error = %e, "event store file is corrupted");
            StorageError::CorruptionDetected {
                details: e.to_string(),
            }
            .into()
        }
        _ => to_storage_err(e.to_string()),
    }
}
