//! Single connection behind a mutex.
//! Serialized access makes id assignment atomic under concurrent writers.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use clickstream_core::errors::{ClickstreamResult, StorageError};

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// The store's only connection. `None` once closed.
pub struct WriteConnection {
    conn: Mutex<Option<Connection>>,
}

impl WriteConnection {
    /// Open a connection to the given database path.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> ClickstreamResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(Some(conn)),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> ClickstreamResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, 0)?;
        Ok(Self {
            conn: Mutex::new(Some(conn)),
        })
    }

    /// Acquire the lock and execute a closure with the connection.
    /// Fails with `StorageError::Closed` after [`WriteConnection::close`].
    pub fn with_conn<F, T>(&self, f: F) -> ClickstreamResult<T>
    where
        F: FnOnce(&Connection) -> ClickstreamResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|_| to_storage_err("connection mutex poisoned"))?;
        match guard.as_ref() {
            Some(conn) => f(conn),
            None => Err(StorageError::Closed.into()),
        }
    }

    /// Acquire the lock and run `f` inside a transaction, committing on `Ok`.
    pub fn with_transaction<F, T>(&self, f: F) -> ClickstreamResult<T>
    where
        F: FnOnce(&Connection) -> ClickstreamResult<T>,
    {
        let mut guard = self
            .conn
            .lock()
            .map_err(|_| to_storage_err("connection mutex poisoned"))?;
        let conn = guard.as_mut().ok_or(StorageError::Closed)?;
        let tx = conn
            .transaction()
            .map_err(|e| to_storage_err(e.to_string()))?;
        let out = f(&tx)?;
        tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
        Ok(out)
    }

    /// Close the connection. Idempotent.
    pub fn close(&self) -> ClickstreamResult<()> {
        let mut guard = self
            .conn
            .lock()
            .map_err(|_| to_storage_err("connection mutex poisoned"))?;
        if let Some(conn) = guard.take() {
            conn.close().map_err(|(_, e)| to_storage_err(e.to_string()))?;
        }
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.conn.lock().map(|g| g.is_none()).unwrap_or(true)
    }
}
