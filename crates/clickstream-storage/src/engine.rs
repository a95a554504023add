//! EventStore: owns the database connection and runs migrations on open.

use std::path::{Path, PathBuf};

use clickstream_core::config::StorageConfig;
use clickstream_core::errors::ClickstreamResult;
use clickstream_core::models::{EventRecord, EventSummary};
use clickstream_core::traits::IEventStore;

use crate::migrations;
use crate::pool::WriteConnection;
use crate::queries::aggregation::{self, QueueStats};
use crate::queries::{event_ops, maintenance};
use crate::recovery;

/// Durable pending-event queue.
///
/// One instance owns one connection. There is no process-wide handle: open
/// it where the pipeline is assembled and [`close`](IEventStore::close) it (or
/// drop it) when done. Operations after `close` fail with
/// `StorageError::Closed` instead of reopening.
pub struct EventStore {
    writer: WriteConnection,
    db_path: Option<PathBuf>,
}

impl EventStore {
    /// Open a store backed by a file on disk with default settings.
    pub fn open(path: &Path) -> ClickstreamResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    /// Open a file-backed store using the busy timeout from `config`.
///
/// Runs migrations, then an integrity check: a damaged file fails with
/// `StorageError::CorruptionDetected` instead of opening.
    pub fn open_with_config(path: &Path, config: &StorageConfig) -> ClickstreamResult<Self> {
        let writer = WriteConnection::open(path, config.busy_timeout_ms)?;
        let store = Self {
            writer,
            db_path: Some(path.to_path_buf()),
        };
        store.initialize()?;
        store.writer.with_conn(recovery::ensure_integrity)?;
        tracing::debug!(path = %path.display(), "event store opened");
        Ok(store)
    }

    /// Open the store at `config.db_path`.
    pub fn from_config(config: &StorageConfig) -> ClickstreamResult<Self> {
        Self::open_with_config(Path::new(&config.db_path), config)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> ClickstreamResult<Self> {
        let store = Self {
            writer: WriteConnection::open_in_memory()?,
            db_path: None,
        };
        store.initialize()?;
        Ok(store)
    }

    /// Run migrations.
    fn initialize(&self) -> ClickstreamResult<()> {
        self.writer.with_conn(migrations::run_migrations)
    }

    /// Database file, `None` for in-memory stores.
    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    pub fn is_closed(&self) -> bool {
        self.writer.is_closed()
    }

    /// Count, size and id bounds in one query.
    pub fn stats(&self) -> ClickstreamResult<QueueStats> {
        self.writer.with_conn(aggregation::queue_stats)
    }

    /// PRAGMA integrity_check. False means the file is corrupted.
    pub fn integrity_check(&self) -> ClickstreamResult<bool> {
        self.writer.with_conn(recovery::check_integrity)
    }

    /// Insert several payloads atomically; ids are returned in input order.
    pub fn insert_bulk(&self, payloads: &[&str]) -> ClickstreamResult<Vec<i64>> {
        self.writer.with_transaction(|conn| {
            payloads
                .iter()
                .map(|payload| event_ops::insert_event(conn, payload))
                .collect()
        })
    }
}

impl IEventStore for EventStore {
    fn insert(&self, payload: &str) -> ClickstreamResult<i64> {
        let result = self
            .writer
            .with_conn(|conn| event_ops::insert_event(conn, payload));
        match &result {
            Ok(id) => tracing::trace!(id, size = payload.len(), "event stored"),
            Err(e) => tracing::error!(error = %e, "failed to store event"),
        }
        result
    }

    fn query_oldest(&self, limit: usize) -> ClickstreamResult<Vec<EventSummary>> {
        self.writer
            .with_conn(|conn| event_ops::query_oldest(conn, limit))
    }

    fn query_all(&self) -> ClickstreamResult<Vec<EventRecord>> {
        self.writer.with_conn(event_ops::query_all)
    }

    fn query_after(&self, after_id: i64, limit: usize) -> ClickstreamResult<Vec<EventRecord>> {
        self.writer
            .with_conn(|conn| event_ops::query_after(conn, after_id, limit))
    }

    fn delete_up_to(&self, last_id: i64) -> ClickstreamResult<usize> {
        let deleted = self
            .writer
            .with_conn(|conn| event_ops::delete_up_to(conn, last_id))?;
        tracing::debug!(last_id, deleted, "range delete");
        Ok(deleted)
    }

    fn delete_one(&self, id: i64) -> ClickstreamResult<usize> {
        self.writer.with_conn(|conn| event_ops::delete_one(conn, id))
    }

    fn total_size(&self) -> ClickstreamResult<i64> {
        self.writer.with_conn(aggregation::total_size)
    }

    fn total_count(&self) -> ClickstreamResult<i64> {
        self.writer.with_conn(aggregation::total_count)
    }

    fn close(&self) -> ClickstreamResult<()> {
        // Fold the WAL into the main file so the closed store is a single file.
        if self.db_path.is_some() && !self.writer.is_closed() {
            if let Err(e) = self.writer.with_conn(maintenance::checkpoint) {
                tracing::warn!(error = %e, "wal checkpoint before close failed");
            }
        }
        self.writer.close()?;
        tracing::debug!("event store closed");
        Ok(())
    }
}
