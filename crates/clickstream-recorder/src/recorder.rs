//! EventRecorder: records events into the store and drains them to the collector.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex, TryLockError};
use std::time::Instant;

use serde::Serialize;

use clickstream_core::config::{ClickstreamConfig, RecorderConfig, UploadConfig};
use clickstream_core::errors::{ClickstreamResult, SerializationError};
use clickstream_core::traits::{IEventStore, IUploader};
use clickstream_storage::EventStore;
use clickstream_transport::BatchUploader;

use crate::batch::{build_batch, BatchLimits};
use crate::drain::DrainReport;
use crate::eviction::evict_oldest;

/// Records events and drains them in batches.
///
/// Drains are serialized: a `process_events` call that overlaps another one
/// returns immediately with [`DrainReport::already_running`] set, so two
/// drains never read the same oldest records.
pub struct EventRecorder {
    store: Arc<dyn IEventStore>,
    uploader: Arc<dyn IUploader>,
    upload_config: UploadConfig,
    limits: RecorderConfig,
    bundle_sequence_id: AtomicI64,
    drain_lock: Mutex<()>,
}

impl EventRecorder {
    pub fn new(
        store: Arc<dyn IEventStore>,
        uploader: Arc<dyn IUploader>,
        upload_config: UploadConfig,
        limits: RecorderConfig,
    ) -> Self {
        let initial = limits.initial_bundle_sequence_id;
        Self {
            store,
            uploader,
            upload_config,
            limits,
            bundle_sequence_id: AtomicI64::new(initial),
            drain_lock: Mutex::new(()),
        }
    }

    /// Open the file-backed store from `config.storage` and use the HTTP uploader.
    pub fn open(config: &ClickstreamConfig) -> ClickstreamResult<Self> {
        config.validate()?;
        let store = EventStore::from_config(&config.storage)?;
        Ok(Self::new(
            Arc::new(store),
            Arc::new(BatchUploader::new()),
            config.upload.clone(),
            config.recorder.clone(),
        ))
    }

    /// Persist a pre-serialized event, then enforce the local capacity.
    ///
    /// An error means the insert failed and the event was dropped; nothing is
    /// buffered in memory. Once the insert succeeds the id is returned even if
    /// eviction fails, which is logged and retried on the next record.
    pub fn record_event(&self, payload: &str) -> ClickstreamResult<i64> {
        let id = self.store.insert(payload)?;
        if self.limits.log_events {
            tracing::info!(id, payload, "event recorded");
        }
        if let Err(e) = evict_oldest(self.store.as_ref(), self.limits.max_db_size_bytes) {
            tracing::error!(id, error = %e, "capacity eviction failed after insert");
        }
        Ok(id)
    }

    /// Serialize `event` to JSON and record it.
    pub fn record<T: Serialize>(&self, event: &T) -> ClickstreamResult<i64> {
        let payload = serde_json::to_string(event).map_err(SerializationError::from)?;
        self.record_event(&payload)
    }

    /// The id the next upload attempt will carry. Hosts persist this across restarts.
    pub fn bundle_sequence_id(&self) -> i64 {
        self.bundle_sequence_id.load(Ordering::SeqCst)
    }

    /// Run one drain: upload batches oldest first, delete each acknowledged
    /// range, and stop at the first failure or after `max_submissions`
    /// successful uploads.
    pub fn process_events(&self) -> DrainReport {
        let _guard = match self.drain_lock.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::WouldBlock) => {
                tracing::debug!("drain already in flight, skipping");
                return DrainReport::already_running();
            }
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
        };

        let start = Instant::now();
        let mut report = DrainReport::default();
        if let Err(e) = self.drain(&mut report) {
            report.last_error = Some(e);
        }

        tracing::info!(
            submissions = report.submissions,
            events_deleted = report.events_deleted,
            skipped = report.skipped_records,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "drain finished"
        );
        report
    }

    fn drain(&self, report: &mut DrainReport) -> ClickstreamResult<()> {
        let limits = BatchLimits::from(&self.limits);
        let mut cursor = 0i64;

        loop {
            let page = self.store.query_after(cursor, limits.max_events)?;
            let Some(batch) = build_batch(&page, limits) else {
                if report.submissions == 0 {
                    tracing::info!("no events available to submit");
                }
                return Ok(());
            };
            cursor = batch.last_id;
            report.skipped_records += batch.skipped.len();

            if batch.is_empty() {
                // Only unusable records in this range: reclaim without uploading.
                report.events_deleted += self.store.delete_up_to(batch.last_id)?;
                continue;
            }

            let seq = self.bundle_sequence_id.fetch_add(1, Ordering::SeqCst);
            self.uploader
                .upload(&batch.payload, &self.upload_config, seq)?;

            let deleted = self.store.delete_up_to(batch.last_id)?;
            report.submissions += 1;
            report.events_deleted += deleted;
            tracing::debug!(
                bundle_sequence_id = seq,
                last_id = batch.last_id,
                deleted,
                "batch acknowledged"
            );

            if report.submissions >= self.limits.max_submissions {
                tracing::info!(
                    max_submissions = self.limits.max_submissions,
                    "reached max submissions"
                );
                return Ok(());
            }
        }
    }

    /// Close the underlying store.
    pub fn close(&self) -> ClickstreamResult<()> {
        self.store.close()
    }

    pub fn store(&self) -> &dyn IEventStore {
        self.store.as_ref()
    }
}
