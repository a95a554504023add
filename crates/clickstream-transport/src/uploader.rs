//! BatchUploader: one upload attempt per call, typed outcome, no store access.

use chrono::Utc;

use clickstream_core::config::UploadConfig;
use clickstream_core::errors::UploadError;
use clickstream_core::models::Ack;
use clickstream_core::traits::IUploader;

use crate::transport::{HttpClient, PreparedUpload};

/// Lifecycle of one upload attempt.
///
/// `Built → Sent → {Acked | Rejected | TransportFailed}`. Every terminal state
/// returns control to the caller; there is no internal retry state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptState {
    Built,
    Sent,
    Acked,
    Rejected,
    TransportFailed,
}

/// Stateless uploader. Each call builds its own client from the config it is given.
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchUploader;

impl BatchUploader {
    pub fn new() -> Self {
        Self
    }

    /// Map a terminal outcome onto its attempt state.
    pub fn terminal_state(result: &Result<Ack, UploadError>) -> AttemptState {
        match result {
            Ok(_) => AttemptState::Acked,
            Err(UploadError::Rejected { .. }) => AttemptState::Rejected,
            Err(_) => AttemptState::TransportFailed,
        }
    }
}

impl IUploader for BatchUploader {
    fn upload(
        &self,
        serialized_batch: &str,
        config: &UploadConfig,
        bundle_sequence_id: i64,
    ) -> Result<Ack, UploadError> {
        let prepared = PreparedUpload::build(
            serialized_batch,
            config,
            bundle_sequence_id,
            Utc::now().timestamp_millis(),
        )?;
        tracing::debug!(
            state = ?AttemptState::Built,
            bundle_sequence_id,
            bytes = prepared.body.len(),
            compression = prepared.compression,
            hash_code = %prepared.hash_code,
            "upload prepared"
        );

        let client = HttpClient::from_config(config)?;
        tracing::debug!(state = ?AttemptState::Sent, url = %prepared.url, "upload sent");

        let result = match client.post(&prepared) {
            Ok(status) if (200..300).contains(&status) => Ok(Ack {
                status,
                bundle_sequence_id,
                compression: prepared.compression.to_string(),
                hash_code: prepared.hash_code.clone(),
                transmitted_bytes: prepared.body.len(),
            }),
            Ok(status) => Err(UploadError::Rejected { status }),
            Err(e) => Err(e),
        };

        let state = Self::terminal_state(&result);
        match &result {
            Ok(ack) => tracing::debug!(state = ?state, status = ack.status, bundle_sequence_id, "upload acked"),
            Err(UploadError::Rejected { status }) => {
                tracing::warn!(state = ?state, status, bundle_sequence_id, "upload rejected by server")
            }
            Err(e) => tracing::error!(state = ?state, error = %e, bundle_sequence_id, "upload failed"),
        }
        result
    }
}
