use crate::config::UploadConfig;
use crate::errors::UploadError;
use crate::models::Ack;

/// Sends one serialized batch. Never touches the event store.
pub trait IUploader: Send + Sync {
    fn upload(
        &self,
        serialized_batch: &str,
        config: &UploadConfig,
        bundle_sequence_id: i64,
    ) -> Result<Ack, UploadError>;
}
