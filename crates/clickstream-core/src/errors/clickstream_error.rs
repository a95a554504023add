//! Top-level error aggregating subsystem errors via `From` conversions.

use super::error_code::ClickstreamErrorCode;
use super::{ConfigError, SerializationError, StorageError, UploadError};

#[derive(Debug, thiserror::Error)]
pub enum ClickstreamError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type ClickstreamResult<T> = Result<T, ClickstreamError>;

impl ClickstreamError {
    /// True for local persistence failures.
    pub fn is_storage_fault(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl ClickstreamErrorCode for ClickstreamError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Storage(e) => e.error_code(),
            Self::Serialization(e) => e.error_code(),
            Self::Upload(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
