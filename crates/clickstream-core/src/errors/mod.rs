//! Error handling for the clickstream pipeline.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod clickstream_error;
pub mod config_error;
pub mod error_code;
pub mod serialization_error;
pub mod storage_error;
pub mod upload_error;

pub use clickstream_error::{ClickstreamError, ClickstreamResult};
pub use config_error::ConfigError;
pub use error_code::ClickstreamErrorCode;
pub use serialization_error::SerializationError;
pub use storage_error::StorageError;
pub use upload_error::UploadError;

/// Convert any displayable SQLite failure into a `ClickstreamError::Storage`.
pub fn to_storage_err(message: impl Into<String>) -> ClickstreamError {
    StorageError::Sqlite {
        message: message.into(),
    }
    .into()
}
