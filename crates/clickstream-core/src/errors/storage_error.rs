use super::error_code::{self, ClickstreamErrorCode};

/// Local persistence failures (the "storage fault" class).
///
/// Never retried inside the store. The caller decides whether to drop the event.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("event store is closed")]
    Closed,

    #[error("database corruption detected: {details}")]
    CorruptionDetected { details: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },
}

impl ClickstreamErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Sqlite { .. } => error_code::STORAGE_SQLITE,
            Self::Closed => error_code::STORAGE_CLOSED,
            Self::CorruptionDetected { .. } => error_code::STORAGE_CORRUPTION,
            Self::MigrationFailed { .. } => error_code::STORAGE_MIGRATION,
        }
    }
}
