//! Stable, machine-readable error codes.

/// Every error type maps each variant to a stable code string.
pub trait ClickstreamErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const STORAGE_SQLITE: &str = "STORAGE_SQLITE";
pub const STORAGE_CLOSED: &str = "STORAGE_CLOSED";
pub const STORAGE_CORRUPTION: &str = "STORAGE_CORRUPTION";
pub const STORAGE_MIGRATION: &str = "STORAGE_MIGRATION";

pub const SERIALIZATION_ENCODE: &str = "SERIALIZATION_ENCODE";
pub const SERIALIZATION_INVALID_PAYLOAD: &str = "SERIALIZATION_INVALID_PAYLOAD";

pub const UPLOAD_EMPTY_PAYLOAD: &str = "UPLOAD_EMPTY_PAYLOAD";
pub const UPLOAD_NETWORK: &str = "UPLOAD_NETWORK";
pub const UPLOAD_REJECTED: &str = "UPLOAD_REJECTED";
pub const UPLOAD_INVALID_ENDPOINT: &str = "UPLOAD_INVALID_ENDPOINT";

pub const CONFIG_FILE_NOT_FOUND: &str = "CONFIG_FILE_NOT_FOUND";
pub const CONFIG_PARSE: &str = "CONFIG_PARSE";
pub const CONFIG_VALIDATION: &str = "CONFIG_VALIDATION";
