//! # clickstream-transport
//!
//! Uploads one materialized batch per call: optional gzip, content hash,
//! identifying query parameters, one HTTP POST. Reports the outcome as a typed
//! result and never touches the event store; the caller deletes on success.

pub mod compression;
pub mod hash;
pub mod transport;
pub mod uploader;

pub use transport::{HttpClient, PreparedUpload};
pub use uploader::{AttemptState, BatchUploader};
