//! # clickstream-core
//!
//! Foundation crate for the clickstream event pipeline.
//! Defines the data model, error taxonomy, configuration, traits and constants
//! shared by the store, the uploader and the recorder.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{ClickstreamConfig, RecorderConfig, StorageConfig, UploadConfig};
pub use errors::{ClickstreamError, ClickstreamResult};
pub use models::{Ack, Batch, EventRecord, EventSummary};
