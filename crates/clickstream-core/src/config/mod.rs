//! Configuration system for the clickstream pipeline.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod clickstream_config;
pub mod defaults;
pub mod recorder_config;
pub mod storage_config;
pub mod upload_config;

pub use clickstream_config::ClickstreamConfig;
pub use recorder_config::RecorderConfig;
pub use storage_config::StorageConfig;
pub use upload_config::UploadConfig;
