//! # clickstream-storage
//!
//! Durable, append-only, strictly ordered local queue of pending events,
//! backed by an embedded SQLite database. Exposes insert, oldest-N read,
//! range delete and aggregate (count, byte size) queries.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;
pub mod recovery;

pub use engine::EventStore;

pub(crate) use clickstream_core::errors::to_storage_err;
