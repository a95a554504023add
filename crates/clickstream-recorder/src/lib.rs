//! # clickstream-recorder
//!
//! Joins the event store and the uploader into the delivery pipeline:
//! record with local capacity eviction, materialize size- and count-bounded
//! batches, and drain them with a bounded number of submissions. Deciding
//! *when* to drain is left to the host.

pub mod batch;
pub mod drain;
pub mod eviction;
pub mod recorder;

pub use batch::{build_batch, BatchLimits};
pub use drain::DrainReport;
pub use recorder::EventRecorder;
