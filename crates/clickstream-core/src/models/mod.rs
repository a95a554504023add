//! Pipeline data model: persisted records, transient batches, upload acks.

pub mod ack;
pub mod batch;
pub mod event_record;

pub use ack::Ack;
pub use batch::Batch;
pub use event_record::{EventRecord, EventSummary};
