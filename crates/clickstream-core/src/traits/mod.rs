//! Seams between the store, the uploader and the recorder.

pub mod dns;
pub mod event_store;
pub mod uploader;

pub use dns::DnsResolver;
pub use event_store::IEventStore;
pub use uploader::IUploader;
