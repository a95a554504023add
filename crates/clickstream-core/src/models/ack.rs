use serde::{Deserialize, Serialize};

/// A successful (2xx) upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub status: u16,
    pub bundle_sequence_id: i64,
    /// `"gzip"` or empty, exactly as sent on the wire.
    pub compression: String,
    pub hash_code: String,
    pub transmitted_bytes: usize,
}
