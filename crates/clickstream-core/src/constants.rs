//! Wire and protocol constants.

/// Crate version sent in the `User-Agent` header.
pub const CLICKSTREAM_VERSION: &str = env!("CARGO_PKG_VERSION");

// --- Upload query parameters ---
pub const PARAM_PLATFORM: &str = "platform";
pub const PARAM_APP_ID: &str = "appId";
pub const PARAM_HASH_CODE: &str = "hashCode";
pub const PARAM_BUNDLE_SEQUENCE_ID: &str = "event_bundle_sequence_id";
pub const PARAM_UPLOAD_TIMESTAMP: &str = "upload_timestamp";
pub const PARAM_COMPRESSION: &str = "compression";

/// Value of the `compression` parameter for gzip bodies.
pub const COMPRESSION_GZIP: &str = "gzip";

/// Header carrying the opaque auth token.
pub const HEADER_COOKIE: &str = "cookie";

/// Body media type.
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Number of leading SHA-256 bytes rendered into `hashCode`.
pub const HASH_CODE_BYTE_LENGTH: usize = 4;

/// Connect timeout for every upload, seconds.
pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Transport-level retries after a connection failure. Not an application retry loop.
pub const TRANSPORT_CONNECT_RETRIES: u32 = 1;

/// Page size used by eviction when trimming the oldest records.
pub const EVICTION_QUERY_LIMIT: usize = 5;
