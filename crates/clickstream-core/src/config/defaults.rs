// Single source of truth for all default values.

// --- Upload ---
pub const DEFAULT_PLATFORM: &str = "Android";
pub const DEFAULT_COMPRESS_EVENTS: bool = true;
pub const DEFAULT_CALL_TIMEOUT_SECS: u64 = 15;

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "clickstream.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Recorder ---
pub const DEFAULT_MAX_DB_SIZE_BYTES: i64 = 50 * 1024 * 1024; // 50 MiB
pub const DEFAULT_MAX_SUBMISSION_BYTES: i64 = 512 * 1024; // 512 KiB
pub const DEFAULT_MAX_EVENTS_PER_BATCH: usize = 100;
pub const DEFAULT_MAX_SUBMISSIONS: usize = 3;
pub const DEFAULT_INITIAL_BUNDLE_SEQUENCE_ID: i64 = 1;
