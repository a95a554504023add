//! v001: pending event table.
//!
//! `AUTOINCREMENT` keeps ids monotonic even after the highest row is deleted,
//! so an id is never handed out twice.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS clickstream_event (
    event_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    event_size  INTEGER NOT NULL,
    event_json  TEXT NOT NULL
);
";
