//! Corruption detection.

pub mod integrity_check;

pub use integrity_check::{check_integrity, classify_sqlite_err, ensure_integrity};
