//! Outcome of one drain pass.

use clickstream_core::errors::ClickstreamError;

/// What a `process_events` pass did.
#[derive(Debug, Default)]
pub struct DrainReport {
    /// Successful uploads.
    pub submissions: usize,
    /// Records removed after acknowledged uploads (and unusable records reclaimed).
    pub events_deleted: usize,
    /// Records excluded from batches as unusable.
    pub skipped_records: usize,
    /// First failure, which ended the pass.
    pub last_error: Option<ClickstreamError>,
    /// True when another drain was already in flight and this one did nothing.
    pub already_running: bool,
}

impl DrainReport {
    pub(crate) fn already_running() -> Self {
        Self {
            already_running: true,
            ..Self::default()
        }
    }

    /// True when the pass ended without a failure.
    pub fn is_success(&self) -> bool {
        self.last_error.is_none()
    }
}
