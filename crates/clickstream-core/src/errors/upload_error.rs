use super::error_code::{self, ClickstreamErrorCode};

/// Outcome of a failed upload attempt.
///
/// Every variant means "keep the batch in the store". `Rejected` is logged
/// separately from `Network` so server-side refusals stay diagnosable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("refusing to upload an empty payload")]
    EmptyPayload,

    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("server rejected upload with HTTP {status}")]
    Rejected { status: u16 },

    #[error("invalid endpoint {endpoint}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

impl UploadError {
    /// Whether a network call was attempted before failing.
    pub fn reached_network(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Rejected { .. })
    }
}

impl ClickstreamErrorCode for UploadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyPayload => error_code::UPLOAD_EMPTY_PAYLOAD,
            Self::Network { .. } => error_code::UPLOAD_NETWORK,
            Self::Rejected { .. } => error_code::UPLOAD_REJECTED,
            Self::InvalidEndpoint { .. } => error_code::UPLOAD_INVALID_ENDPOINT,
        }
    }
}
