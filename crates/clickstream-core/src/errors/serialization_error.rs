use super::error_code::{self, ClickstreamErrorCode};

/// A payload could not be produced, or a stored payload is unusable.
///
/// Unusable records are excluded from their batch; they never block it.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    #[error("failed to encode event: {reason}")]
    Encode { reason: String },

    #[error("invalid payload for event {event_id}: {reason}")]
    InvalidPayload { event_id: i64, reason: String },
}

impl ClickstreamErrorCode for SerializationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Encode { .. } => error_code::SERIALIZATION_ENCODE,
            Self::InvalidPayload { .. } => error_code::SERIALIZATION_INVALID_PAYLOAD,
        }
    }
}

impl From<serde_json::Error> for SerializationError {
    fn from(e: serde_json::Error) -> Self {
        Self::Encode {
            reason: e.to_string(),
        }
    }
}
