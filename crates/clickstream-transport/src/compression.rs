//! Best-effort body compression: gzip, then base64 so the body stays text.

use std::io::{self, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use flate2::write::GzEncoder;
use flate2::Compression;

use clickstream_core::constants::COMPRESSION_GZIP;

/// The body that goes on the wire and how it was encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBody {
    pub body: String,
    /// `"gzip"` when compressed, empty otherwise.
    pub compression: &'static str,
}

impl EncodedBody {
    fn plain(payload: &str) -> Self {
        Self {
            body: payload.to_string(),
            compression: "",
        }
    }

    pub fn is_compressed(&self) -> bool {
        !self.compression.is_empty()
    }
}

/// Gzip `payload` and base64-encode the result without line breaks.
pub fn gzip_base64(payload: &str) -> io::Result<String> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(payload.as_bytes())?;
    let compressed = encoder.finish()?;
    Ok(STANDARD.encode(compressed))
}

/// Encode the batch for sending. A compression failure falls back to the
/// plain body with an empty compression marker.
pub fn encode_body(payload: &str, compress: bool) -> EncodedBody {
    encode_body_with(payload, compress, gzip_base64)
}

/// [`encode_body`] with an explicit compressor.
pub fn encode_body_with<F>(payload: &str, compress: bool, compressor: F) -> EncodedBody
where
    F: FnOnce(&str) -> io::Result<String>,
{
    if !compress {
        return EncodedBody::plain(payload);
    }
    match compressor(payload) {
        Ok(body) => EncodedBody {
            body,
            compression: COMPRESSION_GZIP,
        },
        Err(e) => {
            tracing::warn!(error = %e, "compression failed, sending uncompressed body");
            EncodedBody::plain(payload)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use flate2::read::GzDecoder;

    use super::*;

    #[test]
    fn gzip_body_decodes_back_to_payload() {
        let payload = r#"[{"event_type":"_screen_view"},{"event_type":"add_to_cart"}]"#;
        let encoded = encode_body(payload, true);
        assert_eq!(encoded.compression, "gzip");
        assert!(!encoded.body.contains('\n'));

        let raw = STANDARD.decode(&encoded.body).unwrap();
        let mut out = String::new();
        GzDecoder::new(raw.as_slice()).read_to_string(&mut out).unwrap();
        assert_eq!(out, payload);
    }

    #[test]
    fn uncompressed_when_not_requested() {
        let encoded = encode_body("[1]", false);
        assert_eq!(encoded.body, "[1]");
        assert!(!encoded.is_compressed());
    }

    #[test]
    fn failed_compression_falls_back_to_plain_body() {
        let encoded = encode_body_with("[1,2]", true, |_| {
            Err(io::Error::new(io::ErrorKind::Other, "encoder broke"))
        });
        assert_eq!(encoded.body, "[1,2]");
        assert_eq!(encoded.compression, "");
    }
}
