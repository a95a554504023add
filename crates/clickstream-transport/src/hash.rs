//! Content hash carried in the `hashCode` parameter.

use sha2::{Digest, Sha256};

use clickstream_core::constants::HASH_CODE_BYTE_LENGTH;

/// First four bytes of SHA-256 over the transmitted body, lowercase hex.
pub fn hash_code(body: &str) -> String {
    let digest = Sha256::digest(body.as_bytes());
    hex::encode(&digest[..HASH_CODE_BYTE_LENGTH])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_code_is_sha256_prefix() {
        // sha256("abc") = ba7816bf...
        assert_eq!(hash_code("abc"), "ba7816bf");
        // sha256("") = e3b0c442...
        assert_eq!(hash_code(""), "e3b0c442");
    }

    #[test]
    fn hash_code_is_eight_hex_chars() {
        let h = hash_code(r#"[{"event_type":"_first_open"}]"#);
        assert_eq!(h.len(), 8);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
