//! Builds the wire form of one upload: body, URL with query parameters, headers.

use reqwest::Url;

use clickstream_core::config::UploadConfig;
use clickstream_core::constants::{
    PARAM_APP_ID, PARAM_BUNDLE_SEQUENCE_ID, PARAM_COMPRESSION, PARAM_HASH_CODE, PARAM_PLATFORM,
    PARAM_UPLOAD_TIMESTAMP,
};
use clickstream_core::errors::UploadError;

use crate::compression::encode_body;
use crate::hash::hash_code;

/// Everything needed to send one batch, computed before any network I/O.
#[derive(Debug, Clone)]
pub struct PreparedUpload {
    pub url: Url,
    pub body: String,
    pub hash_code: String,
    /// `"gzip"` or empty, as placed in the `compression` parameter.
    pub compression: &'static str,
    pub cookie: Option<String>,
    pub bundle_sequence_id: i64,
    pub upload_timestamp: i64,
}

impl PreparedUpload {
    /// Encode the batch and attach the identifying query parameters.
    ///
    /// `upload_timestamp` is epoch milliseconds at send time.
    pub fn build(
        serialized_batch: &str,
        config: &UploadConfig,
        bundle_sequence_id: i64,
        upload_timestamp: i64,
    ) -> Result<Self, UploadError> {
        if serialized_batch.is_empty() {
            return Err(UploadError::EmptyPayload);
        }

        let mut url = Url::parse(&config.endpoint).map_err(|e| UploadError::InvalidEndpoint {
            endpoint: config.endpoint.clone(),
            reason: e.to_string(),
        })?;

        let encoded = encode_body(serialized_batch, config.compress_events);
        let hash_code = hash_code(&encoded.body);

        url.query_pairs_mut()
            .append_pair(PARAM_PLATFORM, &config.platform)
            .append_pair(PARAM_APP_ID, &config.app_id)
            .append_pair(PARAM_HASH_CODE, &hash_code)
            .append_pair(PARAM_BUNDLE_SEQUENCE_ID, &bundle_sequence_id.to_string())
            .append_pair(PARAM_UPLOAD_TIMESTAMP, &upload_timestamp.to_string())
            .append_pair(PARAM_COMPRESSION, encoded.compression);

        Ok(Self {
            url,
            body: encoded.body,
            hash_code,
            compression: encoded.compression,
            cookie: config.cookie().map(str::to_string),
            bundle_sequence_id,
            upload_timestamp,
        })
    }

    /// Value of a query parameter on the prepared URL.
    pub fn query_param(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}
