//! Blocking HTTP client with fixed connect timeout, per-call deadline,
//! optional custom DNS, and one retry on connection failure.

use std::sync::Arc;
use std::time::Duration;

use clickstream_core::config::UploadConfig;
use clickstream_core::constants::{
    CLICKSTREAM_VERSION, CONTENT_TYPE_JSON, HEADER_COOKIE, HTTP_CONNECT_TIMEOUT_SECS,
    TRANSPORT_CONNECT_RETRIES,
};
use clickstream_core::errors::UploadError;

use super::dns::HostResolver;
use super::request::PreparedUpload;

/// Convert a transport failure into `UploadError::Network`.
fn net_err(reason: String) -> UploadError {
    UploadError::Network { reason }
}

/// Overall deadline for one call. `call_timeout_secs == 0` means none.
pub fn call_deadline(config: &UploadConfig) -> Option<Duration> {
    (config.call_timeout_secs > 0).then(|| Duration::from_secs(config.call_timeout_secs))
}

fn user_agent() -> String {
    format!("clickstream-rust/{CLICKSTREAM_VERSION}")
}

/// HTTP transport for a single upload.
///
/// Built from an [`UploadConfig`] for each call and dropped afterwards, so
/// concurrent uploads with different configs share nothing.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::blocking::Client,
    connect_retries: u32,
}

impl HttpClient {
    /// Build a client honouring the config's deadline and DNS hook.
    pub fn from_config(config: &UploadConfig) -> Result<Self, UploadError> {
        let mut builder = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
            // The blocking builder defaults to 30 s; always set it explicitly.
            .timeout(call_deadline(config))
            .user_agent(user_agent());

        if let Some(ref dns) = config.dns {
            builder = builder.dns_resolver(Arc::new(HostResolver::new(Arc::clone(dns))));
        }

        let client = builder
            .build()
            .map_err(|e: reqwest::Error| net_err(e.to_string()))?;

        Ok(Self {
            client,
            connect_retries: TRANSPORT_CONNECT_RETRIES,
        })
    }

    /// POST the prepared upload and return the HTTP status code.
    ///
    /// A send that fails to connect is retried at most `connect_retries`
    /// times. Timeouts and other I/O errors are not retried.
    pub fn post(&self, prepared: &PreparedUpload) -> Result<u16, UploadError> {
        let mut attempt = 0;
        loop {
            match self.request(prepared).send() {
                Ok(resp) => return Ok(resp.status().as_u16()),
                Err(e) if e.is_connect() && attempt < self.connect_retries => {
                    attempt += 1;
                    tracing::debug!(
                        "upload: connection failed, transport retry {}/{}: {e}",
                        attempt,
                        self.connect_retries
                    );
                }
                Err(e) => {
                    let reason = if e.is_timeout() {
                        format!("timed out: {e}")
                    } else {
                        e.to_string()
                    };
                    return Err(net_err(reason));
                }
            }
        }
    }

    fn request(&self, prepared: &PreparedUpload) -> reqwest::blocking::RequestBuilder {
        let mut req = self
            .client
            .post(prepared.url.clone())
            .header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE_JSON)
            .body(prepared.body.clone());
        if let Some(ref cookie) = prepared.cookie {
            req = req.header(HEADER_COOKIE, cookie.as_str());
        }
        req
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> UploadConfig {
        UploadConfig::new("http://collector.test/collect", "shop")
    }

    #[test]
    fn zero_call_timeout_disables_the_deadline() {
        assert_eq!(call_deadline(&config().with_call_timeout_secs(0)), None);
    }

    #[test]
    fn call_timeout_becomes_the_deadline() {
        assert_eq!(
            call_deadline(&config().with_call_timeout_secs(15)),
            Some(Duration::from_secs(15))
        );
        assert!(HttpClient::from_config(&config().with_call_timeout_secs(0)).is_ok());
    }
}
