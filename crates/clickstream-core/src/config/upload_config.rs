use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::traits::DnsResolver;

/// Everything the uploader needs for one call.
///
/// Each upload builds its own HTTP client from this value, so two uploads
/// with different configs never share transport state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Collection endpoint URL.
    pub endpoint: String,
    /// Application id sent as `appId`.
    pub app_id: String,
    /// Client platform tag sent as `platform`.
    pub platform: String,
    /// Gzip the body before sending.
    pub compress_events: bool,
    /// Opaque auth token sent as the `cookie` header when non-empty.
    pub auth_cookie: Option<String>,
    /// Overall per-call deadline in seconds.
    pub call_timeout_secs: u64,
    /// Optional custom resolver. Runtime only, never serialized.
    #[serde(skip)]
    pub dns: Option<Arc<dyn DnsResolver>>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            app_id: String::new(),
            platform: defaults::DEFAULT_PLATFORM.to_string(),
            compress_events: defaults::DEFAULT_COMPRESS_EVENTS,
            auth_cookie: None,
            call_timeout_secs: defaults::DEFAULT_CALL_TIMEOUT_SECS,
            dns: None,
        }
    }
}

impl UploadConfig {
    pub fn new(endpoint: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            app_id: app_id.into(),
            ..Self::default()
        }
    }

    pub fn with_compress_events(mut self, compress: bool) -> Self {
        self.compress_events = compress;
        self
    }

    pub fn with_auth_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.auth_cookie = Some(cookie.into());
        self
    }

    pub fn with_call_timeout_secs(mut self, secs: u64) -> Self {
        self.call_timeout_secs = secs;
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn with_dns(mut self, dns: Arc<dyn DnsResolver>) -> Self {
        self.dns = Some(dns);
        self
    }

    /// The auth cookie, if one is configured and non-empty.
    pub fn cookie(&self) -> Option<&str> {
        self.auth_cookie.as_deref().filter(|c| !c.is_empty())
    }
}
