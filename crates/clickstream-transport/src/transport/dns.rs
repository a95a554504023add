//! Adapts a host-supplied [`DnsResolver`] to reqwest's resolver interface.

use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::dns::{Addrs, Name, Resolve, Resolving};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

use clickstream_core::traits::DnsResolver;

/// Runs the host resolver for every lookup the client performs, on tokio's
/// blocking pool.
pub struct HostResolver {
    inner: Arc<dyn DnsResolver>,
}

impl HostResolver {
    pub fn new(inner: Arc<dyn DnsResolver>) -> Self {
        Self { inner }
    }
}

impl Resolve for HostResolver {
    fn resolve(&self, name: Name) -> Resolving {
        let inner = Arc::clone(&self.inner);
        let host = name.as_str().to_string();
        Box::pin(async move {
            // Host resolvers may block; keep them off the client's runtime workers.
            let lookup_host = host.clone();
            let ips = tokio::task::spawn_blocking(move || inner.resolve(&lookup_host))
                .await
                .map_err(|e| Box::new(e) as BoxError)?
                .map_err(|e| Box::new(e) as BoxError)?;
            tracing::debug!(host = %host, count = ips.len(), "custom dns lookup");
            // Port 0: the connector substitutes the URL's port.
            let addrs: Addrs = Box::new(ips.into_iter().map(|ip| SocketAddr::new(ip, 0)));
            Ok::<_, BoxError>(addrs)
        })
    }
}
