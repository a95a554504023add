use std::fmt::Debug;
use std::io;
use std::net::IpAddr;

/// Host-supplied name resolution hook, used instead of the system resolver.
pub trait DnsResolver: Debug + Send + Sync {
    /// Resolve `host` to one or more addresses. The port comes from the endpoint URL.
    fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}
