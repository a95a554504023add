//! Transport layer: request preparation, DNS hook, blocking HTTP client.

pub mod dns;
pub mod http_client;
pub mod request;

pub use http_client::HttpClient;
pub use request::PreparedUpload;
