/// HTTP client trait and implementation
pub mod http_client;

pub use http_client::{AuthScheme, FlixHttpClient, FlixHttpClientImpl};
