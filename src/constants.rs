/// User agent string used in HTTP requests to identify this client to the movie database API
pub const USER_AGENT: &str = "flix-client/0.1.0";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_REST_TIMEOUT: u64 = 30;
/// Placeholder base URL used when `FLIX_REST_BASE_URL` is not configured
pub const DEFAULT_BASE_URL: &str = "https://myflix.example.com";
