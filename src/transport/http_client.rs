/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! HTTP transport for the movie database API
//!
//! This module provides the single request-dispatch routine behind every
//! API operation:
//! - URL building against the configured base URL
//! - Bearer token lookup and header attachment
//! - Uniform error normalization: transport failures and non-2xx responses
//!   are logged with their detail and collapsed into the fixed
//!   [`AppError::RequestFailed`] signal
//!
//! Each call is a stateless, independent request/response exchange. There
//! are no retries and no shared mutable state between calls.

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::session::TokenProvider;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client as HttpClient, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Authentication requirement of an API operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// No Authorization header; used by registration and login
    Anonymous,
    /// `Authorization: Bearer {token}` with the token read at call time
    Bearer,
}

/// Trait for making HTTP requests to the movie database API
///
/// Services are generic over this trait so tests can substitute their own
/// transport.
#[async_trait]
pub trait FlixHttpClient: Send + Sync {
    /// Makes a request to the API and deserializes the response payload
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - API endpoint path, relative to the configured base URL
    /// * `body` - Optional request body, serialized as JSON
    /// * `auth` - Whether to attach the bearer token
    ///
    /// # Returns
    /// * `Ok(T)` - Deserialized response payload (an empty body decodes as
    ///   JSON null)
    /// * `Err(AppError::RequestFailed)` - For any transport failure or
    ///   non-2xx status
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        auth: AuthScheme,
    ) -> Result<T, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send;
}

/// Default implementation of [`FlixHttpClient`] backed by reqwest
pub struct FlixHttpClientImpl {
    config: Arc<Config>,
    tokens: Arc<dyn TokenProvider>,
    http_client: HttpClient,
}

impl FlixHttpClientImpl {
    /// Creates a new HTTP client
    ///
    /// # Arguments
    /// * `config` - Configuration containing the base URL and timeout
    /// * `tokens` - Capability used to read the session token at call time
    ///
    /// # Returns
    /// * `Ok(FlixHttpClientImpl)` - Client ready to use
    /// * `Err(AppError)` - If the underlying HTTP client cannot be built
    pub fn new(config: Arc<Config>, tokens: Arc<dyn TokenProvider>) -> Result<Self, AppError> {
        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            config,
            tokens,
            http_client,
        })
    }

    /// Builds the full URL for an endpoint path
    fn endpoint(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            let path = path.trim_start_matches('/');
            format!("{}/{}", self.config.rest_api.base_url, path)
        }
    }

    /// Parses a successful response into the desired type
    ///
    /// An empty body is treated as JSON null. A body that is not valid JSON
    /// is logged and collapsed like any other failure.
    async fn parse_payload<T: DeserializeOwned>(
        &self,
        url: &str,
        response: Response,
    ) -> Result<T, AppError> {
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                error!("Failed to read response body from {}: {}", url, e);
                return Err(AppError::RequestFailed);
            }
        };

        let raw = if text.trim().is_empty() { "null" } else { text.as_str() };

        serde_json::from_str(raw).map_err(|e| {
            error!("Failed to decode response from {}: {}", url, e);
            AppError::RequestFailed
        })
    }
}

#[async_trait]
impl FlixHttpClient for FlixHttpClientImpl {
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        auth: AuthScheme,
    ) -> Result<T, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let url = self.endpoint(path);
        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, &url)
            .header(ACCEPT, "application/json");

        if auth == AuthScheme::Bearer {
            // Token is read here, at call time: a rotated token is seen by
            // the next call, not by calls already in flight.
            match self.tokens.current().await {
                Some(token) => {
                    request = request.header(AUTHORIZATION, format!("Bearer {token}"));
                }
                None => warn!("No session token available, sending request unauthenticated"),
            }
        }

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!("An error occurred: {}", e);
                return Err(AppError::RequestFailed);
            }
        };

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Backend returned code {}, body was: {}", status, body);
            return Err(AppError::RequestFailed);
        }

        self.parse_payload(&url, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RestApiConfig;
    use crate::session::TokenStore;

    fn test_client(base_url: &str) -> FlixHttpClientImpl {
        let config = Arc::new(Config {
            rest_api: RestApiConfig {
                base_url: base_url.to_string(),
                timeout: 5,
            },
        });
        FlixHttpClientImpl::new(config, Arc::new(TokenStore::new())).unwrap()
    }

    #[test]
    fn endpoint_joins_base_url_and_path() {
        let client = test_client("https://myflix.example.com");
        assert_eq!(
            client.endpoint("movies"),
            "https://myflix.example.com/movies"
        );
    }

    #[test]
    fn endpoint_strips_leading_slash() {
        let client = test_client("https://myflix.example.com");
        assert_eq!(
            client.endpoint("/users/alice"),
            "https://myflix.example.com/users/alice"
        );
    }

    #[test]
    fn endpoint_passes_absolute_urls_through() {
        let client = test_client("https://myflix.example.com");
        assert_eq!(
            client.endpoint("http://other.example.com/movies"),
            "http://other.example.com/movies"
        );
    }
}
