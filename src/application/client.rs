/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! Simplified client for the movie database API
//!
//! This module provides a facade that wires configuration, the token
//! capability, the HTTP transport and the services together, exposing one
//! method per API endpoint.
//!
//! # Example
//! ```ignore
//! use flix_client::application::client::FlixClient;
//! use flix_client::config::Config;
//! use flix_client::model::requests::Credentials;
//! use flix_client::session::TokenStore;
//! use std::sync::Arc;
//!
//! let tokens = Arc::new(TokenStore::new());
//! let client = FlixClient::new(Config::new(), tokens.clone())?;
//!
//! let session = client.login(&Credentials::new("alice", "hunter2")).await?;
//! if let Some(token) = session["token"].as_str() {
//!     tokens.set(token).await;
//! }
//!
//! let movies = client.get_all_movies().await?;
//! ```

use crate::application::interfaces::catalog::CatalogService;
use crate::application::interfaces::user::UserService;
use crate::application::services::{CatalogServiceImpl, UserServiceImpl};
use crate::config::Config;
use crate::error::AppError;
use crate::model::requests::Credentials;
use crate::session::TokenProvider;
use crate::transport::FlixHttpClientImpl;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Facade over the catalogue and user services
///
/// Holds a single shared HTTP transport; the token capability is injected
/// at construction so ownership of the session token stays with the
/// embedding application.
pub struct FlixClient {
    catalog: CatalogServiceImpl<FlixHttpClientImpl>,
    users: UserServiceImpl<FlixHttpClientImpl>,
}

impl FlixClient {
    /// Creates a new client
    ///
    /// # Arguments
    /// * `config` - Configuration containing the base URL and timeout
    /// * `tokens` - Capability used to read the session token on every
    ///   authenticated call
    ///
    /// # Returns
    /// * `Ok(FlixClient)` - Client ready to use
    /// * `Err(AppError)` - If the HTTP transport cannot be built
    pub fn new(config: Config, tokens: Arc<dyn TokenProvider>) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http_client = Arc::new(FlixHttpClientImpl::new(config, tokens)?);

        Ok(Self {
            catalog: CatalogServiceImpl::new(http_client.clone()),
            users: UserServiceImpl::new(http_client),
        })
    }
}

#[async_trait]
impl CatalogService for FlixClient {
    async fn get_all_movies(&self) -> Result<Value, AppError> {
        self.catalog.get_all_movies().await
    }

    async fn get_movie(&self, id: &str) -> Result<Value, AppError> {
        self.catalog.get_movie(id).await
    }

    async fn get_director(&self, id: &str) -> Result<Value, AppError> {
        self.catalog.get_director(id).await
    }

    async fn get_genre(&self, id: &str) -> Result<Value, AppError> {
        self.catalog.get_genre(id).await
    }
}

#[async_trait]
impl UserService for FlixClient {
    async fn register(&self, details: &Credentials) -> Result<Value, AppError> {
        self.users.register(details).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<Value, AppError> {
        self.users.login(credentials).await
    }

    async fn get_user(&self, username: &str) -> Result<Value, AppError> {
        self.users.get_user(username).await
    }

    async fn get_favourite_movies(&self, username: &str) -> Result<Value, AppError> {
        self.users.get_favourite_movies(username).await
    }

    async fn add_favourite_movie(
        &self,
        username: &str,
        movie_id: &str,
    ) -> Result<Value, AppError> {
        self.users.add_favourite_movie(username, movie_id).await
    }

    async fn edit_user(&self, username: &str, details: &Value) -> Result<Value, AppError> {
        self.users.edit_user(username, details).await
    }

    async fn delete_user(&self, username: &str) -> Result<Value, AppError> {
        self.users.delete_user(username).await
    }

    async fn delete_favourite_movie(
        &self,
        username: &str,
        movie_id: &str,
    ) -> Result<Value, AppError> {
        self.users.delete_favourite_movie(username, movie_id).await
    }
}
