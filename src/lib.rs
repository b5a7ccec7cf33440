/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! # flix-client
//!
//! A thin asynchronous client for a movie database REST API.
//!
//! The crate exposes one method per API endpoint: registration, login,
//! read access to movies, directors and genres, user profile CRUD and
//! favourite-movie management. Every method builds one HTTP request against
//! the configured base URL, attaches a bearer token for authenticated
//! endpoints and delivers the response payload untyped. Failures are logged
//! with their detail and collapsed into a single fixed error signal.
//!
//! ## Quick start
//! ```ignore
//! use flix_client::prelude::*;
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

/// Client facade and services for the API endpoints
pub mod application;
/// Application configuration module
pub mod config;
/// Crate-wide constants
pub mod constants;
/// Error types
pub mod error;
/// Request models and response payload handling
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Session token capability
pub mod session;
/// HTTP transport
pub mod transport;
/// Shared utilities
pub mod utils;

/// Current version of the crate, taken from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the current version of the crate
pub fn version() -> &'static str {
    VERSION
}
