/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/25
******************************************************************************/

//! # Flix Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the library.
//!
//! ## Usage
//!
//! ```rust
//! use flix_client::prelude::*;
//!
//! let config = Config::new();
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the movie database API client
pub use crate::config::Config;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// SESSION TOKEN MANAGEMENT
// ============================================================================

/// Token capability trait and its default implementation
pub use crate::session::{TokenProvider, TokenStore};

// ============================================================================
// CORE SERVICES (TRAITS)
// ============================================================================

/// Catalogue service trait for movie, director and genre lookups
pub use crate::application::services::CatalogService;

/// User service trait for accounts and favourites
pub use crate::application::services::UserService;

// ============================================================================
// SERVICE IMPLEMENTATIONS
// ============================================================================

/// Catalogue service implementation
pub use crate::application::services::catalog_service::CatalogServiceImpl;

/// User service implementation
pub use crate::application::services::user_service::UserServiceImpl;

/// Facade wiring transport and services together
pub use crate::application::client::FlixClient;

// ============================================================================
// TRANSPORT AND HTTP CLIENT
// ============================================================================

/// HTTP client trait
pub use crate::transport::FlixHttpClient;

/// HTTP client implementation
pub use crate::transport::{AuthScheme, FlixHttpClientImpl};

// ============================================================================
// MODELS
// ============================================================================

/// Credentials pair for registration and login
pub use crate::model::requests::Credentials;

/// Response payload helpers
pub use crate::model::responses::or_empty_record;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value;
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest for HTTP operations (if needed for custom implementations)
pub use reqwest::Method;
