/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_REST_TIMEOUT};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the movie database API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the movie database REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from the environment
    ///
    /// Reads `FLIX_REST_BASE_URL` and `FLIX_REST_TIMEOUT`, loading a `.env`
    /// file first if one is present.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env_or_default("FLIX_REST_BASE_URL", String::from(DEFAULT_BASE_URL));

        if base_url == DEFAULT_BASE_URL {
            warn!("FLIX_REST_BASE_URL not found in environment variables or .env file");
        }

        Config {
            rest_api: RestApiConfig {
                base_url,
                timeout: get_env_or_default("FLIX_REST_TIMEOUT", DEFAULT_REST_TIMEOUT),
            },
        }
    }
}
