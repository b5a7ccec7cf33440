/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! Error types for the movie database client
//!
//! Every failed API call surfaces as [`AppError::RequestFailed`], a fixed
//! caller-visible message. The distinction between transport failures and
//! server-returned errors is only visible in the log output, not in the
//! returned error.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum AppError {
    /// Fixed failure signal delivered to callers when an API call fails,
    /// regardless of whether the cause was a transport error or a non-2xx
    /// status. The diagnostic detail is emitted to the log instead.
    #[error("something bad happened; please try again later")]
    RequestFailed,

    /// Failure while constructing the underlying HTTP client
    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),
}
