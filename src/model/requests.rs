/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Username/password pair sent verbatim as the body of registration and
/// login requests. The pair is opaque to the client; no validation is
/// performed on either field.
pub struct Credentials {
    /// Username for the movie database account
    pub username: String,
    /// Password for the movie database account
    pub password: String,
}

impl Credentials {
    /// Creates a new credentials pair
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}
