/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! Session token management for the movie database API
//!
//! The client never obtains or writes a token itself; the embedding
//! application stores the token it received from the login endpoint and the
//! client reads it once per authenticated request. Ownership is explicit: a
//! [`TokenProvider`] is passed into client construction instead of being
//! looked up from process-wide storage.

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Read-only capability for the bearer token attached to authenticated requests
///
/// Implementations must be cheap to call: the token is read once per API
/// call, so a token rotated by the application is picked up by the next call
/// made, never by calls already in flight.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Returns the token to attach to the next request, if one is available
    async fn current(&self) -> Option<String>;
}

/// Default [`TokenProvider`]: a shared writable token cell
///
/// The application writes the token after a successful login and may rotate
/// or clear it at any time. The client only ever reads it.
#[derive(Debug, Default)]
pub struct TokenStore {
    token: RwLock<Option<String>>,
}

impl TokenStore {
    /// Creates an empty token store
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new token, replacing any previous one
    pub async fn set(&self, token: impl Into<String> + Send) {
        let mut guard = self.token.write().await;
        *guard = Some(token.into());
    }

    /// Removes the stored token
    pub async fn clear(&self) {
        let mut guard = self.token.write().await;
        *guard = None;
    }
}

#[async_trait]
impl TokenProvider for TokenStore {
    async fn current(&self) -> Option<String> {
        self.token.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    #[test]
    fn new_store_is_empty() {
        let store = TokenStore::new();
        assert_eq!(block_on(store.current()), None);
    }

    #[test]
    fn set_then_current_returns_token() {
        let store = TokenStore::new();
        block_on(store.set("abc123"));
        assert_eq!(block_on(store.current()), Some("abc123".to_string()));
    }

    #[test]
    fn rotation_is_visible_to_next_read() {
        let store = TokenStore::new();
        block_on(store.set("first"));
        block_on(store.set("second"));
        assert_eq!(block_on(store.current()), Some("second".to_string()));
    }

    #[test]
    fn clear_removes_token() {
        let store = TokenStore::new();
        block_on(store.set("abc123"));
        block_on(store.clear());
        assert_eq!(block_on(store.current()), None);
    }
}
