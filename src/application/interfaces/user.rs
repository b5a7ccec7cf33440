use crate::error::AppError;
use crate::model::requests::Credentials;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the user service
///
/// Registration and login are the only unauthenticated operations; every
/// other call attaches the current session token. Usernames and movie ids
/// are interpolated into URL paths without validation or escaping, which is
/// the caller's responsibility.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Registers a new user account
    ///
    /// The credentials pair is sent verbatim as the request body. No
    /// Authorization header is attached.
    async fn register(&self, details: &Credentials) -> Result<Value, AppError>;

    /// Logs a user in
    ///
    /// The backend response contains the session token; storing it in the
    /// client's token provider is the caller's responsibility.
    async fn login(&self, credentials: &Credentials) -> Result<Value, AppError>;

    /// Gets a user's profile by username
    async fn get_user(&self, username: &str) -> Result<Value, AppError>;

    /// Gets the favourite movies of a user
    async fn get_favourite_movies(&self, username: &str) -> Result<Value, AppError>;

    /// Adds a movie to a user's favourites
    ///
    /// Issues a POST with an empty body.
    async fn add_favourite_movie(&self, username: &str, movie_id: &str)
    -> Result<Value, AppError>;

    /// Updates a user's profile
    ///
    /// # Arguments
    /// * `username` - User to update
    /// * `details` - Profile fields, passed through verbatim as the body
    async fn edit_user(&self, username: &str, details: &Value) -> Result<Value, AppError>;

    /// Deletes a user account
    async fn delete_user(&self, username: &str) -> Result<Value, AppError>;

    /// Removes a movie from a user's favourites
    async fn delete_favourite_movie(
        &self,
        username: &str,
        movie_id: &str,
    ) -> Result<Value, AppError>;
}
