use crate::application::interfaces::user::UserService;
use crate::error::AppError;
use crate::model::requests::Credentials;
use crate::model::responses::or_empty_record;
use crate::transport::{AuthScheme, FlixHttpClient};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the user service
pub struct UserServiceImpl<T: FlixHttpClient> {
    client: Arc<T>,
}

impl<T: FlixHttpClient> UserServiceImpl<T> {
    /// Creates a new instance of the user service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: FlixHttpClient + 'static> UserService for UserServiceImpl<T> {
    async fn register(&self, details: &Credentials) -> Result<Value, AppError> {
        info!("Registering user: {}", details.username);

        self.client
            .request(Method::POST, "users", Some(details), AuthScheme::Anonymous)
            .await
    }

    async fn login(&self, credentials: &Credentials) -> Result<Value, AppError> {
        info!("Logging in user: {}", credentials.username);

        self.client
            .request(Method::POST, "login", Some(credentials), AuthScheme::Anonymous)
            .await
    }

    async fn get_user(&self, username: &str) -> Result<Value, AppError> {
        let path = format!("users/{username}");
        info!("Fetching user: {}", username);

        let payload: Value = self
            .client
            .request(Method::GET, &path, None::<&()>, AuthScheme::Bearer)
            .await?;

        debug!("User obtained: {}", username);
        Ok(or_empty_record(payload))
    }

    async fn get_favourite_movies(&self, username: &str) -> Result<Value, AppError> {
        let path = format!("users/{username}/movies");
        info!("Fetching favourite movies of: {}", username);

        let payload: Value = self
            .client
            .request(Method::GET, &path, None::<&()>, AuthScheme::Bearer)
            .await?;

        debug!("Favourite movies obtained for: {}", username);
        Ok(or_empty_record(payload))
    }

    async fn add_favourite_movie(
        &self,
        username: &str,
        movie_id: &str,
    ) -> Result<Value, AppError> {
        let path = format!("users/{username}/movies/{movie_id}");
        info!("Adding movie {} to favourites of {}", movie_id, username);

        // Empty body: the movie id travels in the path.
        self.client
            .request(Method::POST, &path, None::<&()>, AuthScheme::Bearer)
            .await
    }

    async fn edit_user(&self, username: &str, details: &Value) -> Result<Value, AppError> {
        let path = format!("users/{username}");
        info!("Updating user: {}", username);

        self.client
            .request(Method::PUT, &path, Some(details), AuthScheme::Bearer)
            .await
    }

    async fn delete_user(&self, username: &str) -> Result<Value, AppError> {
        let path = format!("users/{username}");
        info!("Deleting user: {}", username);

        self.client
            .request(Method::DELETE, &path, None::<&()>, AuthScheme::Bearer)
            .await
    }

    async fn delete_favourite_movie(
        &self,
        username: &str,
        movie_id: &str,
    ) -> Result<Value, AppError> {
        let path = format!("users/{username}/movies/{movie_id}");
        info!("Removing movie {} from favourites of {}", movie_id, username);

        self.client
            .request(Method::DELETE, &path, None::<&()>, AuthScheme::Bearer)
            .await
    }
}
