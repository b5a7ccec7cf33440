use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the catalogue service
///
/// All operations require an authenticated session token and deliver the
/// backend payload untyped, as [`Value`]. An empty or absent payload is
/// replaced with an empty record before delivery.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Gets all movies in the catalogue
    async fn get_all_movies(&self) -> Result<Value, AppError>;

    /// Gets a single movie by its id
    ///
    /// # Arguments
    /// * `id` - Movie identifier, interpolated into the URL path as-is
    async fn get_movie(&self, id: &str) -> Result<Value, AppError>;

    /// Gets details of a director by id
    async fn get_director(&self, id: &str) -> Result<Value, AppError>;

    /// Gets details of a genre by id
    async fn get_genre(&self, id: &str) -> Result<Value, AppError>;
}
