use crate::application::interfaces::catalog::CatalogService;
use crate::error::AppError;
use crate::model::responses::or_empty_record;
use crate::transport::{AuthScheme, FlixHttpClient};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the catalogue service
pub struct CatalogServiceImpl<T: FlixHttpClient> {
    client: Arc<T>,
}

impl<T: FlixHttpClient> CatalogServiceImpl<T> {
    /// Creates a new instance of the catalogue service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: FlixHttpClient + 'static> CatalogService for CatalogServiceImpl<T> {
    async fn get_all_movies(&self) -> Result<Value, AppError> {
        info!("Fetching the movie catalogue");

        let payload: Value = self
            .client
            .request(Method::GET, "movies", None::<&()>, AuthScheme::Bearer)
            .await?;

        debug!("Movie catalogue obtained");
        Ok(or_empty_record(payload))
    }

    async fn get_movie(&self, id: &str) -> Result<Value, AppError> {
        let path = format!("movies/{id}");
        info!("Fetching movie: {}", id);

        let payload: Value = self
            .client
            .request(Method::GET, &path, None::<&()>, AuthScheme::Bearer)
            .await?;

        debug!("Movie obtained: {}", id);
        Ok(or_empty_record(payload))
    }

    async fn get_director(&self, id: &str) -> Result<Value, AppError> {
        let path = format!("directors/{id}");
        info!("Fetching director: {}", id);

        let payload: Value = self
            .client
            .request(Method::GET, &path, None::<&()>, AuthScheme::Bearer)
            .await?;

        debug!("Director obtained: {}", id);
        Ok(or_empty_record(payload))
    }

    async fn get_genre(&self, id: &str) -> Result<Value, AppError> {
        let path = format!("genres/{id}");
        info!("Fetching genre: {}", id);

        let payload: Value = self
            .client
            .request(Method::GET, &path, None::<&()>, AuthScheme::Bearer)
            .await?;

        debug!("Genre obtained: {}", id);
        Ok(or_empty_record(payload))
    }
}
