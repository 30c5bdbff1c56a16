//! The repository fault boundary.

use std::sync::Arc;

use async_trait::async_trait;

use crate::data::source::{MovieDataSource, DEFAULT_LANGUAGE};
use crate::domain::{FetchError, Movie, MovieDetail, MovieRepository};

/// [`MovieRepository`] implementation over a [`MovieDataSource`].
///
/// Purely a translation and containment layer: raw records become domain
/// values, classified faults become [`FetchError`]s. No retries, no caching;
/// retry policy belongs to the controllers.
pub struct CatalogRepository {
    source: Arc<dyn MovieDataSource>,
}

impl CatalogRepository {
    pub fn new(source: Arc<dyn MovieDataSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl MovieRepository for CatalogRepository {
    async fn fetch_page(&self, page: u32) -> Result<Vec<Movie>, FetchError> {
        match self.source.fetch_page(page, DEFAULT_LANGUAGE).await {
            Ok(response) => Ok(response.results.into_iter().map(Movie::from).collect()),
            Err(err) => {
                tracing::warn!(page, error = %err, "page fetch failed");
                Err(FetchError::new(err.to_string()))
            }
        }
    }

    async fn fetch_detail(&self, movie_id: u64) -> Result<MovieDetail, FetchError> {
        match self.source.fetch_detail(movie_id, DEFAULT_LANGUAGE).await {
            Ok(response) => Ok(MovieDetail::from(response)),
            Err(err) => {
                tracing::warn!(movie_id, error = %err, "detail fetch failed");
                Err(FetchError::new(err.to_string()))
            }
        }
    }
}
