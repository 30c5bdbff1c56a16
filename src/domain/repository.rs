//! Repository capability consumed by the controllers.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::model::{Movie, MovieDetail};

/// Domain-level fetch failure.
///
/// Every transport, decoding, or otherwise unclassified fault in the data
/// layer collapses into this single message-carrying value; controllers only
/// need something displayable to put in their `error` state field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Read access to the movie catalog.
///
/// Implementations never panic and never surface raw transport faults; the
/// contract is `Ok(value)` or `Err(FetchError)`. Retry policy lives with the
/// caller, driven by explicit user intent.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Fetch one page of the popular-movies listing. Pages start at 1.
    async fn fetch_page(&self, page: u32) -> Result<Vec<Movie>, FetchError>;

    /// Fetch the detail record for a single movie.
    async fn fetch_detail(&self, movie_id: u64) -> Result<MovieDetail, FetchError>;
}
