//! The remote data-source seam.

use async_trait::async_trait;
use thiserror::Error;

use crate::data::dto::{MovieDetailDto, MoviePageDto};

/// Language tag sent with every catalog request.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Classified faults a data source may raise.
///
/// The classification exists for diagnostics; control flow upstream does not
/// distinguish the variants. The repository collapses all of them into a
/// single displayable [`crate::domain::FetchError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataSourceError {
    /// Network unreachable, connection reset, timeout.
    #[error("network error: {0}")]
    Transport(String),

    /// The service answered with a payload we could not decode.
    #[error("malformed response: {0}")]
    Decoding(String),

    /// Anything else.
    #[error("{0}")]
    Unclassified(String),
}

/// Remote fetch operations against the catalog service.
///
/// Implementations own transport concerns entirely (endpoints, auth,
/// timeouts, JSON decoding) and report failure only through
/// [`DataSourceError`]. Test code substitutes stubs without subclassing.
#[async_trait]
pub trait MovieDataSource: Send + Sync {
    /// Fetch one page (≥ 1) of the popular-movies listing, results in server
    /// order.
    async fn fetch_page(
        &self,
        page: u32,
        language: &str,
    ) -> Result<MoviePageDto, DataSourceError>;

    /// Fetch the raw detail record for a movie id.
    async fn fetch_detail(
        &self,
        movie_id: u64,
        language: &str,
    ) -> Result<MovieDetailDto, DataSourceError>;
}
