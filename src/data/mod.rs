//! Data layer: wire records, the data-source seam, and the fault boundary.
//!
//! The [`MovieDataSource`] trait is where a concrete transport (HTTP client,
//! on-disk fixture, test stub) plugs in. [`CatalogRepository`] wraps a source,
//! maps its raw records into domain values, and contains every fault so the
//! controllers above only ever see [`crate::domain::FetchError`].

mod dto;
mod mapper;
mod repository;
mod source;

pub use dto::{GenreDto, MovieDetailDto, MovieDto, MoviePageDto};
pub use repository::CatalogRepository;
pub use source::{DataSourceError, MovieDataSource, DEFAULT_LANGUAGE};
