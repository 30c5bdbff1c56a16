//! Domain layer: immutable catalog values and the repository capability.

mod model;
mod repository;

pub use model::{Genre, Movie, MovieDetail};
pub use repository::{FetchError, MovieRepository};
