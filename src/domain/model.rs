//! Catalog domain values.
//!
//! All values here are immutable: the mapping boundary constructs them and
//! nothing mutates them afterwards. Ids are unique and stable across pages.

/// List-level projection of a movie.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    /// Average rating on the 0.0–10.0 scale.
    pub vote_average: f64,
    pub overview: String,
}

/// Full detail record for a single movie.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetail {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: String,
    /// Average rating on the 0.0–10.0 scale.
    pub vote_average: f64,
    pub vote_count: u32,
    /// Runtime in minutes, when the catalog knows it.
    pub runtime: Option<u32>,
    /// Genres in server order.
    pub genres: Vec<Genre>,
    pub tagline: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}
