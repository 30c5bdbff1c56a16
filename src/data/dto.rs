//! Raw records in the catalog service's wire shape.
//!
//! Field names follow the TMDB-style snake_case payloads, so no rename
//! attributes are needed. Fields the service may omit carry `#[serde(default)]`.

use serde::{Deserialize, Serialize};

/// One page of the popular-movies listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoviePageDto {
    pub page: u32,
    pub results: Vec<MovieDto>,
    pub total_pages: u32,
    pub total_results: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDto {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    pub vote_average: f64,
    pub vote_count: u32,
    pub popularity: f64,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetailDto {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    pub vote_average: f64,
    pub vote_count: u32,
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<GenreDto>,
    pub tagline: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreDto {
    pub id: u64,
    pub name: String,
}
