//! Wire record → domain value mapping.
//!
//! The list projection is deliberately lossy: `popularity` and `genre_ids`
//! never leave the data layer.

use crate::data::dto::{GenreDto, MovieDetailDto, MovieDto};
use crate::domain::{Genre, Movie, MovieDetail};

impl From<MovieDto> for Movie {
    fn from(dto: MovieDto) -> Self {
        Movie {
            id: dto.id,
            title: dto.title,
            poster_path: dto.poster_path,
            release_date: dto.release_date,
            vote_average: dto.vote_average,
            overview: dto.overview,
        }
    }
}

impl From<MovieDetailDto> for MovieDetail {
    fn from(dto: MovieDetailDto) -> Self {
        MovieDetail {
            id: dto.id,
            title: dto.title,
            overview: dto.overview,
            poster_path: dto.poster_path,
            backdrop_path: dto.backdrop_path,
            release_date: dto.release_date,
            vote_average: dto.vote_average,
            vote_count: dto.vote_count,
            runtime: dto.runtime,
            genres: dto.genres.into_iter().map(Genre::from).collect(),
            tagline: dto.tagline,
        }
    }
}

impl From<GenreDto> for Genre {
    fn from(dto: GenreDto) -> Self {
        Genre {
            id: dto.id,
            name: dto.name,
        }
    }
}
