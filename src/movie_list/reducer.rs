use crate::domain::Movie;
use crate::movie_list::state::MovieListState;
use crate::mvi::{Intent, Reducer};

/// Internal state transitions: fetch starts and completions.
///
/// The controller translates public [`crate::movie_list::MovieListIntent`]s
/// and repository results into these; the reducer applies them without any
/// knowledge of guards or scheduling.
#[derive(Debug, Clone, PartialEq)]
pub enum MovieListTransition {
    LoadStarted,
    LoadSucceeded { movies: Vec<Movie> },
    LoadFailed { message: String },
    RefreshStarted,
    RefreshSucceeded { movies: Vec<Movie> },
    RefreshFailed { message: String },
    PageStarted,
    PageSucceeded { page: u32, movies: Vec<Movie> },
    PageFailed,
}

impl Intent for MovieListTransition {}

pub struct MovieListReducer;

impl Reducer for MovieListReducer {
    type State = MovieListState;
    type Intent = MovieListTransition;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MovieListTransition::LoadStarted => MovieListState {
                is_loading: true,
                error: None,
                ..state
            },
            MovieListTransition::LoadSucceeded { movies } => MovieListState {
                has_more_pages: !movies.is_empty(),
                movies,
                is_loading: false,
                current_page: 1,
                ..state
            },
            MovieListTransition::LoadFailed { message } => MovieListState {
                is_loading: false,
                error: Some(message),
                ..state
            },
            MovieListTransition::RefreshStarted => MovieListState {
                is_refreshing: true,
                error: None,
                ..state
            },
            MovieListTransition::RefreshSucceeded { movies } => MovieListState {
                has_more_pages: !movies.is_empty(),
                movies,
                is_refreshing: false,
                current_page: 1,
                ..state
            },
            MovieListTransition::RefreshFailed { message } => MovieListState {
                is_refreshing: false,
                error: Some(message),
                ..state
            },
            MovieListTransition::PageStarted => MovieListState {
                is_paginating: true,
                ..state
            },
            MovieListTransition::PageSucceeded { page, movies } => {
                let has_more = !movies.is_empty();
                let mut state = state;
                state.movies.extend(movies);
                MovieListState {
                    is_paginating: false,
                    current_page: page,
                    has_more_pages: has_more,
                    ..state
                }
            }
            // Pagination failures are silent: the loaded list stays usable,
            // no blocking error banner.
            MovieListTransition::PageFailed => MovieListState {
                is_paginating: false,
                ..state
            },
        }
    }
}
