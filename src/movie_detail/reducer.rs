use crate::domain::MovieDetail;
use crate::movie_detail::state::MovieDetailState;
use crate::mvi::{Intent, Reducer};

/// Internal state transitions for the detail fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum MovieDetailTransition {
    LoadStarted,
    LoadSucceeded { detail: MovieDetail },
    LoadFailed { message: String },
}

impl Intent for MovieDetailTransition {}

pub struct MovieDetailReducer;

impl Reducer for MovieDetailReducer {
    type State = MovieDetailState;
    type Intent = MovieDetailTransition;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MovieDetailTransition::LoadStarted => MovieDetailState {
                is_loading: true,
                error: None,
                ..state
            },
            MovieDetailTransition::LoadSucceeded { detail } => MovieDetailState {
                detail: Some(detail),
                is_loading: false,
                ..state
            },
            MovieDetailTransition::LoadFailed { message } => MovieDetailState {
                is_loading: false,
                error: Some(message),
                ..state
            },
        }
    }
}
