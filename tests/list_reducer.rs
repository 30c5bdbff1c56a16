mod common;

use common::movie;
use moviefeed::movie_list::{MovieListReducer, MovieListState, MovieListTransition};
use moviefeed::mvi::Reducer;

fn loaded_state(movies: Vec<moviefeed::domain::Movie>) -> MovieListState {
    MovieListState {
        movies,
        current_page: 1,
        ..MovieListState::default()
    }
}

#[test]
fn load_started_sets_flag_and_clears_error() {
    let state = MovieListState {
        error: Some("old failure".to_string()),
        ..MovieListState::default()
    };
    let state = MovieListReducer::reduce(state, MovieListTransition::LoadStarted);
    assert!(state.is_loading);
    assert!(state.error.is_none());
}

#[test]
fn load_succeeded_replaces_movies_and_resets_paging() {
    let state = MovieListState {
        is_loading: true,
        current_page: 4,
        ..MovieListState::default()
    };
    let state = MovieListReducer::reduce(
        state,
        MovieListTransition::LoadSucceeded {
            movies: vec![movie(1, "M1")],
        },
    );
    assert_eq!(state.movies.len(), 1);
    assert!(!state.is_loading);
    assert_eq!(state.current_page, 1);
    assert!(state.has_more_pages);
}

#[test]
fn load_succeeded_empty_marks_exhausted() {
    let state = MovieListReducer::reduce(
        MovieListState::default(),
        MovieListTransition::LoadSucceeded { movies: Vec::new() },
    );
    assert!(!state.has_more_pages);
}

#[test]
fn load_failed_keeps_movies_untouched() {
    let state = MovieListState {
        is_loading: true,
        ..loaded_state(vec![movie(1, "Kept")])
    };
    let state = MovieListReducer::reduce(
        state,
        MovieListTransition::LoadFailed {
            message: "Network error".to_string(),
        },
    );
    assert!(!state.is_loading);
    assert_eq!(state.error.as_deref(), Some("Network error"));
    assert_eq!(state.movies[0].title, "Kept");
}

#[test]
fn refresh_succeeded_replaces_not_appends() {
    let state = MovieListState {
        is_refreshing: true,
        ..loaded_state(vec![movie(1, "Old")])
    };
    let state = MovieListReducer::reduce(
        state,
        MovieListTransition::RefreshSucceeded {
            movies: vec![movie(2, "New")],
        },
    );
    assert_eq!(state.movies.len(), 1);
    assert_eq!(state.movies[0].title, "New");
    assert_eq!(state.current_page, 1);
    assert!(!state.is_refreshing);
}

#[test]
fn refresh_failed_sets_error() {
    let state = MovieListState {
        is_refreshing: true,
        ..loaded_state(vec![movie(1, "Kept")])
    };
    let state = MovieListReducer::reduce(
        state,
        MovieListTransition::RefreshFailed {
            message: "offline".to_string(),
        },
    );
    assert!(!state.is_refreshing);
    assert_eq!(state.error.as_deref(), Some("offline"));
    assert_eq!(state.movies.len(), 1);
}

#[test]
fn page_started_does_not_clear_error() {
    let state = MovieListState {
        error: Some("stale banner".to_string()),
        ..MovieListState::default()
    };
    let state = MovieListReducer::reduce(state, MovieListTransition::PageStarted);
    assert!(state.is_paginating);
    assert_eq!(state.error.as_deref(), Some("stale banner"));
}

#[test]
fn page_succeeded_appends_in_order_and_advances() {
    let state = MovieListState {
        is_paginating: true,
        ..loaded_state(vec![movie(1, "M1")])
    };
    let state = MovieListReducer::reduce(
        state,
        MovieListTransition::PageSucceeded {
            page: 2,
            movies: vec![movie(2, "M2")],
        },
    );
    let titles: Vec<&str> = state.movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["M1", "M2"]);
    assert_eq!(state.current_page, 2);
    assert!(state.has_more_pages);
    assert!(!state.is_paginating);
}

#[test]
fn page_succeeded_empty_marks_exhausted() {
    let state = MovieListState {
        is_paginating: true,
        ..loaded_state(vec![movie(1, "M1")])
    };
    let state = MovieListReducer::reduce(
        state,
        MovieListTransition::PageSucceeded {
            page: 2,
            movies: Vec::new(),
        },
    );
    assert!(!state.has_more_pages);
    assert_eq!(state.movies.len(), 1);
}

#[test]
fn page_failed_only_resets_flag() {
    let state = MovieListState {
        is_paginating: true,
        ..loaded_state(vec![movie(1, "M1")])
    };
    let state = MovieListReducer::reduce(state, MovieListTransition::PageFailed);
    assert!(!state.is_paginating);
    assert!(state.error.is_none());
    assert_eq!(state.movies.len(), 1);
    assert_eq!(state.current_page, 1);
}
