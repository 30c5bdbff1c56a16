use crate::domain::Movie;
use crate::mvi::ViewState;

/// Snapshot of the movie list screen.
///
/// The three flags track distinct fetch kinds; each has its own guard in the
/// controller, and a renderer maps them to distinct affordances (full-screen
/// spinner, pull-to-refresh indicator, footer spinner).
#[derive(Debug, Clone, PartialEq)]
pub struct MovieListState {
    /// Loaded movies: appended to by pagination, replaced wholesale by
    /// initial load and refresh.
    pub movies: Vec<Movie>,
    pub is_loading: bool,
    pub is_refreshing: bool,
    pub is_paginating: bool,
    /// Blocking error message, set by initial-load and refresh failures only.
    pub error: Option<String>,
    /// Last successfully loaded page, starting at 1.
    pub current_page: u32,
    pub has_more_pages: bool,
}

impl Default for MovieListState {
    fn default() -> Self {
        Self {
            movies: Vec::new(),
            is_loading: false,
            is_refreshing: false,
            is_paginating: false,
            error: None,
            current_page: 1,
            has_more_pages: true,
        }
    }
}

impl ViewState for MovieListState {}
