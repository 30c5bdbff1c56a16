use crate::domain::MovieDetail;
use crate::mvi::ViewState;

/// Snapshot of the movie detail screen.
///
/// In steady state exactly one of `detail`, `error`, or `is_loading` is
/// populated; all three empty only in the instant before the construction-time
/// load begins.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MovieDetailState {
    pub detail: Option<MovieDetail>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl ViewState for MovieDetailState {}
