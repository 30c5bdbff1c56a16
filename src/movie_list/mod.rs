//! The movie list screen's state machine.
//!
//! Drives initial load, pull-to-refresh, infinite-scroll pagination, retry,
//! and navigation to the detail screen. The state shape mirrors what a list
//! renderer needs verbatim; the reducer is pure and the controller owns all
//! guards and fetch orchestration.

mod controller;
mod effect;
mod intent;
mod reducer;
mod state;

pub use controller::MovieListController;
pub use effect::MovieListEffect;
pub use intent::MovieListIntent;
pub use reducer::{MovieListReducer, MovieListTransition};
pub use state::MovieListState;
