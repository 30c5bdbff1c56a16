//! The movie detail screen's state machine.
//!
//! Bound to a single movie id at construction; drives the one detail fetch,
//! retry after failure, and back navigation.

mod controller;
mod effect;
mod intent;
mod reducer;
mod state;

pub use controller::MovieDetailController;
pub use effect::MovieDetailEffect;
pub use intent::MovieDetailIntent;
pub use reducer::{MovieDetailReducer, MovieDetailTransition};
pub use state::MovieDetailState;
