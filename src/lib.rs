//! Unidirectional state-management core for a paginated movie catalog client.
//!
//! The crate implements the Model-View-Intent loop behind a movie list screen
//! (pagination, refresh, retry) and a movie detail screen, together with the
//! repository boundary that normalizes data-source faults into domain results.
//!
//! # Architecture
//!
//! ```text
//! Renderer ──Intent──→ Controller ──→ Repository ──→ DataSource
//!     ↑                    │
//!     ├───── State ────────┤   (replay-latest snapshots, watch channel)
//!     └───── Effect ───────┘   (buffered FIFO, delivered at most once)
//! ```
//!
//! Rendering, HTTP transport, and navigation are external collaborators:
//! implement [`data::MovieDataSource`] to plug in a transport, subscribe to
//! controller state/effects to render.

pub mod data;
pub mod domain;
pub mod movie_detail;
pub mod movie_list;
pub mod mvi;
