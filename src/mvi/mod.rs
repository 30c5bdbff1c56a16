//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the base contracts for unidirectional data flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Renderer
//!    ↑                               │
//!    └────────── Effect ─────────────┘
//! ```
//!
//! - **State**: immutable snapshot of everything a renderer needs
//! - **Intent**: user actions and fetch completions
//! - **Reducer**: pure function transforming state in response to intents
//! - **Effect**: one-shot notifications (navigation) kept out of state
//!
//! Controllers own the loop: they guard and apply transitions through a
//! reducer, run fetches on a [`ControllerScope`], and emit effects through an
//! [`EffectChannel`].

mod effect;
mod intent;
mod reducer;
mod scope;
mod state;

pub use effect::{Effect, EffectChannel, EffectStream};
pub use intent::Intent;
pub use reducer::Reducer;
pub use scope::ControllerScope;
pub use state::ViewState;
